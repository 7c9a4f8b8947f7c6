//! Challenges that reuse, misdirect, or fabricate spending evidence.

#[cfg(test)]
mod tests {
    use crate::fixtures::PlasmaHarness;
    use pc_02_double_signature::{sign_confirmations, sign_spends};
    use pc_05_exit_game::{
        transaction_hash, ExitGameApi, ExitGameError, ExitStatus, PlasmaTransaction,
        RlpTransactionCodec, TransactionChallenge, TransactionCodec,
    };
    use shared_crypto::Secp256k1KeyPair;
    use shared_types::Amount;

    const BOB: [u8; 20] = [0x02; 20];
    const CAROL: [u8; 20] = [0x03; 20];

    #[test]
    fn test_replayed_challenge_rejected() {
        let mut h = PlasmaHarness::new();
        let alice = Secp256k1KeyPair::generate();
        let deposit = h.deposit_and_exit(alice.address(), 10);
        let spend = h.submit_transaction(
            PlasmaTransaction::spending(deposit, 0, BOB, Amount::from(10)),
            vec![&alice],
        );

        assert_eq!(
            h.service
                .challenge_transaction_exit_with_transaction(&spend.challenge(0)),
            Ok(deposit)
        );
        assert_eq!(
            h.service
                .challenge_transaction_exit_with_transaction(&spend.challenge(0)),
            Err(ExitGameError::ExitNotActive {
                position: deposit,
                status: ExitStatus::Voided
            })
        );
    }

    #[test]
    fn test_confirmation_for_another_root_rejected() {
        let mut h = PlasmaHarness::new();
        let alice = Secp256k1KeyPair::generate();
        let deposit = h.deposit_and_exit(alice.address(), 10);
        let spend = h.submit_transaction(
            PlasmaTransaction::spending(deposit, 0, BOB, Amount::from(10)),
            vec![&alice],
        );

        let foreign =
            sign_confirmations(&[&alice], &transaction_hash(&spend.tx_bytes), &[9u8; 32]).unwrap();
        let challenge = TransactionChallenge {
            confirm_signature: &foreign,
            ..spend.challenge(0)
        };
        assert_eq!(
            h.service
                .challenge_transaction_exit_with_transaction(&challenge),
            Err(ExitGameError::SignatureInvalid)
        );
        assert!(h.service.exit(deposit).unwrap().is_active());
    }

    #[test]
    fn test_unincluded_spend_rejected() {
        let mut h = PlasmaHarness::new();
        let alice = Secp256k1KeyPair::generate();
        let deposit = h.deposit_and_exit(alice.address(), 10);
        let included = h.submit_transaction(
            PlasmaTransaction::spending(deposit, 0, BOB, Amount::from(10)),
            vec![&alice],
        );

        // Signed but never committed to any block
        let forged = RlpTransactionCodec::new().encode(&PlasmaTransaction::spending(
            deposit,
            0,
            CAROL,
            Amount::from(10),
        ));
        let hash = transaction_hash(&forged);
        let spends = sign_spends(&[&alice], &hash).unwrap();
        let confirms = sign_confirmations(&[&alice], &hash, &[0u8; 32]).unwrap();
        let challenge = TransactionChallenge {
            challenge_tx: &forged,
            tx_signature: &spends,
            confirm_signature: &confirms,
            ..included.challenge(0)
        };
        assert_eq!(
            h.service
                .challenge_transaction_exit_with_transaction(&challenge),
            Err(ExitGameError::ProofMismatch)
        );
    }

    #[test]
    fn test_challenge_by_stranger_signatures_rejected() {
        let mut h = PlasmaHarness::new();
        let alice = Secp256k1KeyPair::generate();
        let mallory = Secp256k1KeyPair::generate();
        let deposit = h.deposit_and_exit(alice.address(), 10);

        // Mallory spends Alice's output in a committed block
        let spend = h.submit_transaction(
            PlasmaTransaction::spending(deposit, 0, BOB, Amount::from(10)),
            vec![&mallory],
        );
        assert_eq!(
            h.service
                .challenge_transaction_exit_with_transaction(&spend.challenge(0)),
            Err(ExitGameError::SignatureInvalid)
        );

        h.wait_exit_period();
        assert_eq!(h.service.finalize_exits(0).unwrap().paid, vec![deposit]);
    }
}
