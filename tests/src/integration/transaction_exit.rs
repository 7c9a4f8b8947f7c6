//! # Transaction Exit
//!
//! Exits of outputs committed in operator blocks: inclusion at the right
//! index, ownership of the output, and a confirmed double signature.

#[cfg(test)]
mod tests {
    use crate::fixtures::{PlasmaHarness, EXIT_PERIOD, GENESIS_TIME};
    use pc_05_exit_game::{
        ExitGameApi, ExitGameError, PlasmaTransaction, TransactionOutput,
    };
    use shared_crypto::Secp256k1KeyPair;
    use shared_types::{Amount, UtxoPosition};

    const BOB: [u8; 20] = [0x02; 20];
    const CAROL: [u8; 20] = [0x03; 20];

    #[test]
    fn test_height_16_block_exit() {
        let mut h = PlasmaHarness::new();
        let alice = Secp256k1KeyPair::generate();
        let input = h.deposit(alice.address(), 10, 0);

        let signed = h.submit_transaction(
            PlasmaTransaction::spending(input, 0, BOB, Amount::from(10)),
            vec![&alice],
        );
        assert_eq!(signed.proof.len(), 16 * 32);

        h.service
            .start_transaction_exit(
                &BOB,
                signed.output(0),
                &signed.tx_bytes,
                &signed.proof,
                &signed.blob(),
            )
            .unwrap();
        let exit = h.service.exit(signed.output(0)).unwrap();
        assert_eq!(exit.amount, Amount::from(10));
        assert_eq!(exit.exitable_at, GENESIS_TIME + EXIT_PERIOD);
    }

    #[test]
    fn test_proof_of_another_leaf_fails() {
        let mut h = PlasmaHarness::new();
        let alice = Secp256k1KeyPair::generate();
        let first = h.deposit(alice.address(), 10, 0);
        let second = h.deposit(alice.address(), 20, 0);

        let block = h.submit_transactions(&[
            (
                PlasmaTransaction::spending(first, 0, BOB, Amount::from(10)),
                vec![&alice],
            ),
            (
                PlasmaTransaction::spending(second, 0, BOB, Amount::from(20)),
                vec![&alice],
            ),
        ]);
        let (tx0, tx1) = (&block.txs[0], &block.txs[1]);

        // Proof for leaf 1 presented for leaf 0
        assert_eq!(
            h.service.start_transaction_exit(
                &BOB,
                tx0.output(0),
                &tx0.tx_bytes,
                &tx1.proof,
                &tx0.blob()
            ),
            Err(ExitGameError::ProofMismatch)
        );

        // Transaction 1 claimed at index 0
        assert_eq!(
            h.service.start_transaction_exit(
                &BOB,
                tx0.output(0),
                &tx1.tx_bytes,
                &tx1.proof,
                &tx1.blob()
            ),
            Err(ExitGameError::ProofMismatch)
        );

        h.service
            .start_transaction_exit(&BOB, tx1.output(0), &tx1.tx_bytes, &tx1.proof, &tx1.blob())
            .unwrap();
    }

    #[test]
    fn test_second_output_and_two_inputs() {
        let mut h = PlasmaHarness::new();
        let alice = Secp256k1KeyPair::generate();
        let dave = Secp256k1KeyPair::generate();
        let a = h.deposit(alice.address(), 10, 0);
        let d = h.deposit(dave.address(), 5, 0);

        let tx = PlasmaTransaction {
            inputs: [a, d],
            token: 0,
            outputs: [
                TransactionOutput::new(BOB, Amount::from(12)),
                TransactionOutput::new(CAROL, Amount::from(3)),
            ],
        };
        let signed = h.submit_transaction(tx, vec![&alice, &dave]);
        assert_eq!(signed.blob().len(), 4 * 65);

        h.service
            .start_transaction_exit(
                &CAROL,
                signed.output(1),
                &signed.tx_bytes,
                &signed.proof,
                &signed.blob(),
            )
            .unwrap();
        assert_eq!(
            h.service.exit(signed.output(1)).unwrap().amount,
            Amount::from(3)
        );

        // Output 0 still belongs to Bob only
        assert_eq!(
            h.service.start_transaction_exit(
                &CAROL,
                signed.output(0),
                &signed.tx_bytes,
                &signed.proof,
                &signed.blob()
            ),
            Err(ExitGameError::ProofMismatch)
        );
    }

    #[test]
    fn test_unconfirmed_spend_cannot_exit() {
        let mut h = PlasmaHarness::new();
        let alice = Secp256k1KeyPair::generate();
        let input = h.deposit(alice.address(), 10, 0);
        let signed = h.submit_transaction(
            PlasmaTransaction::spending(input, 0, BOB, Amount::from(10)),
            vec![&alice],
        );

        // Confirmation replaced by a second spend signature
        let blob = [signed.spends.clone(), signed.spends.clone()].concat();
        assert_eq!(
            h.service.start_transaction_exit(
                &BOB,
                signed.output(0),
                &signed.tx_bytes,
                &signed.proof,
                &blob
            ),
            Err(ExitGameError::SignatureInvalid)
        );
    }

    #[test]
    fn test_malformed_inputs_are_hard_errors() {
        let mut h = PlasmaHarness::new();
        let alice = Secp256k1KeyPair::generate();
        let input = h.deposit(alice.address(), 10, 0);
        let signed = h.submit_transaction(
            PlasmaTransaction::spending(input, 0, BOB, Amount::from(10)),
            vec![&alice],
        );

        assert!(matches!(
            h.service.start_transaction_exit(
                &BOB,
                signed.output(0),
                &signed.tx_bytes,
                &signed.proof[..32],
                &signed.blob()
            ),
            Err(ExitGameError::MalformedProof(_))
        ));
        assert!(matches!(
            h.service.start_transaction_exit(
                &BOB,
                signed.output(0),
                &signed.tx_bytes[1..],
                &signed.proof,
                &signed.blob()
            ),
            Err(ExitGameError::MalformedTransaction(_))
        ));
        assert!(matches!(
            h.service.start_transaction_exit(
                &BOB,
                signed.output(0),
                &signed.tx_bytes,
                &signed.proof,
                &signed.blob()[..100]
            ),
            Err(ExitGameError::MalformedSignatures(_))
        ));
    }

    #[test]
    fn test_exit_of_unregistered_token_rejected() {
        let mut h = PlasmaHarness::new();
        let alice = Secp256k1KeyPair::generate();
        // Token 8 never deposited or registered
        let signed = h.submit_transaction(
            PlasmaTransaction::spending(UtxoPosition(1_000_000_000), 8, BOB, Amount::from(1)),
            vec![&alice],
        );
        assert_eq!(
            h.service.start_transaction_exit(
                &BOB,
                signed.output(0),
                &signed.tx_bytes,
                &signed.proof,
                &signed.blob()
            ),
            Err(ExitGameError::UnregisteredToken(8))
        );
    }
}
