//! Exiting one output twice, directly or through an aliased position.

#[cfg(test)]
mod tests {
    use crate::fixtures::PlasmaHarness;
    use pc_05_exit_game::{ExitGameApi, ExitGameError, PlasmaTransaction};
    use shared_crypto::Secp256k1KeyPair;
    use shared_types::{Amount, UtxoPosition};

    const ALICE: [u8; 20] = [0x01; 20];
    const BOB: [u8; 20] = [0x02; 20];

    #[test]
    fn test_second_deposit_exit_rejected() {
        let mut h = PlasmaHarness::new();
        let position = h.deposit_and_exit(ALICE, 10);
        assert_eq!(
            h.service
                .start_deposit_exit(&ALICE, position, 0, Amount::from(10)),
            Err(ExitGameError::DuplicateExit(position))
        );
        h.wait_exit_period();
        assert_eq!(h.service.finalize_exits(0).unwrap().paid, vec![position]);
        assert_eq!(h.custody.balance_of(0, &ALICE), Amount::from(10));
    }

    #[test]
    fn test_aliased_deposit_positions_rejected() {
        let mut h = PlasmaHarness::new();
        let position = h.deposit_and_exit(ALICE, 10);
        for alias in [1_000_000_001u64, 1_000_010_000, 1_000_010_001] {
            let alias = UtxoPosition::from(alias);
            assert_eq!(alias.block_number(), position.block_number());
            assert_eq!(
                h.service.start_deposit_exit(&ALICE, alias, 0, Amount::from(10)),
                Err(ExitGameError::InvalidPosition(alias))
            );
        }
        assert_eq!(h.service.state().exit_count(), 1);
    }

    #[test]
    fn test_deposit_exit_through_operator_block_number_rejected() {
        let mut h = PlasmaHarness::new();
        let alice = Secp256k1KeyPair::generate();
        let deposit = h.deposit(alice.address(), 10, 0);
        let spend = h.submit_transaction(
            PlasmaTransaction::spending(deposit, 0, BOB, Amount::from(10)),
            vec![&alice],
        );

        // Operator block posing as a deposit
        assert_eq!(
            h.service
                .start_deposit_exit(&BOB, spend.output(0), 0, Amount::from(10)),
            Err(ExitGameError::InvalidPosition(spend.output(0)))
        );
    }

    #[test]
    fn test_deposit_exited_as_transaction_rejected() {
        let mut h = PlasmaHarness::new();
        let alice = Secp256k1KeyPair::generate();
        let deposit = h.deposit_and_exit(alice.address(), 10);
        let spend = h.submit_transaction(
            PlasmaTransaction::spending(deposit, 0, BOB, Amount::from(10)),
            vec![&alice],
        );

        // The spend's proof against the deposit block root
        assert_eq!(
            h.service.start_transaction_exit(
                &BOB,
                deposit,
                &spend.tx_bytes,
                &spend.proof,
                &spend.blob()
            ),
            Err(ExitGameError::ProofMismatch)
        );
    }

    #[test]
    fn test_second_transaction_exit_rejected() {
        let mut h = PlasmaHarness::new();
        let alice = Secp256k1KeyPair::generate();
        let deposit = h.deposit(alice.address(), 10, 0);
        let spend = h.submit_transaction(
            PlasmaTransaction::spending(deposit, 0, BOB, Amount::from(10)),
            vec![&alice],
        );

        let exit = |h: &mut PlasmaHarness| {
            h.service.start_transaction_exit(
                &BOB,
                spend.output(0),
                &spend.tx_bytes,
                &spend.proof,
                &spend.blob(),
            )
        };
        assert_eq!(exit(&mut h), Ok(()));
        assert_eq!(
            exit(&mut h),
            Err(ExitGameError::DuplicateExit(spend.output(0)))
        );
    }
}
