//! # Deposit and Deposit Exit
//!
//! Deposits become single-output blocks between operator blocks; a deposit
//! exit succeeds only for the exact (owner, token, amount) deposited.

#[cfg(test)]
mod tests {
    use crate::fixtures::{PlasmaHarness, CUSTODY, EXIT_PERIOD, GENESIS_TIME, OPERATOR};
    use pc_04_block_submission::{BlockSubmissionApi, BlockType};
    use pc_05_exit_game::{deposit_root, ExitGameApi, ExitGameError, ExitStatus};
    use shared_types::{Amount, UtxoPosition};

    const ALICE: [u8; 20] = [0x01; 20];
    const BOB: [u8; 20] = [0x02; 20];

    #[test]
    fn test_deposit_one_unit_then_exit() {
        let mut h = PlasmaHarness::new();
        let position = h.deposit(ALICE, 1, 0);

        h.service
            .start_deposit_exit(&ALICE, position, 0, Amount::one())
            .unwrap();

        let exit = h.service.exit(position).unwrap();
        assert_eq!(exit.owner, ALICE);
        assert_eq!(exit.amount, Amount::one());
        assert_eq!(exit.status, ExitStatus::Active);
        assert_eq!(exit.exitable_at, GENESIS_TIME + EXIT_PERIOD);
        assert_eq!(h.custody.balance_of(0, &CUSTODY), Amount::one());
    }

    #[test]
    fn test_any_altered_field_fails() {
        let mut h = PlasmaHarness::new();
        let position = h.deposit(ALICE, 1, 0);

        let attempts = [
            (BOB, position, 0, 1u64),
            (ALICE, position, 1, 1),
            (ALICE, position, 0, 2),
        ];
        for (caller, pos, token, amount) in attempts {
            assert_eq!(
                h.service
                    .start_deposit_exit(&caller, pos, token, Amount::from(amount)),
                Err(ExitGameError::ProofMismatch)
            );
        }

        // A deposit block that does not exist yet
        let future = UtxoPosition::encode(2, 0, 0).unwrap();
        assert_eq!(
            h.service
                .start_deposit_exit(&ALICE, future, 0, Amount::one()),
            Err(ExitGameError::ProofMismatch)
        );
        assert!(h.service.exit(position).is_err());
    }

    #[test]
    fn test_deposit_numbering_around_operator_blocks() {
        let mut h = PlasmaHarness::new();
        assert_eq!(h.deposit(ALICE, 1, 0).block_number(), 1);
        assert_eq!(h.deposit(BOB, 1, 0).block_number(), 2);
        assert_eq!(h.service.current_deposit_block(), 3);

        h.service
            .submit_block(&OPERATOR, [9u8; 32], BlockType::Transaction)
            .unwrap();
        assert_eq!(h.service.current_child_block(), 1000);
        assert_eq!(h.service.next_deposit_block(), 1001);
        assert_eq!(h.deposit(ALICE, 1, 0).block_number(), 1001);
    }

    #[test]
    fn test_deposit_block_stores_deposit_root() {
        let mut h = PlasmaHarness::new();
        let position = h.deposit(ALICE, 42, 0);
        let record = h.service.child_block(position.block_number()).unwrap();
        assert_eq!(
            record.merkle_root,
            deposit_root(&ALICE, 0, Amount::from(42))
        );
        assert_eq!(record.block_type, BlockType::Deposit);
        assert_eq!(record.timestamp, GENESIS_TIME);
    }

    #[test]
    fn test_deposit_limit_per_interval() {
        let mut h = PlasmaHarness::with_config(|c| c.child_block_interval = 3);
        h.deposit(ALICE, 1, 0);
        h.deposit(ALICE, 1, 0);

        h.fund(0, ALICE, 1);
        assert_eq!(
            h.service.deposit(&ALICE, Amount::one(), 0),
            Err(ExitGameError::DepositLimitReached { limit: 2 })
        );
        // Funds were not pulled
        assert_eq!(h.custody.balance_of(0, &ALICE), Amount::one());

        h.service
            .submit_block(&OPERATOR, [0u8; 32], BlockType::Transaction)
            .unwrap();
        assert_eq!(h.deposit(ALICE, 1, 0).block_number(), 4);
    }

    #[test]
    fn test_refused_deposit_records_nothing() {
        let mut h = PlasmaHarness::new();
        h.fund(0, ALICE, 5);
        h.custody.set_refuse(true);

        assert!(matches!(
            h.service.deposit(&ALICE, Amount::from(5), 0),
            Err(ExitGameError::TransferFailed(_))
        ));
        assert_eq!(h.service.next_deposit_block(), 1);
        assert!(h.service.child_block(1).is_err());
    }
}
