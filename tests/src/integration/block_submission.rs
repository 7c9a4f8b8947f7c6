//! # Block Submission
//!
//! The operator's block sequence through the exit game, including the batch
//! auction phases and their interaction with deposits.

#[cfg(test)]
mod tests {
    use crate::fixtures::{PlasmaHarness, OPERATOR};
    use pc_04_block_submission::{
        bitmap_has_one_at_spot, BlockSubmissionApi, BlockType, SubmissionError,
    };

    const ALICE: [u8; 20] = [0x01; 20];

    #[test]
    fn test_auction_cycle_and_back() {
        let mut h = PlasmaHarness::new();
        let sequence = [
            BlockType::Transaction,
            BlockType::Order,
            BlockType::OrderDoubleSign,
            BlockType::AuctionResult,
            BlockType::AuctionOutput,
            BlockType::Order,
            BlockType::OrderDoubleSign,
            BlockType::AuctionResult,
            BlockType::AuctionOutput,
            BlockType::Transaction,
        ];
        for (i, ty) in sequence.iter().enumerate() {
            let number = h.service.submit_block(&OPERATOR, [i as u8; 32], *ty).unwrap();
            assert_eq!(number, (i as u64 + 1) * 1000);
            assert_eq!(h.service.current_phase(), *ty);
        }
    }

    #[test]
    fn test_every_disallowed_transition_rejected() {
        for from in BlockType::ALL {
            for to in BlockType::ALL {
                if from.can_transition_to(to) && to.is_submittable() {
                    continue;
                }
                let mut h = PlasmaHarness::new();
                if !drive_to(&mut h, from) {
                    continue;
                }
                let before = h.service.next_child_block();
                assert!(matches!(
                    h.service.submit_block(&OPERATOR, [0u8; 32], to),
                    Err(SubmissionError::InvalidBlockType { .. })
                ));
                assert_eq!(h.service.next_child_block(), before);
                assert_eq!(h.service.current_phase(), from);
            }
        }
    }

    /// Submit blocks until the phase is `target`. `false` if unreachable.
    fn drive_to(h: &mut PlasmaHarness, target: BlockType) -> bool {
        let path: &[BlockType] = match target {
            BlockType::Transaction => &[],
            BlockType::Order => &[BlockType::Order],
            BlockType::OrderDoubleSign => &[BlockType::Order, BlockType::OrderDoubleSign],
            BlockType::AuctionResult => &[
                BlockType::Order,
                BlockType::OrderDoubleSign,
                BlockType::AuctionResult,
            ],
            BlockType::AuctionOutput => &[
                BlockType::Order,
                BlockType::OrderDoubleSign,
                BlockType::AuctionResult,
                BlockType::AuctionOutput,
            ],
            BlockType::Deposit => return false,
        };
        for ty in path {
            h.service
                .submit_block(&OPERATOR, [0u8; 32], *ty)
                .expect("path follows the transition table");
        }
        true
    }

    #[test]
    fn test_order_block_after_deposit() {
        let mut h = PlasmaHarness::new();
        h.deposit(ALICE, 1, 0);
        assert_eq!(h.service.current_phase(), BlockType::Transaction);
        assert_eq!(
            h.service.submit_block(&OPERATOR, [1u8; 32], BlockType::Order),
            Ok(1000)
        );
    }

    #[test]
    fn test_deposits_during_auction_keep_phase() {
        let mut h = PlasmaHarness::new();
        h.service
            .submit_block(&OPERATOR, [1u8; 32], BlockType::Order)
            .unwrap();
        h.deposit(ALICE, 1, 0);
        assert_eq!(h.service.current_phase(), BlockType::Order);
        assert!(h
            .service
            .submit_block(&OPERATOR, [2u8; 32], BlockType::OrderDoubleSign)
            .is_ok());
    }

    #[test]
    fn test_non_operator_rejected() {
        let mut h = PlasmaHarness::new();
        assert_eq!(
            h.service
                .submit_block(&ALICE, [0u8; 32], BlockType::Transaction),
            Err(SubmissionError::AccessDenied { caller: ALICE })
        );
        assert_eq!(h.service.next_child_block(), 1000);
    }

    #[test]
    fn test_order_bitmap_lookup() {
        let bitmap = [1u8, 0, 0xFF, 0];
        assert_eq!(bitmap_has_one_at_spot(0, &bitmap), Ok(true));
        assert_eq!(bitmap_has_one_at_spot(1, &bitmap), Ok(false));
        assert_eq!(bitmap_has_one_at_spot(2, &bitmap), Ok(true));
        assert!(bitmap_has_one_at_spot(4, &bitmap).is_err());
    }
}
