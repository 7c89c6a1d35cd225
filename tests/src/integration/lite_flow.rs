//! # Lite Storage Flow
//!
//! Replays the captured lite-storage subnet through `LiteCheckpoint`:
//! checkpoint #451 re-announces the validator set, #452 follows it in the
//! next round and a later commit of #453/#454 completes the run.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use shared_types::BlockRef;
    use sr_05_finality::{ErrorKind, ManualHostChain, UncommittedRun};
    use sr_06_checkpoint::{CheckpointApi, CommitApi, LiteCheckpoint};

    use crate::fixtures::subnet::lite;
    use crate::fixtures::{addresses, batch, hash, lite_relay, HOST_START};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn root() -> BlockRef {
        BlockRef::new(hash(lite::BLOCK_451_HASH), 451)
    }

    /// Relay that has seen checkpoint #451 and one continuation.
    fn relay_with_open_run() -> (LiteCheckpoint, Arc<ManualHostChain>) {
        let (relay, host) = lite_relay();
        relay
            .receive_header(&batch(&[lite::BLOCK_451, lite::BLOCK_452]))
            .unwrap();
        (relay, host)
    }

    // =============================================================================
    // RECEIVE
    // =============================================================================

    #[test]
    fn test_checkpoint_opens_run() {
        let (relay, _host) = lite_relay();

        let outcome = relay
            .receive_header(&batch(&[lite::BLOCK_451, lite::BLOCK_452]))
            .unwrap();
        assert_eq!(outcome.accepted, 2);
        assert_eq!(outcome.stored, vec![root()]);
        assert_eq!(outcome.epochs_scheduled, 1);
        assert!(outcome.finalized.is_empty());

        assert_eq!(
            relay.get_uncommitted_header(&root().hash),
            UncommittedRun {
                sequence: 1,
                last_round: 453,
                last_number: 452,
                last_hash: hash(lite::BLOCK_452_HASH),
            }
        );

        // Only checkpoints are stored
        assert!(relay.get_header(&hash(lite::BLOCK_452_HASH)).is_none());
        let latest = relay.get_latest_blocks();
        assert_eq!(latest.head, root());
        assert_eq!(latest.last_finalized.number, 1);
        assert_eq!(relay.highest_processed(), 452);
    }

    #[test]
    fn test_reannounced_set_keeps_members() {
        let (relay, _host) = relay_with_open_run();
        let current = relay.get_current_validators();
        assert!(current.same_members(&addresses(&lite::VALIDATORS)));
        assert_eq!(current.effective_from, 452);
        assert_eq!(current.threshold, 3);
    }

    #[test]
    fn test_continuation_needs_checkpoint() {
        let (relay, _host) = lite_relay();
        let err = relay
            .receive_header(&batch(&[lite::BLOCK_452]))
            .unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::UnknownParent));
        assert_eq!(relay.highest_processed(), 1);
    }

    #[test]
    fn test_resubmitted_checkpoint_resumes_run() {
        let (relay, _host) = relay_with_open_run();

        let outcome = relay
            .receive_header(&batch(&[lite::BLOCK_451, lite::BLOCK_452, lite::BLOCK_453]))
            .unwrap();
        assert_eq!(outcome.duplicates, 2);
        assert_eq!(outcome.accepted, 1);
        assert_eq!(outcome.finalized, vec![root()]);
    }

    // =============================================================================
    // COMMIT
    // =============================================================================

    #[test]
    fn test_commit_finalizes_root() {
        let (relay, host) = relay_with_open_run();
        host.advance(5);

        let outcome = relay
            .commit_header(&root().hash, &batch(&[lite::BLOCK_453, lite::BLOCK_454]))
            .unwrap();
        assert_eq!(outcome.accepted, 2);
        assert_eq!(outcome.finalized, vec![root()]);

        assert!(relay.get_uncommitted_header(&root().hash).is_settled());
        let record = relay.get_header(&root().hash).unwrap();
        assert!(record.finalized);
        assert_eq!(record.mainnet_number, Some(HOST_START + 5));

        let latest = relay.get_latest_blocks();
        assert_eq!(latest.head, root());
        assert_eq!(latest.last_finalized, root());
        assert_eq!(relay.highest_processed(), 454);
    }

    #[test]
    fn test_commit_after_finalization_is_noop() {
        let (relay, _host) = relay_with_open_run();
        let headers = batch(&[lite::BLOCK_453, lite::BLOCK_454]);
        relay.commit_header(&root().hash, &headers).unwrap();

        let again = relay.commit_header(&root().hash, &headers).unwrap();
        assert!(again.is_noop());
        assert_eq!(relay.get_latest_blocks().last_finalized, root());
    }

    #[test]
    fn test_commit_must_follow_tip() {
        let (relay, _host) = relay_with_open_run();
        let before = relay.get_uncommitted_header(&root().hash);

        let err = relay
            .commit_header(&root().hash, &batch(&[lite::BLOCK_454]))
            .unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::UnknownParent));
        assert_eq!(relay.get_uncommitted_header(&root().hash), before);
    }

    #[test]
    fn test_commit_unknown_root() {
        let (relay, _host) = relay_with_open_run();
        let err = relay
            .commit_header(&hash(lite::BLOCK_452_HASH), &batch(&[lite::BLOCK_453]))
            .unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::UnknownRun));
    }

    #[test]
    fn test_unknown_root_reads_as_settled() {
        let (relay, _host) = lite_relay();
        assert!(relay
            .get_uncommitted_header(&hash(lite::BLOCK_453_HASH))
            .is_settled());
    }
}
