//! Runtime constants the estimator depends on.

use crate::BlockCount;
use serde::{Deserialize, Serialize};

/// `convictionVoting.voteLockingPeriod` and `referenda.undecidingTimeout`.
///
/// Both are global runtime constants, not per-track parameters. A zero
/// locking period is valid: conviction then adds no lock after a referendum
/// ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GovernanceConstants {
    vote_locking_period: BlockCount,
    undeciding_timeout: BlockCount,
}

impl GovernanceConstants {
    pub fn new(vote_locking_period: BlockCount, undeciding_timeout: BlockCount) -> Self {
        GovernanceConstants {
            vote_locking_period,
            undeciding_timeout,
        }
    }

    /// Polkadot: 28 days of locking, 14 days to start deciding.
    pub fn polkadot() -> Self {
        Self::new(BlockCount(403_200), BlockCount(201_600))
    }

    /// Kusama: 7 days of locking, 14 days to start deciding.
    pub fn kusama() -> Self {
        Self::new(BlockCount(100_800), BlockCount(201_600))
    }

    pub fn vote_locking_period(&self) -> BlockCount {
        self.vote_locking_period
    }

    pub fn undeciding_timeout(&self) -> BlockCount {
        self.undeciding_timeout
    }
}
