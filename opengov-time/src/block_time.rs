use crate::{BlockCount, BlockNumber};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;
use std::time::Duration;
use thiserror::Error;

/// Target block time of relay chains running BABE with 6 second slots.
pub const DEFAULT_BLOCK_TIME_MILLIS: u64 = 6_000;

const DEFAULT_BLOCK_TIME: NonZeroU64 = match NonZeroU64::new(DEFAULT_BLOCK_TIME_MILLIS) {
    Some(millis) => millis,
    None => unreachable!(),
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlockTimeError {
    #[error("block time must be greater than zero")]
    Zero,
}

/// Expected wall-clock time between two consecutive blocks.
///
/// Only an estimate: real block production drifts, so durations derived from
/// it are meant for display ("unlocks in 3 days"), never for consensus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct BlockTime(NonZeroU64);

impl BlockTime {
    pub fn from_millis(millis: u64) -> Result<Self, BlockTimeError> {
        NonZeroU64::new(millis)
            .map(BlockTime)
            .ok_or(BlockTimeError::Zero)
    }

    pub fn as_millis(&self) -> u64 {
        self.0.get()
    }

    /// Wall-clock duration of `count` blocks.
    pub fn duration_of(&self, count: BlockCount) -> Duration {
        Duration::from_millis(self.0.get().saturating_mul(u64::from(count.0)))
    }

    /// Time left from `current` until `target` is produced, zero if it already was.
    pub fn until(&self, current: BlockNumber, target: BlockNumber) -> Duration {
        self.duration_of(current.blocks_until(target))
    }
}

impl Default for BlockTime {
    fn default() -> Self {
        BlockTime(DEFAULT_BLOCK_TIME)
    }
}

impl TryFrom<u64> for BlockTime {
    type Error = BlockTimeError;

    fn try_from(millis: u64) -> Result<Self, Self::Error> {
        Self::from_millis(millis)
    }
}

impl From<BlockTime> for u64 {
    fn from(block_time: BlockTime) -> Self {
        block_time.as_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_block_time_is_rejected() {
        assert_eq!(BlockTime::from_millis(0), Err(BlockTimeError::Zero));
        assert!(serde_json::from_str::<BlockTime>("0").is_err());
    }

    #[test]
    fn vote_locking_period_is_seven_days_on_six_second_blocks() {
        let block_time = BlockTime::default();
        assert_eq!(block_time.as_millis(), DEFAULT_BLOCK_TIME_MILLIS);
        assert_eq!(
            block_time.duration_of(BlockCount(100_800)),
            Duration::from_secs(7 * 24 * 60 * 60)
        );
    }

    #[test]
    fn until_reached_block_is_zero() {
        let block_time = BlockTime::from_millis(12_000).unwrap();
        assert_eq!(
            block_time.until(BlockNumber(200), BlockNumber(100)),
            Duration::ZERO
        );
        assert_eq!(
            block_time.until(BlockNumber(100), BlockNumber(110)),
            Duration::from_secs(120)
        );
    }

    #[test]
    fn deserialize_from_millis() {
        let block_time: BlockTime = serde_json::from_str("2000").unwrap();
        assert_eq!(block_time.as_millis(), 2_000);
    }
}
