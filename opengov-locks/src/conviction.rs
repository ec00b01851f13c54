//! Conviction levels and the lock they impose.

use crate::BlockCount;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Multiplier a voter trades for a longer lock once the referendum is over.
///
/// The declaration order is the SCALE index used by `pallet-conviction-voting`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
)]
#[cfg_attr(
    any(test, feature = "property-test-api"),
    derive(test_strategy::Arbitrary)
)]
pub enum Conviction {
    None,
    Locked1x,
    Locked2x,
    Locked3x,
    Locked4x,
    Locked5x,
    Locked6x,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvictionError {
    #[error("unknown conviction index {0}")]
    Unknown(u8),
    #[error("unknown conviction `{0}`")]
    UnknownName(String),
}

impl Conviction {
    /// Number of vote locking periods the balance stays locked after the
    /// referendum is decided. `None` adds no lock at all.
    pub fn lock_periods(self) -> u32 {
        match self {
            Conviction::None => 0,
            Conviction::Locked1x => 1,
            Conviction::Locked2x => 2,
            Conviction::Locked3x => 4,
            Conviction::Locked4x => 8,
            Conviction::Locked5x => 16,
            Conviction::Locked6x => 32,
        }
    }

    /// Lock duration for the chain's `VoteLockingPeriod`.
    pub fn lock_duration(self, vote_locking_period: BlockCount) -> BlockCount {
        vote_locking_period.saturating_mul(self.lock_periods())
    }

    /// Decode the variant name reported by the chain metadata (`"Locked3x"`).
    pub fn from_name(name: &str) -> Result<Self, ConvictionError> {
        Conviction::from_str(name).map_err(|_| ConvictionError::UnknownName(name.to_owned()))
    }
}

impl Default for Conviction {
    fn default() -> Self {
        Conviction::None
    }
}

impl TryFrom<u8> for Conviction {
    type Error = ConvictionError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Conviction::None),
            1 => Ok(Conviction::Locked1x),
            2 => Ok(Conviction::Locked2x),
            3 => Ok(Conviction::Locked3x),
            4 => Ok(Conviction::Locked4x),
            5 => Ok(Conviction::Locked5x),
            6 => Ok(Conviction::Locked6x),
            other => Err(ConvictionError::Unknown(other)),
        }
    }
}

impl From<Conviction> for u8 {
    fn from(conviction: Conviction) -> Self {
        conviction as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{quickcheck, TestResult};
    use strum::IntoEnumIterator;

    #[test]
    fn lock_table() {
        let periods: Vec<u32> = Conviction::iter().map(Conviction::lock_periods).collect();
        assert_eq!(periods, vec![0, 1, 2, 4, 8, 16, 32]);
    }

    #[test]
    fn none_adds_no_lock() {
        assert_eq!(
            Conviction::None.lock_duration(BlockCount(100_800)),
            BlockCount::ZERO
        );
        assert_eq!(
            Conviction::Locked1x.lock_duration(BlockCount(100_800)),
            BlockCount(100_800)
        );
    }

    #[test]
    fn decode_names() {
        assert_eq!(Conviction::from_name("Locked3x"), Ok(Conviction::Locked3x));
        assert_eq!(
            Conviction::from_name("Locked7x"),
            Err(ConvictionError::UnknownName("Locked7x".to_owned()))
        );
    }

    #[test]
    fn deserialize_rejects_unknown_variant() {
        assert_eq!(
            serde_json::from_str::<Conviction>("\"Locked2x\"").unwrap(),
            Conviction::Locked2x
        );
        assert!(serde_json::from_str::<Conviction>("\"Locked9x\"").is_err());
    }

    quickcheck! {
        fn index_roundtrip(index: u8) -> TestResult {
            match Conviction::try_from(index) {
                Ok(conviction) => TestResult::from_bool(u8::from(conviction) == index),
                Err(ConvictionError::Unknown(i)) => TestResult::from_bool(i == index && index > 6),
                Err(_) => TestResult::failed(),
            }
        }
    }
}
