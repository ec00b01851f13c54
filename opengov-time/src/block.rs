use serde::{Deserialize, Serialize};
use std::fmt;

/// Height of a block on the governance chain.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[cfg_attr(
    any(test, feature = "property-test-api"),
    derive(test_strategy::Arbitrary)
)]
pub struct BlockNumber(pub u32);

/// A number of blocks, e.g. a voting or locking period.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[cfg_attr(
    any(test, feature = "property-test-api"),
    derive(test_strategy::Arbitrary)
)]
pub struct BlockCount(pub u32);

impl BlockNumber {
    /// The height `count` blocks after this one, clamped at `u32::MAX`.
    #[must_use]
    pub fn saturating_add(self, count: BlockCount) -> Self {
        BlockNumber(self.0.saturating_add(count.0))
    }

    /// Number of blocks left before `target` is reached, zero if it already was.
    pub fn blocks_until(self, target: BlockNumber) -> BlockCount {
        BlockCount(target.0.saturating_sub(self.0))
    }
}

impl BlockCount {
    pub const ZERO: Self = BlockCount(0);

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn saturating_mul(self, factor: u32) -> Self {
        BlockCount(self.0.saturating_mul(factor))
    }
}

impl From<u32> for BlockNumber {
    fn from(v: u32) -> Self {
        BlockNumber(v)
    }
}

impl From<BlockNumber> for u32 {
    fn from(b: BlockNumber) -> Self {
        b.0
    }
}

impl From<u32> for BlockCount {
    fn from(v: u32) -> Self {
        BlockCount(v)
    }
}

impl fmt::Display for BlockNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for BlockCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} blocks", self.0)
    }
}

#[cfg(any(test, feature = "property-test-api"))]
mod arbitrary {
    use super::{BlockCount, BlockNumber};
    use quickcheck::{Arbitrary, Gen};

    impl Arbitrary for BlockNumber {
        fn arbitrary<G: Gen>(g: &mut G) -> Self {
            BlockNumber(Arbitrary::arbitrary(g))
        }
    }

    impl Arbitrary for BlockCount {
        fn arbitrary<G: Gen>(g: &mut G) -> Self {
            BlockCount(Arbitrary::arbitrary(g))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use test_strategy::proptest;

    #[test]
    fn saturating_add_clamps_at_max() {
        let near_end = BlockNumber(u32::MAX - 1);
        assert_eq!(near_end.saturating_add(BlockCount(10)), BlockNumber(u32::MAX));
    }

    #[test]
    fn display() {
        assert_eq!(BlockNumber(101_800).to_string(), "#101800");
        assert_eq!(BlockCount(7).to_string(), "7 blocks");
    }

    #[quickcheck]
    fn blocks_until_is_zero_once_reached(current: BlockNumber, target: BlockNumber) -> bool {
        let left = current.blocks_until(target);
        if current >= target {
            left.is_zero()
        } else {
            current.saturating_add(left) == target
        }
    }

    #[proptest]
    fn serde_is_transparent(block: BlockNumber) {
        let encoded = serde_json::to_string(&block).unwrap();
        assert_eq!(encoded, block.0.to_string());
    }
}
