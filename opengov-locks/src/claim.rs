//! What an account can unlock right now.

use crate::{
    account::Address,
    schedule::UnlockChunk,
    value::Value,
};
use serde::{Deserialize, Serialize};

/// The claimable chunks of one account and their total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClaimableSummary {
    pub address: Address,
    pub chunks: Vec<UnlockChunk>,
    pub total: Value,
}

impl ClaimableSummary {
    /// Whether an unlock would free anything. Claimable chunks can all be
    /// zero when the expired votes are still covered by a longer lock.
    pub fn is_unlockable(&self) -> bool {
        !self.total.is_zero()
    }
}

/// Keep the claimable chunks of `address`'s schedule and sum them.
///
/// Filtering the chunks of a summary again gives back the same summary.
pub fn filter_claimable(chunks: &[UnlockChunk], address: &Address) -> ClaimableSummary {
    let chunks: Vec<UnlockChunk> = chunks
        .iter()
        .filter(|chunk| chunk.is_claimable())
        .cloned()
        .collect();
    let total = chunks
        .iter()
        .fold(Value::zero(), |acc, chunk| acc.saturating_add(chunk.amount));

    ClaimableSummary {
        address: address.clone(),
        chunks,
        total,
    }
}
