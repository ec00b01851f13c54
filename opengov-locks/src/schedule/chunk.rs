use crate::{
    account::Address, referendum::ReferendumId, track::TrackId, value::Value, BlockNumber,
};
use opengov_time::BlockTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChunkClass {
    /// Free to unlock now.
    Claimable,
    /// Free once `release_block` is reached, or at an unknown block when the
    /// lock could not be attributed.
    PendingLock,
    /// Held for as long as the voting power stays delegated.
    PendingDelegation,
}

/// What part of the voter's track state a chunk comes from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum LockSource {
    Vote { referendum: ReferendumId },
    Prior,
    Delegation { target: Address },
    /// Part of the reported track lock no vote, prior or delegation explains.
    Unattributed,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnlockChunk {
    pub track: TrackId,
    pub amount: Value,
    pub class: ChunkClass,
    pub release_block: Option<BlockNumber>,
    pub source: LockSource,
}

impl UnlockChunk {
    pub fn is_claimable(&self) -> bool {
        self.class == ChunkClass::Claimable
    }

    pub fn referendum_id(&self) -> Option<ReferendumId> {
        match self.source {
            LockSource::Vote { referendum } => Some(referendum),
            _ => None,
        }
    }

    /// Display order: earliest release first, then smallest amount; chunks
    /// without a release block come last.
    pub fn display_cmp(&self, other: &Self) -> Ordering {
        let key = |chunk: &Self| (chunk.release_block.is_none(), chunk.release_block, chunk.amount);
        key(self)
            .cmp(&key(other))
            .then_with(|| self.track.cmp(&other.track))
            .then_with(|| self.source.cmp(&other.source))
    }
}

/// Amount locked by a vote on a referendum that is still ongoing.
///
/// It cannot be released before the referendum ends so it never becomes a
/// chunk, but it is still part of the track lock.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeldVote {
    pub track: TrackId,
    pub referendum: ReferendumId,
    pub amount: Value,
    /// Release block if the referendum used its whole decision period.
    pub estimated_release: Option<BlockNumber>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClaimSchedule {
    chunks: Vec<UnlockChunk>,
    held: Vec<HeldVote>,
}

impl ClaimSchedule {
    pub(crate) fn push_chunk(&mut self, chunk: UnlockChunk) {
        self.chunks.push(chunk);
    }

    pub(crate) fn push_held(&mut self, held: HeldVote) {
        self.held.push(held);
    }

    pub fn chunks(&self) -> &[UnlockChunk] {
        &self.chunks
    }

    pub fn held(&self) -> &[HeldVote] {
        &self.held
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty() && self.held.is_empty()
    }

    pub fn claimable(&self) -> impl Iterator<Item = &UnlockChunk> {
        self.chunks.iter().filter(|chunk| chunk.is_claimable())
    }

    /// Chunks still locked, in display order.
    pub fn pending(&self) -> Vec<&UnlockChunk> {
        let mut pending: Vec<&UnlockChunk> = self
            .chunks
            .iter()
            .filter(|chunk| !chunk.is_claimable())
            .collect();
        pending.sort_by(|a, b| a.display_cmp(b));
        pending
    }

    /// [`ClaimSchedule::pending`] with the time left until each release,
    /// `None` for chunks without a release block.
    pub fn pending_with_eta(
        &self,
        block_time: &BlockTime,
        current_block: BlockNumber,
    ) -> Vec<(&UnlockChunk, Option<Duration>)> {
        self.pending()
            .into_iter()
            .map(|chunk| {
                let eta = chunk
                    .release_block
                    .map(|release| block_time.until(current_block, release));
                (chunk, eta)
            })
            .collect()
    }

    /// Everything this schedule attributes to `track`, chunks and held votes.
    pub fn track_total(&self, track: TrackId) -> Value {
        let chunks = self
            .chunks
            .iter()
            .filter(|chunk| chunk.track == track)
            .map(|chunk| chunk.amount);
        let held = self
            .held
            .iter()
            .filter(|held| held.track == track)
            .map(|held| held.amount);
        chunks
            .chain(held)
            .fold(Value::zero(), |acc, v| acc.saturating_add(v))
    }
}
