//! Cutting one track lock into non-overlapping pieces.
//!
//! Conviction voting does not add the locks of a track together: the chain
//! locks the largest of them. The amount freed when a lock expires is only
//! what exceeds every lock that expires later, so pieces are visited from the
//! last release to the first and each keeps what is not covered yet.

use super::chunk::{ChunkClass, ClaimSchedule, HeldVote, LockSource, UnlockChunk};
use crate::{
    account::Address, referendum::ReferendumId, track::TrackId, value::Value, BlockNumber,
};
use std::cmp::{Ordering, Reverse};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Release {
    /// Voting power is delegated, no release can be predicted.
    Delegated,
    /// Vote on an ongoing referendum.
    Held { estimated: Option<BlockNumber> },
    At(BlockNumber),
}

impl Release {
    /// Open-ended releases sort first, then later blocks before earlier ones.
    fn rank(&self) -> (u8, Reverse<BlockNumber>) {
        match self {
            Release::Delegated => (0, Reverse(BlockNumber(u32::MAX))),
            Release::Held { .. } => (1, Reverse(BlockNumber(u32::MAX))),
            Release::At(block) => (2, Reverse(*block)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum Origin {
    Delegation(Address),
    Vote(ReferendumId),
    Prior,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct LockPiece {
    pub amount: Value,
    pub release: Release,
    pub origin: Origin,
}

impl LockPiece {
    fn cmp_latest_first(&self, other: &Self) -> Ordering {
        self.release
            .rank()
            .cmp(&other.release.rank())
            .then_with(|| other.amount.cmp(&self.amount))
            .then_with(|| self.origin.cmp(&other.origin))
    }
}

/// Append the chunks of `track` to `schedule`.
///
/// `lock` is the amount the chain reports for the track. Pieces larger than
/// it are capped, and whatever the pieces do not cover is reported as an
/// unattributed pending chunk, so chunks and held votes of the track always
/// add up to `lock`.
pub(super) fn cut(
    track: TrackId,
    lock: Value,
    mut pieces: Vec<LockPiece>,
    current_block: BlockNumber,
    schedule: &mut ClaimSchedule,
) {
    pieces.sort_by(LockPiece::cmp_latest_first);

    let mut covered = Value::zero();
    for piece in pieces {
        let capped = std::cmp::min(piece.amount, lock);
        let portion = capped.saturating_sub(covered);
        covered = std::cmp::max(covered, capped);

        match (piece.release, piece.origin) {
            (Release::Held { estimated }, Origin::Vote(referendum)) => {
                if !portion.is_zero() {
                    schedule.push_held(HeldVote {
                        track,
                        referendum,
                        amount: portion,
                        estimated_release: estimated,
                    });
                }
            }
            (Release::Held { .. }, origin) => {
                unreachable!("only votes can be held by an ongoing referendum: {:?}", origin)
            }
            (Release::Delegated, origin) => {
                if !portion.is_zero() {
                    schedule.push_chunk(UnlockChunk {
                        track,
                        amount: portion,
                        class: ChunkClass::PendingDelegation,
                        release_block: None,
                        source: origin.into_source(),
                    });
                }
            }
            (Release::At(block), origin) => {
                let claimable = block <= current_block;
                // a covered vote still has to be removed before the lock can drop
                let keep = !portion.is_zero() || (claimable && matches!(origin, Origin::Vote(_)));
                if keep {
                    schedule.push_chunk(UnlockChunk {
                        track,
                        amount: portion,
                        class: if claimable {
                            ChunkClass::Claimable
                        } else {
                            ChunkClass::PendingLock
                        },
                        release_block: Some(block),
                        source: origin.into_source(),
                    });
                }
            }
        }
    }

    let gap = lock.saturating_sub(covered);
    if !gap.is_zero() {
        warn!(
            track = %track,
            lock = %lock,
            unattributed = %gap,
            "track lock is not fully explained by votes, delegation or prior lock"
        );
        schedule.push_chunk(UnlockChunk {
            track,
            amount: gap,
            class: ChunkClass::PendingLock,
            release_block: None,
            source: LockSource::Unattributed,
        });
    }
}

impl Origin {
    fn into_source(self) -> LockSource {
        match self {
            Origin::Delegation(target) => LockSource::Delegation { target },
            Origin::Vote(referendum) => LockSource::Vote { referendum },
            Origin::Prior => LockSource::Prior,
        }
    }
}
