//! The claim schedule estimator.
//!
//! [`estimate_schedule`] is a pure function of one [`ScheduleInput`]. It does
//! not cache anything; callers that recompute on every chain update can key
//! their cache on [`crate::snapshot::GovernanceSnapshot::fingerprint`].

mod chunk;
mod staircase;

pub use chunk::{ChunkClass, ClaimSchedule, HeldVote, LockSource, UnlockChunk};

use self::staircase::{LockPiece, Origin, Release};
use crate::{
    config::GovernanceConstants,
    referendum::{Completion, OngoingReferendum, Referendum, ReferendumId},
    track::{TrackId, TrackInfo},
    value::Value,
    voting::{AccountVote, Voting},
    BlockNumber,
};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Everything the estimator needs about one voter, taken at `current_block`.
///
/// All maps must come from the same block: a referendum that ended between
/// two queries would otherwise be classified against the wrong votes.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleInput<'a> {
    pub current_block: BlockNumber,
    pub referenda: &'a [Referendum],
    pub tracks: &'a BTreeMap<TrackId, TrackInfo>,
    pub track_locks: &'a BTreeMap<TrackId, Value>,
    pub voting_by_track: &'a BTreeMap<TrackId, Voting>,
    pub constants: &'a GovernanceConstants,
}

/// Split the voter's track locks into claimable, pending and delegated chunks.
///
/// Tracks with a zero lock produce nothing, whatever their voting record.
#[tracing::instrument(level = "debug", skip_all, fields(current_block = %input.current_block))]
pub fn estimate_schedule(input: &ScheduleInput<'_>) -> ClaimSchedule {
    let referenda: BTreeMap<ReferendumId, &Referendum> = input
        .referenda
        .iter()
        .map(|referendum| (referendum.id, referendum))
        .collect();

    let mut schedule = ClaimSchedule::default();
    for (&track, &lock) in input.track_locks {
        if lock.is_zero() {
            continue;
        }
        let pieces = match input.voting_by_track.get(&track) {
            Some(voting) => track_pieces(input, &referenda, track, voting),
            None => Vec::new(),
        };
        let before = schedule.chunks().len();
        staircase::cut(track, lock, pieces, input.current_block, &mut schedule);
        debug!(
            track = %track,
            lock = %lock,
            chunks = schedule.chunks().len() - before,
            "track scheduled"
        );
    }
    schedule
}

fn track_pieces(
    input: &ScheduleInput<'_>,
    referenda: &BTreeMap<ReferendumId, &Referendum>,
    track: TrackId,
    voting: &Voting,
) -> Vec<LockPiece> {
    let mut pieces = Vec::new();

    match voting {
        Voting::Delegating(delegating) => {
            if !delegating.balance.is_zero() {
                pieces.push(LockPiece {
                    amount: delegating.balance,
                    release: Release::Delegated,
                    origin: Origin::Delegation(delegating.target.clone()),
                });
            }
        }
        Voting::Casting(casting) => {
            for (&id, vote) in &casting.votes {
                let referendum = match referenda.get(&id) {
                    Some(referendum) => referendum,
                    None => {
                        warn!(track = %track, referendum = %id, "vote on an unknown referendum");
                        continue;
                    }
                };
                pieces.push(LockPiece {
                    amount: vote.locked_balance(),
                    release: vote_release(input, track, referendum, vote),
                    origin: Origin::Vote(id),
                });
            }
        }
    }

    let prior = voting.prior();
    if !prior.is_empty() {
        pieces.push(LockPiece {
            amount: prior.amount,
            release: Release::At(prior.unlock_at),
            origin: Origin::Prior,
        });
    }

    pieces
}

fn vote_release(
    input: &ScheduleInput<'_>,
    track: TrackId,
    referendum: &Referendum,
    vote: &AccountVote,
) -> Release {
    let lock_duration = vote
        .conviction()
        .lock_duration(input.constants.vote_locking_period());

    match referendum.completion() {
        Some(Completion::Decided { since }) => Release::At(since.saturating_add(lock_duration)),
        Some(Completion::Void { since }) => Release::At(since),
        None => Release::Held {
            estimated: referendum
                .ongoing()
                .and_then(|ongoing| latest_conclusion(input, track, ongoing))
                .map(|end| end.saturating_add(lock_duration)),
        },
    }
}

/// Block at which an ongoing referendum is decided at the latest, assuming it
/// does not linger in confirmation past its decision period.
///
/// The decision period is the one of the referendum's own track, even when
/// the vote was found under another.
fn latest_conclusion(
    input: &ScheduleInput<'_>,
    voting_track: TrackId,
    ongoing: &OngoingReferendum,
) -> Option<BlockNumber> {
    if ongoing.track != voting_track {
        warn!(
            voting_track = %voting_track,
            referendum_track = %ongoing.track,
            "vote recorded under another track than its referendum"
        );
    }
    let info = input.tracks.get(&ongoing.track)?;
    let deciding_from = match ongoing.deciding {
        Some(deciding) => deciding.since,
        None => ongoing
            .submitted
            .saturating_add(input.constants.undeciding_timeout()),
    };
    Some(deciding_from.saturating_add(info.decision_period))
}
