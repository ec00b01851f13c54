//! Turning a claimable summary into conviction-voting calls.

use crate::{
    account::Address, claim::ClaimableSummary, referendum::ReferendumId, track::TrackId,
    value::Value,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One `convictionVoting` call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "call")]
pub enum UnlockCall {
    /// `remove_vote(Some(track), referendum)`
    RemoveVote {
        track: TrackId,
        referendum: ReferendumId,
    },
    /// `unlock(track, target)`
    Unlock { track: TrackId, target: Address },
}

/// The calls to batch so the claimable balance of one account is released.
///
/// Expired votes are removed first so the following `unlock` of the track
/// recomputes the lock without them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnlockPlan {
    calls: Vec<UnlockCall>,
}

impl UnlockPlan {
    pub fn from_claimable(summary: &ClaimableSummary) -> Self {
        let mut by_track: BTreeMap<TrackId, (Value, Vec<ReferendumId>)> = BTreeMap::new();
        for chunk in &summary.chunks {
            let (total, votes) = by_track.entry(chunk.track).or_default();
            *total = total.saturating_add(chunk.amount);
            if let Some(referendum) = chunk.referendum_id() {
                votes.push(referendum);
            }
        }

        let mut calls = Vec::new();
        for (track, (total, mut votes)) in by_track {
            if total.is_zero() {
                continue;
            }
            votes.sort();
            votes.dedup();
            calls.extend(
                votes
                    .into_iter()
                    .map(|referendum| UnlockCall::RemoveVote { track, referendum }),
            );
            calls.push(UnlockCall::Unlock {
                track,
                target: summary.address.clone(),
            });
        }

        UnlockPlan { calls }
    }

    pub fn calls(&self) -> &[UnlockCall] {
        &self.calls
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}
