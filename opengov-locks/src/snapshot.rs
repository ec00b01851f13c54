//! Chain state of several accounts assembled at one block height.

use crate::{
    account::Address,
    claim::{filter_claimable, ClaimableSummary},
    config::GovernanceConstants,
    locks::total_locked,
    referendum::Referendum,
    schedule::{estimate_schedule, ClaimSchedule, ScheduleInput},
    track::{TrackId, TrackInfo},
    value::Value,
    voting::Voting,
    BlockNumber,
};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// Everything queried from the chain for a set of accounts at `block`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GovernanceSnapshot {
    pub block: BlockNumber,
    pub referenda: Vec<Referendum>,
    pub tracks: BTreeMap<TrackId, TrackInfo>,
    pub track_locks: BTreeMap<Address, BTreeMap<TrackId, Value>>,
    pub voting: BTreeMap<Address, BTreeMap<TrackId, Voting>>,
}

/// Claimable summaries of every account of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimableAccounts {
    pub accounts: Vec<ClaimableSummary>,
    pub total: Value,
}

impl ClaimableAccounts {
    pub fn is_unlockable(&self) -> bool {
        !self.total.is_zero()
    }
}

impl GovernanceSnapshot {
    /// Content hash of the snapshot.
    ///
    /// Two snapshots with the same fingerprint produce the same schedules, so
    /// it can key a cache of estimator results. Stable within one build only.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    /// Schedule of every account that has track locks.
    pub fn claim_schedules(
        &self,
        constants: &GovernanceConstants,
    ) -> BTreeMap<Address, ClaimSchedule> {
        let no_voting = BTreeMap::new();
        self.track_locks
            .iter()
            .map(|(address, track_locks)| {
                let input = ScheduleInput {
                    current_block: self.block,
                    referenda: &self.referenda,
                    tracks: &self.tracks,
                    track_locks,
                    voting_by_track: self.voting.get(address).unwrap_or(&no_voting),
                    constants,
                };
                (address.clone(), estimate_schedule(&input))
            })
            .collect()
    }

    pub fn claimable(&self, constants: &GovernanceConstants) -> ClaimableAccounts {
        let accounts: Vec<ClaimableSummary> = self
            .claim_schedules(constants)
            .iter()
            .map(|(address, schedule)| filter_claimable(schedule.chunks(), address))
            .collect();
        let total = accounts
            .iter()
            .fold(Value::zero(), |acc, summary| acc.saturating_add(summary.total));
        ClaimableAccounts { accounts, total }
    }

    /// Balance frozen by conviction voting, summed over all accounts.
    pub fn total_locked(&self) -> Value {
        self.track_locks
            .values()
            .map(total_locked)
            .fold(Value::zero(), |acc, v| acc.saturating_add(v))
    }
}
