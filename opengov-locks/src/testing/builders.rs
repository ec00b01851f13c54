use crate::{
    account::Address,
    config::GovernanceConstants,
    conviction::Conviction,
    referendum::{DecidingStatus, OngoingReferendum, Referendum, ReferendumId, ReferendumStatus},
    schedule::{estimate_schedule, ClaimSchedule, ScheduleInput},
    track::{TrackId, TrackInfo},
    value::Value,
    voting::{AccountVote, Casting, Delegating, PriorLock, Vote, Voting},
    BlockCount, BlockNumber,
};
use std::collections::BTreeMap;

pub struct TestGen;

impl TestGen {
    pub fn address() -> Address {
        Address::new("5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY")
    }

    pub fn delegate() -> Address {
        Address::new("5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty")
    }

    pub fn approved(id: u32, since: u32) -> Referendum {
        Referendum::new(
            ReferendumId(id),
            ReferendumStatus::Approved {
                since: BlockNumber(since),
            },
        )
    }

    pub fn rejected(id: u32, since: u32) -> Referendum {
        Referendum::new(
            ReferendumId(id),
            ReferendumStatus::Rejected {
                since: BlockNumber(since),
            },
        )
    }

    pub fn cancelled(id: u32, since: u32) -> Referendum {
        Referendum::new(
            ReferendumId(id),
            ReferendumStatus::Cancelled {
                since: BlockNumber(since),
            },
        )
    }

    pub fn killed(id: u32, since: u32) -> Referendum {
        Referendum::new(
            ReferendumId(id),
            ReferendumStatus::Killed {
                since: BlockNumber(since),
            },
        )
    }

    pub fn ongoing(id: u32, track: u16, submitted: u32, deciding_since: Option<u32>) -> Referendum {
        Referendum::new(
            ReferendumId(id),
            ReferendumStatus::Ongoing(OngoingReferendum {
                track: TrackId(track),
                submitted: BlockNumber(submitted),
                deciding: deciding_since.map(|since| DecidingStatus {
                    since: BlockNumber(since),
                    confirming: None,
                }),
            }),
        )
    }

    pub fn aye(balance: u128, conviction: Conviction) -> AccountVote {
        AccountVote::Standard {
            vote: Vote {
                aye: true,
                conviction,
            },
            balance: Value(balance),
        }
    }

    pub fn delegating(balance: u128, conviction: Conviction) -> Voting {
        Voting::Delegating(Delegating {
            balance: Value(balance),
            target: Self::delegate(),
            conviction,
            prior: PriorLock::default(),
        })
    }

    pub fn track_info(name: &str, decision_period: u32) -> TrackInfo {
        TrackInfo {
            name: name.to_owned(),
            max_deciding: 10,
            decision_deposit: Value(1_000),
            prepare_period: BlockCount(1_200),
            decision_period: BlockCount(decision_period),
        }
    }
}

#[derive(Default)]
pub struct CastingBuilder {
    votes: BTreeMap<ReferendumId, AccountVote>,
    prior: PriorLock,
}

impl CastingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vote(mut self, referendum: u32, vote: AccountVote) -> Self {
        self.votes.insert(ReferendumId(referendum), vote);
        self
    }

    pub fn prior(mut self, unlock_at: u32, amount: u128) -> Self {
        self.prior = PriorLock::new(BlockNumber(unlock_at), Value(amount));
        self
    }

    pub fn build(self) -> Voting {
        Voting::Casting(Casting {
            votes: self.votes,
            prior: self.prior,
        })
    }
}

/// Owned estimator inputs for one voter.
#[derive(Debug, Clone)]
pub struct ScheduleFixture {
    pub current_block: BlockNumber,
    pub referenda: Vec<Referendum>,
    pub tracks: BTreeMap<TrackId, TrackInfo>,
    pub track_locks: BTreeMap<TrackId, Value>,
    pub voting_by_track: BTreeMap<TrackId, Voting>,
    pub constants: GovernanceConstants,
}

impl ScheduleFixture {
    pub fn new(current_block: u32) -> Self {
        ScheduleFixture {
            current_block: BlockNumber(current_block),
            referenda: Vec::new(),
            tracks: BTreeMap::new(),
            track_locks: BTreeMap::new(),
            voting_by_track: BTreeMap::new(),
            constants: GovernanceConstants::kusama(),
        }
    }

    pub fn with_referendum(mut self, referendum: Referendum) -> Self {
        self.referenda.push(referendum);
        self
    }

    pub fn with_track(mut self, track: u16, info: TrackInfo) -> Self {
        self.tracks.insert(TrackId(track), info);
        self
    }

    pub fn with_lock(mut self, track: u16, lock: u128) -> Self {
        self.track_locks.insert(TrackId(track), Value(lock));
        self
    }

    pub fn with_voting(mut self, track: u16, voting: Voting) -> Self {
        self.voting_by_track.insert(TrackId(track), voting);
        self
    }

    pub fn at_block(mut self, current_block: u32) -> Self {
        self.current_block = BlockNumber(current_block);
        self
    }

    pub fn input(&self) -> ScheduleInput<'_> {
        ScheduleInput {
            current_block: self.current_block,
            referenda: &self.referenda,
            tracks: &self.tracks,
            track_locks: &self.track_locks,
            voting_by_track: &self.voting_by_track,
            constants: &self.constants,
        }
    }

    pub fn estimate(&self) -> ClaimSchedule {
        estimate_schedule(&self.input())
    }
}
