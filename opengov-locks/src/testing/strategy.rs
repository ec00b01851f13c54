//! `proptest` strategies producing consistent estimator inputs.
//!
//! Every generated track lock is at least the largest lock its voting record
//! explains, as the chain would report it, plus an optional unexplained part.

use super::builders::{ScheduleFixture, TestGen};
use crate::{
    conviction::Conviction,
    referendum::{DecidingStatus, OngoingReferendum, Referendum, ReferendumId, ReferendumStatus},
    track::TrackId,
    value::Value,
    voting::{AccountVote, Casting, Delegating, PriorLock, Vote, Voting},
    BlockNumber,
};
use proptest::collection::vec;
use proptest::prelude::*;

const MAX_BLOCK: u32 = 3_000_000;
const MAX_BALANCE: u128 = 1_000_000;

pub fn block() -> impl Strategy<Value = BlockNumber> {
    (0..MAX_BLOCK).prop_map(BlockNumber)
}

pub fn balance() -> impl Strategy<Value = Value> {
    (0..MAX_BALANCE).prop_map(Value)
}

pub fn referendum_status(track: TrackId) -> impl Strategy<Value = ReferendumStatus> {
    prop_oneof![
        (block(), proptest::option::of(block())).prop_map(move |(submitted, deciding)| {
            ReferendumStatus::Ongoing(OngoingReferendum {
                track,
                submitted,
                deciding: deciding.map(|since| DecidingStatus {
                    since,
                    confirming: None,
                }),
            })
        }),
        block().prop_map(|since| ReferendumStatus::Approved { since }),
        block().prop_map(|since| ReferendumStatus::Rejected { since }),
        block().prop_map(|since| ReferendumStatus::Cancelled { since }),
        block().prop_map(|since| ReferendumStatus::TimedOut { since }),
        block().prop_map(|since| ReferendumStatus::Killed { since }),
    ]
}

pub fn account_vote() -> impl Strategy<Value = AccountVote> {
    prop_oneof![
        3 => (any::<bool>(), any::<Conviction>(), balance()).prop_map(|(aye, conviction, balance)| {
            AccountVote::Standard {
                vote: Vote { aye, conviction },
                balance,
            }
        }),
        1 => (balance(), balance()).prop_map(|(aye, nay)| AccountVote::Split { aye, nay }),
        1 => (balance(), balance(), balance())
            .prop_map(|(aye, nay, abstain)| AccountVote::SplitAbstain { aye, nay, abstain }),
    ]
}

pub fn prior() -> impl Strategy<Value = PriorLock> {
    prop_oneof![
        Just(PriorLock::default()),
        (block(), balance()).prop_map(|(unlock_at, amount)| PriorLock::new(unlock_at, amount)),
    ]
}

fn unexplained() -> impl Strategy<Value = Value> {
    prop_oneof![3 => Just(Value::zero()), 1 => balance()]
}

/// Voting record, referenda and reported lock of one casting track.
pub type TrackState = (Voting, Vec<Referendum>, Value);

prop_compose! {
    pub fn casting_track(track: TrackId)(
        votes in vec((account_vote(), proptest::option::weighted(0.9, referendum_status(track))), 0..5),
        prior in prior(),
        extra in unexplained(),
    ) -> TrackState {
        let mut casting = Casting { prior, ..Casting::default() };
        let mut referenda = Vec::new();
        let mut largest = prior.amount;
        for (index, (vote, status)) in votes.into_iter().enumerate() {
            let id = ReferendumId(u32::from(track.0) * 100 + index as u32);
            largest = std::cmp::max(largest, vote.locked_balance());
            casting.votes.insert(id, vote);
            if let Some(status) = status {
                referenda.push(Referendum::new(id, status));
            }
        }
        (Voting::Casting(casting), referenda, largest.saturating_add(extra))
    }
}

prop_compose! {
    pub fn delegating_track()(
        balance in balance(),
        conviction in any::<Conviction>(),
        prior in prior(),
        extra in unexplained(),
    ) -> TrackState {
        let largest = std::cmp::max(balance, prior.amount);
        let voting = Voting::Delegating(Delegating {
            balance,
            target: TestGen::delegate(),
            conviction,
            prior,
        });
        (voting, Vec::new(), largest.saturating_add(extra))
    }
}

/// A voter with one to four tracks, each either casting or delegating.
pub fn schedule_fixture() -> impl Strategy<Value = ScheduleFixture> {
    (block(), vec(any::<bool>(), 1..5))
        .prop_flat_map(|(current_block, delegating)| {
            let tracks: Vec<BoxedStrategy<TrackState>> = delegating
                .into_iter()
                .enumerate()
                .map(|(index, delegating)| {
                    if delegating {
                        delegating_track().boxed()
                    } else {
                        casting_track(TrackId(index as u16)).boxed()
                    }
                })
                .collect();
            (Just(current_block), tracks)
        })
        .prop_map(|(current_block, tracks)| {
            let mut fixture = ScheduleFixture::new(current_block.0);
            for (index, (voting, referenda, lock)) in tracks.into_iter().enumerate() {
                let track = index as u16;
                fixture = fixture
                    .with_track(track, TestGen::track_info("track", 201_600))
                    .with_lock(track, lock.0)
                    .with_voting(track, voting);
                fixture.referenda.extend(referenda);
            }
            fixture
        })
}
