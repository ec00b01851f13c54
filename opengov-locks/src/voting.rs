//! A voter's record on one track, as stored by `convictionVoting.votingFor`.

use crate::{
    account::Address, conviction::Conviction, referendum::ReferendumId, value::Value,
    BlockNumber,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lock inherited from votes removed before their lock expired, or from an
/// undelegation. `unlock_at` of zero means there is nothing left to wait for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PriorLock {
    pub unlock_at: BlockNumber,
    pub amount: Value,
}

impl PriorLock {
    pub fn new(unlock_at: BlockNumber, amount: Value) -> Self {
        PriorLock { unlock_at, amount }
    }

    pub fn is_empty(&self) -> bool {
        self.amount.is_zero()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vote {
    pub aye: bool,
    pub conviction: Conviction,
}

/// Externally tagged like [`Voting`]: an internally tagged enum buffers its
/// fields, and the buffer cannot hold the `u128` of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccountVote {
    Standard { vote: Vote, balance: Value },
    Split { aye: Value, nay: Value },
    SplitAbstain { aye: Value, nay: Value, abstain: Value },
}

impl AccountVote {
    /// The balance this vote locks on its track.
    pub fn locked_balance(&self) -> Value {
        match self {
            AccountVote::Standard { balance, .. } => *balance,
            AccountVote::Split { aye, nay } => aye.saturating_add(*nay),
            AccountVote::SplitAbstain { aye, nay, abstain } => {
                aye.saturating_add(*nay).saturating_add(*abstain)
            }
        }
    }

    /// Split votes are always cast without conviction.
    pub fn conviction(&self) -> Conviction {
        match self {
            AccountVote::Standard { vote, .. } => vote.conviction,
            AccountVote::Split { .. } | AccountVote::SplitAbstain { .. } => Conviction::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Casting {
    pub votes: BTreeMap<ReferendumId, AccountVote>,
    pub prior: PriorLock,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Delegating {
    pub balance: Value,
    pub target: Address,
    pub conviction: Conviction,
    pub prior: PriorLock,
}

/// Externally tagged: the votes map is keyed by referendum index, which an
/// internally tagged enum could not read back from JSON object keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Voting {
    Casting(Casting),
    Delegating(Delegating),
}

impl Voting {
    pub fn prior(&self) -> &PriorLock {
        match self {
            Voting::Casting(casting) => &casting.prior,
            Voting::Delegating(delegating) => &delegating.prior,
        }
    }

    pub fn is_delegating(&self) -> bool {
        matches!(self, Voting::Delegating(_))
    }
}
