//! Referenda as seen through `referenda.referendumInfoFor`.

use crate::{track::ParseIdError, track::TrackId, BlockNumber};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[cfg_attr(
    any(test, feature = "property-test-api"),
    derive(test_strategy::Arbitrary)
)]
pub struct ReferendumId(pub u32);

impl FromStr for ReferendumId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(ReferendumId).map_err(|source| ParseIdError {
            kind: "referendum",
            input: s.to_owned(),
            source,
        })
    }
}

impl fmt::Display for ReferendumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Referendum {
    pub id: ReferendumId,
    pub status: ReferendumStatus,
}

/// Lifecycle of a referendum. Terminal variants carry the block at which the
/// referendum reached that state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum ReferendumStatus {
    Ongoing(OngoingReferendum),
    Approved { since: BlockNumber },
    Rejected { since: BlockNumber },
    Cancelled { since: BlockNumber },
    TimedOut { since: BlockNumber },
    Killed { since: BlockNumber },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OngoingReferendum {
    pub track: TrackId,
    pub submitted: BlockNumber,
    pub deciding: Option<DecidingStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecidingStatus {
    pub since: BlockNumber,
    pub confirming: Option<BlockNumber>,
}

/// How a finished referendum affects the conviction locks of its votes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Approved or rejected: votes keep their conviction lock from `since`.
    Decided { since: BlockNumber },
    /// Cancelled, timed out or killed: no conviction lock applies.
    Void { since: BlockNumber },
}

impl Referendum {
    pub fn new(id: ReferendumId, status: ReferendumStatus) -> Self {
        Referendum { id, status }
    }

    pub fn ongoing(&self) -> Option<&OngoingReferendum> {
        match &self.status {
            ReferendumStatus::Ongoing(ongoing) => Some(ongoing),
            _ => None,
        }
    }

    /// `None` while the referendum is still ongoing.
    pub fn completion(&self) -> Option<Completion> {
        match self.status {
            ReferendumStatus::Ongoing(_) => None,
            ReferendumStatus::Approved { since } | ReferendumStatus::Rejected { since } => {
                Some(Completion::Decided { since })
            }
            ReferendumStatus::Cancelled { since }
            | ReferendumStatus::TimedOut { since }
            | ReferendumStatus::Killed { since } => Some(Completion::Void { since }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_of_each_status() {
        let since = BlockNumber(1_000);
        let completion = |status| Referendum::new(ReferendumId(1), status).completion();

        assert_eq!(
            completion(ReferendumStatus::Approved { since }),
            Some(Completion::Decided { since })
        );
        assert_eq!(
            completion(ReferendumStatus::Rejected { since }),
            Some(Completion::Decided { since })
        );
        assert_eq!(
            completion(ReferendumStatus::Killed { since }),
            Some(Completion::Void { since })
        );
        assert_eq!(
            completion(ReferendumStatus::Ongoing(OngoingReferendum {
                track: TrackId(0),
                submitted: BlockNumber(10),
                deciding: None,
            })),
            None
        );
    }

    #[test]
    fn deserialize_tagged_status() {
        let referendum: Referendum =
            serde_json::from_str(r#"{"id":12,"status":{"type":"timedOut","since":400}}"#)
                .unwrap();
        assert_eq!(
            referendum.status,
            ReferendumStatus::TimedOut {
                since: BlockNumber(400)
            }
        );
    }
}
