//! Governance tracks: the categories referenda are submitted under.

use crate::{value::Value, BlockCount};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// Index of a track (`0` is `root` on Polkadot and Kusama).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[cfg_attr(
    any(test, feature = "property-test-api"),
    derive(test_strategy::Arbitrary)
)]
pub struct TrackId(pub u16);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid {kind} id `{input}`")]
pub struct ParseIdError {
    pub kind: &'static str,
    pub input: String,
    #[source]
    pub source: ParseIntError,
}

impl FromStr for TrackId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(TrackId).map_err(|source| ParseIdError {
            kind: "track",
            input: s.to_owned(),
            source,
        })
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The parameters of a track, as found in the `referenda.tracks` constant.
///
/// Approval and support curves are not needed to estimate lock releases and
/// are left out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackInfo {
    pub name: String,
    pub max_deciding: u32,
    pub decision_deposit: Value,
    pub prepare_period: BlockCount,
    pub decision_period: BlockCount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_track_id() {
        assert_eq!("33".parse::<TrackId>(), Ok(TrackId(33)));
        let err = "root".parse::<TrackId>().unwrap_err();
        assert_eq!(err.input, "root");
        assert_eq!(err.to_string(), "invalid track id `root`");
    }
}
