//! Claim schedule estimation for OpenGov conviction-voting locks.
//!
//! Given one consistent snapshot of a voter's track locks, votes and the
//! referenda they point at, [`schedule::estimate_schedule`] splits every
//! track lock into chunks that are claimable now, released at a known block,
//! or held by a delegation. [`claim::filter_claimable`] and
//! [`unlock::UnlockPlan`] turn the claimable part into the calls needed to
//! actually free the balance.

#[macro_use]
extern crate strum_macros;

pub mod account;
pub mod claim;
pub mod config;
pub mod conviction;
pub mod locks;
pub mod referendum;
pub mod schedule;
pub mod snapshot;
pub mod track;
pub mod unlock;
pub mod value;
pub mod voting;

#[cfg(any(test, feature = "property-test-api"))]
pub mod testing;

pub use opengov_time::{BlockCount, BlockNumber};
