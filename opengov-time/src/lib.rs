//! Block heights and block-based durations used by the governance crates.
//!
//! Substrate chains measure every governance period in blocks. This crate
//! gives those quantities distinct types so a height is never mistaken for a
//! span, and converts spans to wall-clock time for display.

mod block;
mod block_time;

pub use block::{BlockCount, BlockNumber};
pub use block_time::{BlockTime, BlockTimeError, DEFAULT_BLOCK_TIME_MILLIS};
