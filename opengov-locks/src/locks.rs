//! Account-wide view of conviction-voting locks.

use crate::{track::TrackId, value::Value};
use std::collections::BTreeMap;

/// The balance frozen by conviction voting for one account.
///
/// Track locks overlap in the balances pallet (a single `pyconvot` lock is
/// set to the largest of them), so this is their maximum, not their sum.
pub fn total_locked(track_locks: &BTreeMap<TrackId, Value>) -> Value {
    track_locks
        .values()
        .copied()
        .max()
        .unwrap_or_else(Value::zero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn largest_track_lock_wins() {
        let locks: BTreeMap<TrackId, Value> = vec![
            (TrackId(0), Value(500)),
            (TrackId(1), Value(1_200)),
            (TrackId(33), Value(80)),
        ]
        .into_iter()
        .collect();
        assert_eq!(total_locked(&locks), Value(1_200));
        assert_eq!(total_locked(&BTreeMap::new()), Value::zero());
    }
}
