use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use thiserror::Error;

/// Amount of the governance asset, in the chain's smallest unit (planck).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Value(pub u128);

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValueError {
    #[error("Negative amount")]
    NegativeAmount,
    #[error("Overflow")]
    Overflow,
}

impl Value {
    pub const fn zero() -> Self {
        Value(0)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn sum<I>(values: I) -> Result<Self, ValueError>
    where
        I: Iterator<Item = Self>,
    {
        values.fold(Ok(Value::zero()), |acc, v| acc? + v)
    }

    pub fn checked_add(&self, other: Value) -> Result<Value, ValueError> {
        self.0
            .checked_add(other.0)
            .map(Value)
            .ok_or(ValueError::Overflow)
    }

    pub fn checked_sub(&self, other: Value) -> Result<Value, ValueError> {
        self.0
            .checked_sub(other.0)
            .map(Value)
            .ok_or(ValueError::NegativeAmount)
    }

    #[must_use]
    pub fn saturating_add(&self, other: Value) -> Value {
        Value(self.0.saturating_add(other.0))
    }

    #[must_use]
    pub fn saturating_sub(&self, other: Value) -> Value {
        Value(self.0.saturating_sub(other.0))
    }
}

impl Add for Value {
    type Output = Result<Value, ValueError>;
    fn add(self, other: Value) -> Self::Output {
        self.checked_add(other)
    }
}

impl Sub for Value {
    type Output = Result<Value, ValueError>;
    fn sub(self, other: Value) -> Self::Output {
        self.checked_sub(other)
    }
}

impl From<u128> for Value {
    fn from(v: u128) -> Self {
        Value(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    #[test]
    fn add_overflows() {
        assert_eq!(Value(u128::MAX) + Value(1), Err(ValueError::Overflow));
    }

    #[test]
    fn sub_below_zero_is_negative() {
        assert_eq!(Value(1) - Value(2), Err(ValueError::NegativeAmount));
        assert_eq!(Value(1).saturating_sub(Value(2)), Value::zero());
    }

    #[quickcheck]
    fn sum_matches_fold(values: Vec<Value>) -> TestResult {
        let expected = values
            .iter()
            .try_fold(0u128, |acc, v| acc.checked_add(v.0));
        match (Value::sum(values.into_iter()), expected) {
            (Ok(sum), Some(expected)) => TestResult::from_bool(sum == Value(expected)),
            (Err(ValueError::Overflow), None) => TestResult::passed(),
            _ => TestResult::failed(),
        }
    }
}
