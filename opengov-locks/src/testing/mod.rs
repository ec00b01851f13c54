//! Builders and generators for estimator tests.

pub mod arbitrary;
pub mod builders;
pub mod strategy;

pub use builders::{CastingBuilder, ScheduleFixture, TestGen};
