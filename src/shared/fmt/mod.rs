//! Human-readable formatting helpers.

pub mod num;
