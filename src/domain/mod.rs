//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains some of:
//! - `mod.rs`: Rich domain types
//! - `wire.rs`: Raw serde structs matching upstream responses
//! - `convert.rs`: Conversions from wire types
//! - `state.rs`: State containers with update methods (for timer-driven data)
//! - `client.rs`: Sub-client with HTTP methods and fallback policy

pub mod chart;
pub mod market;
pub mod network;
pub mod notification;
pub mod tvl;
