//! HTTP client layer: `MonitorHttp` with one method per upstream endpoint.

pub mod client;

pub use client::{Endpoints, MonitorHttp};
