//! hostbeat: a host-telemetry agent that samples CPU, memory and temperature
//! every few seconds and POSTs the snapshot to a remote collector.

pub mod agent;
pub mod collectors;
pub mod config;
pub mod error;
pub mod snapshot;
pub mod transport;
