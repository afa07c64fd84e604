//! Shared test utilities used across spanwise crates.

pub mod ci;
pub mod tracing;
