//! Support library for the spanwise CLI binary.
//!
//! Exposes command execution, edge-list parsing, and report rendering so
//! tests can drive the pipeline without spawning a subprocess.

pub mod cli;
pub mod logging;
