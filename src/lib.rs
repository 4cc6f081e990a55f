//! Inverse Square Root Benchmark Library
//!
//! Times the fast inverse square root bit-hack over a fixed buffer, measures
//! its error against `1/sqrt(x)`, and cross-checks it against the hardware
//! reciprocal-square-root estimate.

pub mod approx;
pub mod core;
pub mod stats;
pub mod timing;
pub mod ui;
pub mod utils;

pub use crate::core::run_benchmark;

/// Library version
pub const VERSION: &str = "0.1.0";
