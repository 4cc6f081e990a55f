//! High-resolution timing used by the trial runner.

pub mod counter;
pub mod stopwatch;

pub use stopwatch::Stopwatch;
