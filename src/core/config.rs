//! Build-time benchmark parameters
//!
//! Change the constants and rebuild. Nothing here is read at runtime.

use std::io::{self, Error, ErrorKind};

/// Number of inputs per trial
pub const BUFFER_SIZE: usize = 4096;
/// Passes over the buffer inside one timed trial
pub const ITERATIONS: usize = 8192;
/// Trials; the shortest one is reported
pub const TRIALS: usize = 20;
/// Largest allowed `max/min` ratio between two methods
pub const TOLERANCE: f32 = 1.01;

/// Benchmark parameters other than the buffer length, which is a const
/// generic on the buffers themselves
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkConfig {
    pub trials: usize,
    pub iterations: usize,
    pub tolerance: f32,
}

impl BenchmarkConfig {
    /// Reject settings that would make the report meaningless
    pub fn validate(&self) -> io::Result<()> {
        if self.trials == 0 {
            return Err(Error::new(ErrorKind::InvalidInput, "Trial count must be positive"));
        }
        if self.iterations == 0 {
            return Err(Error::new(ErrorKind::InvalidInput, "Iteration count must be positive"));
        }
        if !(self.tolerance >= 1.0) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("Tolerance ratio must be at least 1.0, got {}", self.tolerance),
            ));
        }
        Ok(())
    }

    /// Total approximations computed per trial for a buffer of `buffer_len`
    pub fn operations_per_trial(&self, buffer_len: usize) -> u64 {
        buffer_len as u64 * self.iterations as u64
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            trials: TRIALS,
            iterations: ITERATIONS,
            tolerance: TOLERANCE,
        }
    }
}
