//! Stopwatch over the monotonic tick counter
//!
//! Starts counting from 0.0 seconds on creation. Call [`Stopwatch::reset`]
//! to start over.

use crate::timing::counter;

/// Elapsed-time reader with a cached inverse frequency
#[derive(Debug, Clone)]
pub struct Stopwatch {
    inverse_frequency: f64,
    base_ticks: u64,
}

impl Stopwatch {
    /// Create a stopwatch that immediately begins counting
    pub fn new() -> Self {
        let mut stopwatch = Self {
            inverse_frequency: 0.0,
            base_ticks: 0,
        };
        stopwatch.reset();
        stopwatch
    }

    /// Restart counting from zero and refresh the cached frequency
    pub fn reset(&mut self) {
        self.inverse_frequency = 1.0 / counter::frequency() as f64;
        self.base_ticks = counter::ticks();
    }

    /// Seconds elapsed since creation or the last reset
    #[inline]
    pub fn elapsed_seconds(&self) -> f64 {
        counter::ticks().saturating_sub(self.base_ticks) as f64 * self.inverse_frequency
    }

    /// Milliseconds elapsed since creation or the last reset
    #[inline]
    pub fn elapsed_milliseconds(&self) -> f64 {
        self.elapsed_seconds() * 1000.0
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn elapsed_is_non_negative_and_monotonic() {
        let stopwatch = Stopwatch::new();
        let mut last = stopwatch.elapsed_seconds();
        assert!(last >= 0.0);
        for _ in 0..1_000 {
            let now = stopwatch.elapsed_seconds();
            assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn milliseconds_track_a_sleep() {
        let stopwatch = Stopwatch::new();
        thread::sleep(Duration::from_millis(20));
        let elapsed = stopwatch.elapsed_milliseconds();
        assert!(elapsed >= 19.0, "slept 20ms, measured {:.3}ms", elapsed);
        assert!(elapsed < 5_000.0);
    }

    #[test]
    fn reset_starts_over() {
        let mut stopwatch = Stopwatch::new();
        thread::sleep(Duration::from_millis(30));
        let before = stopwatch.elapsed_milliseconds();
        stopwatch.reset();
        let after = stopwatch.elapsed_milliseconds();
        assert!(after < before, "reset did not rewind: {} vs {}", after, before);
    }
}
