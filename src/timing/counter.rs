//! Monotonic tick counter backing the stopwatch
//!
//! Windows reads the performance counter directly. Other hosts count
//! nanoseconds from a process-wide epoch so the tool still runs there.

#[cfg(windows)]
mod platform {
    use windows_sys::Win32::System::Performance::{QueryPerformanceCounter, QueryPerformanceFrequency};

    /// Current value of the performance counter
    pub fn ticks() -> u64 {
        let mut value: i64 = 0;
        // Cannot fail on Windows XP and later
        unsafe {
            QueryPerformanceCounter(&mut value);
        }
        value as u64
    }

    /// Performance counter frequency in ticks per second
    pub fn frequency() -> u64 {
        let mut value: i64 = 0;
        unsafe {
            QueryPerformanceFrequency(&mut value);
        }
        value as u64
    }
}

#[cfg(not(windows))]
mod platform {
    use std::time::Instant;

    lazy_static::lazy_static! {
        static ref EPOCH: Instant = Instant::now();
    }

    /// Nanoseconds since the first read in this process
    pub fn ticks() -> u64 {
        EPOCH.elapsed().as_nanos() as u64
    }

    pub fn frequency() -> u64 {
        1_000_000_000
    }
}

pub use platform::{frequency, ticks};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_is_nonzero() {
        assert!(frequency() > 0);
    }

    #[test]
    fn ticks_never_go_backwards() {
        let mut last = ticks();
        for _ in 0..10_000 {
            let now = ticks();
            assert!(now >= last, "counter went backwards: {} -> {}", last, now);
            last = now;
        }
    }
}
