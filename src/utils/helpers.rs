//! Process-level helpers for the benchmark binary

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Whole seconds since the Unix epoch, 0 if the clock is before it
pub fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}

/// Generator seeded from the wall clock. Runs started in the same second
/// see the same inputs; nothing else is guaranteed.
pub fn wall_clock_rng() -> StdRng {
    StdRng::seed_from_u64(wall_clock_seed())
}

/// On Windows, set the console output codepage to UTF-8
pub fn enable_utf8_console() {
    #[cfg(windows)]
    {
        if !std::process::Command::new("chcp")
            .arg("65001")
            .status()
            .map_or(false, |s| s.success())
        {
            eprintln!("Warning: Failed to set console codepage to UTF-8. Some characters may not display correctly.");
        }
    }
}
