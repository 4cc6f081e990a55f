//! Statistics over trial timings and approximation error

pub mod error_metrics;
pub mod robust_statistics;
pub mod trial_timings;
