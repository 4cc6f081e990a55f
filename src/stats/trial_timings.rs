//! Best-of-N trial timing samples
//!
//! Samples are kept in the order the trials ran. The best duration is read
//! off the front of a sorted copy.

use crate::stats::robust_statistics::RobustStatistics;

/// Duration samples, one per trial
#[derive(Debug, Clone, Default)]
pub struct TrialTimings {
    samples: Vec<f64>,
}

impl TrialTimings {
    pub fn with_capacity(trials: usize) -> Self {
        Self {
            samples: Vec::with_capacity(trials),
        }
    }

    pub fn record(&mut self, duration: f64) {
        self.samples.push(duration);
    }

    /// Samples in trial order
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples sorted ascending
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.samples.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }

    /// Shortest observed duration
    pub fn best(&self) -> Option<f64> {
        self.sorted().first().copied()
    }

    pub fn statistics(&self) -> Option<RobustStatistics> {
        RobustStatistics::from_samples(&self.samples)
    }
}

impl From<Vec<f64>> for TrialTimings {
    fn from(samples: Vec<f64>) -> Self {
        Self { samples }
    }
}
