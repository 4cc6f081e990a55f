//! Robust statistics over trial duration samples
//!
//! The reported benchmark figure is the minimum. These numbers describe how
//! noisy the trials were around it.

/// Dispersion summary of a set of samples
#[derive(Debug, Clone)]
pub struct RobustStatistics {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub stdev: f64,
    pub mad: f64,              // Median Absolute Deviation - robust stdev
    pub p95: f64,              // 95th percentile
    pub outliers_removed: usize,
}

impl RobustStatistics {
    /// Summarize samples. Returns `None` for an empty slice.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let min = sorted[0];
        let max = sorted[sorted.len() - 1];
        let median = Self::percentile(&sorted, 50.0);

        let mut deviations: Vec<f64> = sorted.iter()
            .map(|&x| (x - median).abs())
            .collect();
        deviations.sort_by(f64::total_cmp);
        let mad = Self::percentile(&deviations, 50.0);

        // Rule: |x - median| > k * MAD, where k = 3.5 (corresponds to ~3σ)
        let threshold = 3.5 * mad;
        let clean: Vec<f64> = sorted.iter()
            .filter(|&&x| (x - median).abs() <= threshold)
            .copied()
            .collect();
        let outliers_removed = samples.len() - clean.len();

        let mean = clean.iter().sum::<f64>() / clean.len() as f64;
        let variance = clean.iter()
            .map(|x| (x - mean).powi(2))
            .sum::<f64>() / clean.len() as f64;
        let stdev = variance.sqrt();
        let p95 = Self::percentile(&clean, 95.0);

        Some(Self {
            min,
            max,
            mean,
            median,
            stdev,
            mad,
            p95,
            outliers_removed,
        })
    }

    /// Nearest-rank percentile of sorted data
    fn percentile(sorted_data: &[f64], p: f64) -> f64 {
        if sorted_data.is_empty() {
            return 0.0;
        }
        let idx = (p / 100.0 * (sorted_data.len() - 1) as f64).round() as usize;
        sorted_data[idx.min(sorted_data.len() - 1)]
    }

    /// Spread of the trials relative to the best one
    pub fn jitter_ratio(&self) -> f64 {
        if self.min > 0.0 {
            self.median / self.min
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_statistics() {
        assert!(RobustStatistics::from_samples(&[]).is_none());
    }

    #[test]
    fn single_sample() {
        let stats = RobustStatistics::from_samples(&[0.25]).unwrap();
        assert_eq!(stats.min, 0.25);
        assert_eq!(stats.max, 0.25);
        assert_eq!(stats.median, 0.25);
        assert_eq!(stats.mad, 0.0);
        assert_eq!(stats.stdev, 0.0);
        assert_eq!(stats.outliers_removed, 0);
    }

    #[test]
    fn spike_is_dropped_from_mean_but_not_from_max() {
        let samples = [0.030, 0.031, 0.029, 0.030, 0.032, 0.031, 0.250];
        let stats = RobustStatistics::from_samples(&samples).unwrap();
        assert_eq!(stats.outliers_removed, 1);
        assert_eq!(stats.max, 0.250);
        assert_eq!(stats.min, 0.029);
        assert!(stats.mean < 0.033, "mean {}", stats.mean);
        assert_eq!(stats.median, 0.031);
    }

    #[test]
    fn jitter_ratio_of_identical_samples_is_one() {
        let stats = RobustStatistics::from_samples(&[0.5, 0.5, 0.5]).unwrap();
        assert_eq!(stats.jitter_ratio(), 1.0);
    }
}
