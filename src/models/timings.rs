//! Timing summary records and per-mode chart series

use crate::types::{ProtocolMode, RunConfig, BITSIZES};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One benchmark timing summary row: mean and standard deviation for the
/// two measured phases plus the total, all in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseTimings {
    /// Mean token-acquisition time
    pub token_mean_ms: f64,
    /// Standard deviation of the token-acquisition time
    pub token_std_ms: f64,
    /// Mean access-acquisition time
    pub access_mean_ms: f64,
    /// Standard deviation of the access-acquisition time
    pub access_std_ms: f64,
    /// Mean total protocol time
    pub total_mean_ms: f64,
    /// Standard deviation of the total protocol time
    pub total_std_ms: f64,
}

impl PhaseTimings {
    /// Residual communication time: total minus the two measured phases.
    /// Not measured separately, derived exactly.
    pub fn communication_mean_ms(&self) -> f64 {
        self.total_mean_ms - self.token_mean_ms - self.access_mean_ms
    }

    /// The residual carries the total's standard deviation; it is reported
    /// in tables but never drawn as an error bar.
    pub fn communication_std_ms(&self) -> f64 {
        self.total_std_ms
    }
}

/// Parallel chart series for one bit size: one entry per run configuration,
/// in the fixed configuration order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BitsizeSeries {
    /// Axis labels, e.g. "2D / 3G"
    pub labels: Vec<String>,
    /// Token-phase means
    pub token: Vec<f64>,
    /// Token-phase standard deviations
    pub token_std: Vec<f64>,
    /// Access-phase means
    pub access: Vec<f64>,
    /// Access-phase standard deviations
    pub access_std: Vec<f64>,
    /// Derived communication-time residuals
    pub communication: Vec<f64>,
    /// Standard deviations carried along with the residuals
    pub communication_std: Vec<f64>,
}

impl BitsizeSeries {
    /// Create an empty series
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one run configuration's timings to every parallel vector
    pub fn push(&mut self, config: &RunConfig, timings: &PhaseTimings) {
        self.labels.push(config.label());
        self.token.push(timings.token_mean_ms);
        self.token_std.push(timings.token_std_ms);
        self.access.push(timings.access_mean_ms);
        self.access_std.push(timings.access_std_ms);
        self.communication.push(timings.communication_mean_ms());
        self.communication_std.push(timings.communication_std_ms());
    }

    /// Number of bars in this series
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the series holds no bars
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Baseline offsets for the stacked communication segment: the summed
    /// height of the token and access segments beneath it
    pub fn stack_baseline(&self) -> Vec<f64> {
        self.token
            .iter()
            .zip(self.access.iter())
            .map(|(t, a)| t + a)
            .collect()
    }

    /// Tallest stacked bar in the series, used to size the y-axis
    pub fn max_total(&self) -> f64 {
        self.stack_baseline()
            .iter()
            .zip(self.communication.iter())
            .map(|(base, comm)| base + comm)
            .fold(0.0_f64, f64::max)
    }
}

/// All chart series for one protocol mode, keyed by bit size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeDataset {
    /// The protocol mode the dataset belongs to
    pub mode: ProtocolMode,
    /// One series per bit size, in ascending bit-size order
    pub series: BTreeMap<u32, BitsizeSeries>,
}

impl ModeDataset {
    /// Create an empty dataset with one empty series per bit size
    pub fn new(mode: ProtocolMode) -> Self {
        let mut series = BTreeMap::new();
        for bitsize in BITSIZES {
            series.insert(bitsize, BitsizeSeries::new());
        }
        Self { mode, series }
    }

    /// Series for one bit size
    pub fn series_for(&self, bitsize: u32) -> Option<&BitsizeSeries> {
        self.series.get(&bitsize)
    }

    /// Number of bars per series; every series holds the same count
    pub fn bar_count(&self) -> usize {
        self.series.values().map(|s| s.len()).next().unwrap_or(0)
    }

    /// Tallest stacked bar across all bit sizes
    pub fn max_total(&self) -> f64 {
        self.series
            .values()
            .map(|s| s.max_total())
            .fold(0.0_f64, f64::max)
    }

    /// Run-configuration labels, taken from the first series
    pub fn labels(&self) -> &[String] {
        self.series
            .values()
            .next()
            .map(|s| s.labels.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_timings() -> PhaseTimings {
        PhaseTimings {
            token_mean_ms: 120.0,
            token_std_ms: 4.5,
            access_mean_ms: 80.0,
            access_std_ms: 3.0,
            total_mean_ms: 250.0,
            total_std_ms: 6.0,
        }
    }

    #[test]
    fn test_communication_residual() {
        let t = sample_timings();
        assert_eq!(t.communication_mean_ms(), 50.0);
        assert_eq!(t.communication_std_ms(), 6.0);
    }

    #[test]
    fn test_series_push_keeps_vectors_parallel() {
        let mut series = BitsizeSeries::new();
        series.push(&RunConfig::new(2, 3), &sample_timings());
        series.push(&RunConfig::new(3, 5), &sample_timings());

        assert_eq!(series.len(), 2);
        assert_eq!(series.labels, vec!["2D / 3G", "3D / 5G"]);
        assert_eq!(series.token.len(), 2);
        assert_eq!(series.token_std.len(), 2);
        assert_eq!(series.access.len(), 2);
        assert_eq!(series.access_std.len(), 2);
        assert_eq!(series.communication.len(), 2);
        assert_eq!(series.communication_std.len(), 2);
    }

    #[test]
    fn test_stack_baseline() {
        let mut series = BitsizeSeries::new();
        series.push(&RunConfig::new(2, 3), &sample_timings());
        assert_eq!(series.stack_baseline(), vec![200.0]);
        assert_eq!(series.max_total(), 250.0);
    }

    #[test]
    fn test_mode_dataset_has_all_bitsizes() {
        let dataset = ModeDataset::new(ProtocolMode::Ara2);
        assert!(dataset.series_for(512).is_some());
        assert!(dataset.series_for(1024).is_some());
        assert!(dataset.series_for(2048).is_none());
        assert_eq!(dataset.bar_count(), 0);
    }

    #[test]
    fn test_mode_dataset_max_total() {
        let mut dataset = ModeDataset::new(ProtocolMode::Tdra2);
        let mut big = sample_timings();
        big.total_mean_ms = 900.0;
        dataset
            .series
            .get_mut(&512)
            .unwrap()
            .push(&RunConfig::new(2, 3), &sample_timings());
        dataset
            .series
            .get_mut(&1024)
            .unwrap()
            .push(&RunConfig::new(2, 3), &big);
        assert_eq!(dataset.max_total(), 900.0);
    }

    proptest! {
        #[test]
        fn prop_residual_is_exact_subtraction(
            token in 0.0_f64..10_000.0,
            access in 0.0_f64..10_000.0,
            comm in 0.0_f64..10_000.0,
        ) {
            let total = token + access + comm;
            let timings = PhaseTimings {
                token_mean_ms: token,
                token_std_ms: 1.0,
                access_mean_ms: access,
                access_std_ms: 1.0,
                total_mean_ms: total,
                total_std_ms: 1.0,
            };
            prop_assert_eq!(timings.communication_mean_ms(), total - token - access);
        }

        #[test]
        fn prop_series_stays_parallel(configs in proptest::collection::vec((1u32..10, 1u32..10), 0..16)) {
            let mut series = BitsizeSeries::new();
            for (d, g) in &configs {
                series.push(&RunConfig::new(*d, *g), &sample_timings());
            }
            prop_assert_eq!(series.len(), configs.len());
            prop_assert_eq!(series.stack_baseline().len(), configs.len());
        }
    }
}
