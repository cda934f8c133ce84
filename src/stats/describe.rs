//! Descriptive statistics over the per-record prevalence field

use serde::{Deserialize, Serialize};

use crate::models::record::Record;
use crate::stats::aggregate::{total_cases, total_population, weighted_prevalence};
use crate::stats::round3;

/// Descriptive statistics for one record subset.
///
/// The mean/median/min/max/standard-deviation fields describe the
/// source-provided per-stratum prevalences, restricted to non-zero values;
/// `weighted_prevalence` is the separate population-weighted figure
/// recomputed from the summed counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    /// Sum of managed-patient counts (Ntop)
    pub total_cases: u64,
    /// Sum of reference populations (Npop)
    pub total_population: u64,
    /// Mean of the non-zero per-stratum prevalences
    pub mean_prevalence: f64,
    /// Median of the non-zero per-stratum prevalences
    pub median_prevalence: f64,
    /// Smallest non-zero per-stratum prevalence
    pub min_prevalence: f64,
    /// Largest non-zero per-stratum prevalence
    pub max_prevalence: f64,
    /// Sample standard deviation (divisor n-1) of the non-zero prevalences;
    /// `0.0` when fewer than 2 values exist
    pub std_dev_prevalence: f64,
    /// Population-weighted prevalence of the subset
    pub weighted_prevalence: f64,
}

impl DescriptiveStats {
    /// The defined "no data" sentinel: every field zero.
    ///
    /// Returned for empty subsets and for subsets whose prevalences are all
    /// zero. Callers branch on [`is_empty`](Self::is_empty) rather than on
    /// errors.
    pub const EMPTY: Self = Self {
        total_cases: 0,
        total_population: 0,
        mean_prevalence: 0.0,
        median_prevalence: 0.0,
        min_prevalence: 0.0,
        max_prevalence: 0.0,
        std_dev_prevalence: 0.0,
        weighted_prevalence: 0.0,
    };

    /// Whether this is the "no data" sentinel
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl Default for DescriptiveStats {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Compute descriptive prevalence statistics over a record subset.
///
/// Returns [`DescriptiveStats::EMPTY`] when the subset is empty or carries
/// no non-zero prevalence, never an error. Median of an even count is the
/// mean of the two middle values; the sample standard deviation uses the
/// `n-1` divisor and is `0.0` for a single value. All float fields are
/// rounded to 3 decimals.
#[must_use]
pub fn describe(records: &[&Record]) -> DescriptiveStats {
    let mut values: Vec<f64> = records
        .iter()
        .map(|r| r.prevalence)
        .filter(|&p| p != 0.0)
        .collect();

    if values.is_empty() {
        return DescriptiveStats::EMPTY;
    }

    values.sort_by(f64::total_cmp);

    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;

    let median = if n % 2 == 0 {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    } else {
        values[n / 2]
    };

    let std_dev = if n < 2 {
        0.0
    } else {
        let variance =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        variance.sqrt()
    };

    DescriptiveStats {
        total_cases: total_cases(records),
        total_population: total_population(records),
        mean_prevalence: round3(mean),
        median_prevalence: round3(median),
        min_prevalence: round3(values[0]),
        max_prevalence: round3(values[n - 1]),
        std_dev_prevalence: round3(std_dev),
        weighted_prevalence: weighted_prevalence(records),
    }
}
