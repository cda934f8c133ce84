//! Scalar aggregates over record sets
//!
//! The two prevalence aggregates are deliberately distinct metrics:
//! [`weighted_prevalence`] recomputes from summed counts (population
//! weighted), while [`simple_mean_prevalence`] averages the source-provided
//! per-stratum percentages. They answer different questions and are not
//! interchangeable.

use crate::models::record::Record;
use crate::stats::round3;

/// Total number of managed patients (sum of Ntop)
#[must_use]
pub fn total_cases(records: &[&Record]) -> u64 {
    records.iter().map(|r| r.case_count).sum()
}

/// Total reference population (sum of Npop)
#[must_use]
pub fn total_population(records: &[&Record]) -> u64 {
    records.iter().map(|r| r.reference_population).sum()
}

/// Population-weighted prevalence percentage over a record set.
///
/// Computed as `total_cases / total_population * 100`, rounded to 3
/// decimals. Defined as `0.0` when the total population is zero; this is
/// the global policy wherever population weighting applies, and it is a
/// value, not an error.
#[must_use]
pub fn weighted_prevalence(records: &[&Record]) -> f64 {
    let population = total_population(records);
    if population == 0 {
        return 0.0;
    }

    round3(total_cases(records) as f64 / population as f64 * 100.0)
}

/// Arithmetic mean of the non-zero source prevalences, rounded to 3
/// decimals; `0.0` when no record carries a non-zero prevalence.
///
/// This is NOT population-weighted: a small stratum counts as much as a
/// large one. Use [`weighted_prevalence`] for the population-level figure.
#[must_use]
pub fn simple_mean_prevalence(records: &[&Record]) -> f64 {
    let values: Vec<f64> = records
        .iter()
        .map(|r| r.prevalence)
        .filter(|&p| p != 0.0)
        .collect();

    if values.is_empty() {
        return 0.0;
    }

    round3(values.iter().sum::<f64>() / values.len() as f64)
}
