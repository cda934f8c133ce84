//! Cross-sectional anomaly detection across departments
//!
//! Departments are compared through z-scores of their population-weighted
//! prevalences. Two computation paths exist on purpose: the cumulative
//! all-years z-score pools every year of a department's data into one
//! weighted prevalence, while [`anomalous_years`] recomputes z-scores within
//! each year. The cumulative score is NOT an average of the per-year ones.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::filter::RecordFilter;
use crate::models::RecordCollection;
use crate::stats::aggregate::weighted_prevalence;
use crate::stats::breakdown::weighted_prevalence_by_department;
use crate::stats::round3;

/// One department's standing against the national distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentScore {
    /// Department code
    pub department: String,
    /// The department's population-weighted prevalence
    pub weighted_prevalence: f64,
    /// Standardized deviation from the cross-department mean
    pub z_score: f64,
}

/// Population-weighted national prevalence for a pathology, optionally
/// restricted to one year.
///
/// Pooled over all departments' counts; `None` when the reference
/// population is zero (no data), which is distinct from a computed `0.0`.
#[must_use]
pub fn national_weighted_mean(
    collection: &RecordCollection,
    pathology: &str,
    year: Option<i32>,
) -> Option<f64> {
    let mut filter = RecordFilter::for_pathology(pathology);
    if let Some(year) = year {
        filter = filter.with_year(year);
    }

    let subset = filter.select(collection);
    let population: u64 = subset.iter().map(|r| r.reference_population).sum();
    if population == 0 {
        return None;
    }

    Some(weighted_prevalence(&subset))
}

/// Z-score of every department's weighted prevalence against the
/// cross-department sample mean and standard deviation (divisor n-1).
///
/// `None` when fewer than 2 departments have data or when the spread is
/// exactly zero; in either case no standardization is meaningful. Scores
/// are rounded to 3 decimals and ordered by department code.
#[must_use]
pub fn z_scores(
    collection: &RecordCollection,
    pathology: &str,
    year: Option<i32>,
) -> Option<Vec<DepartmentScore>> {
    let by_department = weighted_prevalence_by_department(collection, pathology, year);

    let n = by_department.len();
    if n < 2 {
        debug!("z-scores undefined for '{pathology}': {n} department(s) with data");
        return None;
    }

    let mean = by_department.iter().map(|(_, v)| v).sum::<f64>() / n as f64;
    let variance = by_department
        .iter()
        .map(|(_, v)| (v - mean).powi(2))
        .sum::<f64>()
        / (n - 1) as f64;
    let std_dev = variance.sqrt();

    if std_dev == 0.0 {
        debug!("z-scores undefined for '{pathology}': zero spread across departments");
        return None;
    }

    Some(
        by_department
            .into_iter()
            .map(|(department, value)| DepartmentScore {
                department,
                weighted_prevalence: value,
                z_score: round3((value - mean) / std_dev),
            })
            .collect(),
    )
}

/// Departments whose absolute z-score reaches the threshold.
///
/// `None` exactly when [`z_scores`] is undefined; an empty list means the
/// scores exist but nothing crosses the threshold.
#[must_use]
pub fn outliers(
    collection: &RecordCollection,
    pathology: &str,
    year: Option<i32>,
    threshold: f64,
) -> Option<Vec<DepartmentScore>> {
    let scores = z_scores(collection, pathology, year)?;

    Some(
        scores
            .into_iter()
            .filter(|score| score.z_score.abs() >= threshold)
            .collect(),
    )
}

/// Years whose mean absolute per-department z-score reaches the threshold.
///
/// Each year is scored independently with the per-year z-score computation;
/// years where z-scores are undefined are skipped. Result ascending.
#[must_use]
pub fn anomalous_years(
    collection: &RecordCollection,
    pathology: &str,
    threshold: f64,
) -> Vec<i32> {
    let subset = RecordFilter::for_pathology(pathology).select(collection);
    let mut years: Vec<i32> = subset.iter().map(|r| r.year).collect();
    years.sort_unstable();
    years.dedup();

    years
        .into_iter()
        .filter(|&year| {
            z_scores(collection, pathology, Some(year)).is_some_and(|scores| {
                let mean_abs = scores.iter().map(|s| s.z_score.abs()).sum::<f64>()
                    / scores.len() as f64;
                mean_abs >= threshold
            })
        })
        .collect()
}

/// Each department's deviation from the national weighted mean, in
/// prevalence points, ordered by department code.
///
/// `None` when the national mean itself is not computable.
#[must_use]
pub fn department_deviations(
    collection: &RecordCollection,
    pathology: &str,
    year: Option<i32>,
) -> Option<Vec<(String, f64)>> {
    let mean = national_weighted_mean(collection, pathology, year)?;

    Some(
        weighted_prevalence_by_department(collection, pathology, year)
            .into_iter()
            .map(|(department, value)| (department, round3(value - mean)))
            .collect(),
    )
}
