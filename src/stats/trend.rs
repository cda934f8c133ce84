//! Year-over-year variation and trend classification

use serde::{Deserialize, Serialize};

use crate::models::RecordCollection;
use crate::stats::breakdown::weighted_prevalence_by_year;
use crate::stats::round3;

/// Qualitative direction of a pathology's prevalence over the observed years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    /// Average yearly change is positive
    Rising,
    /// Average yearly change is negative
    Falling,
    /// Average yearly change is exactly zero
    Stable,
    /// No yearly change is computable (fewer than 2 years of data)
    Indeterminate,
}

impl Trend {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rising => "rising",
            Self::Falling => "falling",
            Self::Stable => "stable",
            Self::Indeterminate => "indeterminate",
        }
    }
}

/// Change of weighted prevalence from the previous observed year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearVariation {
    /// Year the change leads into
    pub year: i32,
    /// Weighted prevalence of that year
    pub weighted_prevalence: f64,
    /// Difference from the previous year, in prevalence points
    pub absolute_change: f64,
    /// Relative change in percent of the previous year's value; `None` when
    /// the previous year's weighted prevalence is zero
    pub relative_change: Option<f64>,
}

/// Year-over-year variation of weighted prevalence for one pathology.
///
/// Years are taken in ascending order; the first observed year has no
/// predecessor and produces no entry, so a pathology observed in a single
/// year yields an empty list. All values are rounded to 3 decimals.
#[must_use]
pub fn variation_by_year(collection: &RecordCollection, pathology: &str) -> Vec<YearVariation> {
    let series = weighted_prevalence_by_year(collection, pathology);

    series
        .windows(2)
        .map(|pair| {
            let (_, previous) = pair[0];
            let (year, current) = pair[1];
            let absolute = round3(current - previous);

            let relative = if previous == 0.0 {
                None
            } else {
                Some(round3(absolute / previous * 100.0))
            };

            YearVariation {
                year,
                weighted_prevalence: current,
                absolute_change: absolute,
                relative_change: relative,
            }
        })
        .collect()
}

/// Qualitative trend over the observed years, from the mean of the yearly
/// absolute changes.
///
/// [`Trend::Indeterminate`] when no change is computable at all.
#[must_use]
pub fn general_trend(collection: &RecordCollection, pathology: &str) -> Trend {
    let variations = variation_by_year(collection, pathology);
    if variations.is_empty() {
        return Trend::Indeterminate;
    }

    let mean_change = variations.iter().map(|v| v.absolute_change).sum::<f64>()
        / variations.len() as f64;

    if mean_change > 0.0 {
        Trend::Rising
    } else if mean_change < 0.0 {
        Trend::Falling
    } else {
        Trend::Stable
    }
}

/// Linear slope of weighted prevalence between the first and last observed
/// year, in prevalence points per year, rounded to 3 decimals.
///
/// `None` when fewer than 2 distinct years exist.
#[must_use]
pub fn slope(collection: &RecordCollection, pathology: &str) -> Option<f64> {
    let series = weighted_prevalence_by_year(collection, pathology);

    let (first_year, first) = *series.first()?;
    let (last_year, last) = *series.last()?;
    if last_year == first_year {
        return None;
    }

    Some(round3((last - first) / f64::from(last_year - first_year)))
}
