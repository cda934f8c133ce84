//! Dataset-level summaries
//!
//! The global summary feeds the "résumé" view of a presentation layer:
//! structural counts plus the two prevalence aggregates over the whole
//! collection or an arbitrarily filtered slice of it.

use serde::{Deserialize, Serialize};

use crate::filter::RecordFilter;
use crate::models::RecordCollection;
use crate::stats::aggregate::{
    simple_mean_prevalence, total_cases, total_population, weighted_prevalence,
};

/// Structural and aggregate figures for a whole collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalSummary {
    /// Number of observation records
    pub record_count: usize,
    /// Number of distinct pathologies
    pub pathology_count: usize,
    /// Number of distinct departments
    pub department_count: usize,
    /// Number of distinct years
    pub year_count: usize,
    /// Sum of managed-patient counts
    pub total_cases: u64,
    /// Sum of reference populations
    pub total_population: u64,
    /// Population-weighted prevalence over everything
    pub weighted_prevalence: f64,
    /// Unweighted mean of the non-zero per-stratum prevalences
    pub mean_prevalence: f64,
}

/// Aggregate figures for one filtered slice of a collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredSummary {
    /// Number of records passing the filter
    pub record_count: usize,
    /// Sum of managed-patient counts in the slice
    pub total_cases: u64,
    /// Sum of reference populations in the slice
    pub total_population: u64,
    /// Population-weighted prevalence of the slice
    pub weighted_prevalence: f64,
}

/// Summarize a whole collection
#[must_use]
pub fn global_summary(collection: &RecordCollection) -> GlobalSummary {
    let records = collection.refs();

    GlobalSummary {
        record_count: collection.len(),
        pathology_count: collection.pathologies().len(),
        department_count: collection.departments().len(),
        year_count: collection.years().len(),
        total_cases: total_cases(&records),
        total_population: total_population(&records),
        weighted_prevalence: weighted_prevalence(&records),
        mean_prevalence: simple_mean_prevalence(&records),
    }
}

/// Summarize the slice of a collection passing a filter.
///
/// `None` when nothing matches, the canonical "no data" state a
/// presentation layer renders without special-casing.
#[must_use]
pub fn filtered_summary(
    collection: &RecordCollection,
    filter: &RecordFilter,
) -> Option<FilteredSummary> {
    let slice = filter.select(collection);
    if slice.is_empty() {
        return None;
    }

    Some(FilteredSummary {
        record_count: slice.len(),
        total_cases: total_cases(&slice),
        total_population: total_population(&slice),
        weighted_prevalence: weighted_prevalence(&slice),
    })
}
