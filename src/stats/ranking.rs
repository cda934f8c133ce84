//! Cross-dimension ranking of pathologies and departments
//!
//! Rankings group the records passing a caller-supplied filter by pathology
//! and order the groups by weighted prevalence or by its growth between two
//! years. Groups are independent, so the per-group aggregation runs in
//! parallel over read-only shares of the record set.

use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::filter::RecordFilter;
use crate::models::record::Record;
use crate::models::RecordCollection;
use crate::stats::aggregate::{total_cases, total_population, weighted_prevalence};
use crate::stats::breakdown::weighted_prevalence_by_department;
use crate::stats::round3;

/// One pathology's rank entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathologyRank {
    /// Pathology name
    pub pathology: String,
    /// Population-weighted prevalence under the ranking filter
    pub weighted_prevalence: f64,
    /// Sum of managed-patient counts under the filter
    pub total_cases: u64,
    /// Sum of reference populations under the filter
    pub total_population: u64,
}

/// One pathology's growth entry between two boundary years
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRank {
    /// Pathology name
    pub pathology: String,
    /// Weighted prevalence in the start year
    pub start_prevalence: f64,
    /// Weighted prevalence in the end year
    pub end_prevalence: f64,
    /// End minus start, in prevalence points
    pub growth: f64,
}

fn group_by_pathology<'a>(records: Vec<&'a Record>) -> FxHashMap<String, Vec<&'a Record>> {
    let mut groups: FxHashMap<String, Vec<&'a Record>> = FxHashMap::default();
    for record in records {
        groups
            .entry(record.pathology.clone())
            .or_default()
            .push(record);
    }
    groups
}

/// Rank pathologies by weighted prevalence under an arbitrary dimension
/// filter, descending; ties broken by pathology name for a deterministic
/// order. `top_n` truncates the result.
#[must_use]
pub fn rank_pathologies(
    collection: &RecordCollection,
    filter: &RecordFilter,
    top_n: Option<usize>,
) -> Vec<PathologyRank> {
    let groups = group_by_pathology(filter.select(collection));
    debug!("ranking {} pathology group(s)", groups.len());

    let mut ranks: Vec<PathologyRank> = groups
        .into_par_iter()
        .map(|(pathology, group)| PathologyRank {
            pathology,
            weighted_prevalence: weighted_prevalence(&group),
            total_cases: total_cases(&group),
            total_population: total_population(&group),
        })
        .collect();

    ranks.sort_by(|a, b| {
        b.weighted_prevalence
            .total_cmp(&a.weighted_prevalence)
            .then_with(|| a.pathology.cmp(&b.pathology))
    });

    if let Some(n) = top_n {
        ranks.truncate(n);
    }
    ranks
}

/// Rank pathologies by growth of weighted prevalence between two years.
///
/// Only pathologies present with a positive reference population in BOTH
/// boundary years participate; a pathology absent from either year is
/// excluded rather than treated as zero. Any year constraint on `filter`
/// is ignored in favor of the explicit boundary years.
///
/// `None` when `year_start > year_end` or when the filtered set is empty.
#[must_use]
pub fn fastest_growing(
    collection: &RecordCollection,
    year_start: i32,
    year_end: i32,
    filter: &RecordFilter,
    top_n: Option<usize>,
) -> Option<Vec<GrowthRank>> {
    if year_start > year_end {
        return None;
    }

    let subset = filter.without_year().select(collection);
    if subset.is_empty() {
        return None;
    }

    let groups = group_by_pathology(subset);

    let mut ranks: Vec<GrowthRank> = groups
        .into_par_iter()
        .filter_map(|(pathology, group)| {
            let start: Vec<&Record> = group
                .iter()
                .filter(|r| r.year == year_start)
                .copied()
                .collect();
            let end: Vec<&Record> = group
                .iter()
                .filter(|r| r.year == year_end)
                .copied()
                .collect();

            if total_population(&start) == 0 || total_population(&end) == 0 {
                return None;
            }

            let start_prevalence = weighted_prevalence(&start);
            let end_prevalence = weighted_prevalence(&end);

            Some(GrowthRank {
                pathology,
                start_prevalence,
                end_prevalence,
                growth: round3(end_prevalence - start_prevalence),
            })
        })
        .collect();

    ranks.sort_by(|a, b| {
        b.growth
            .total_cmp(&a.growth)
            .then_with(|| a.pathology.cmp(&b.pathology))
    });

    if let Some(n) = top_n {
        ranks.truncate(n);
    }
    Some(ranks)
}

/// The `n` departments with the highest weighted prevalence for a
/// pathology, highest first; ties keep department-code order
#[must_use]
pub fn top_departments(
    collection: &RecordCollection,
    pathology: &str,
    n: usize,
    year: Option<i32>,
) -> Vec<(String, f64)> {
    let mut by_department = weighted_prevalence_by_department(collection, pathology, year);
    by_department.sort_by(|a, b| b.1.total_cmp(&a.1));
    by_department.truncate(n);
    by_department
}

/// The `n` departments with the lowest weighted prevalence for a
/// pathology, lowest first; ties keep department-code order
#[must_use]
pub fn bottom_departments(
    collection: &RecordCollection,
    pathology: &str,
    n: usize,
    year: Option<i32>,
) -> Vec<(String, f64)> {
    let mut by_department = weighted_prevalence_by_department(collection, pathology, year);
    by_department.sort_by(|a, b| a.1.total_cmp(&b.1));
    by_department.truncate(n);
    by_department
}
