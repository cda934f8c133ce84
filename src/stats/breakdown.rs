//! Per-dimension breakdowns for a fixed pathology
//!
//! Each function splits a pathology's records along one dimension and
//! reduces every slice with [`describe`] or [`weighted_prevalence`]. The
//! records are grouped in a single pass per call; ordering follows the
//! dimension rules of the record model (sexes fixed, age bands by lower
//! bound, departments by code order, years ascending).
//!
//! Aggregate sentinel strata ("tous sexes", "tous âges") are excluded from
//! their dimension's breakdown; keeping them would double-count every
//! stratum they roll up.

use std::hash::Hash;

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::filter::RecordFilter;
use crate::models::record::Record;
use crate::models::types::{Sex, age_band_rank, department_rank};
use crate::models::RecordCollection;
use crate::stats::aggregate::weighted_prevalence;
use crate::stats::describe::{DescriptiveStats, describe};

/// Group a record set by an arbitrary key in one pass
fn group_by<'a, K, F>(records: &[&'a Record], key: F) -> FxHashMap<K, Vec<&'a Record>>
where
    K: Eq + Hash,
    F: Fn(&Record) -> K,
{
    let mut groups: FxHashMap<K, Vec<&'a Record>> = FxHashMap::default();
    for record in records {
        groups.entry(key(record)).or_default().push(record);
    }
    groups
}

/// Descriptive statistics for the two individual-sex categories.
///
/// The aggregate "tous sexes" strata are not part of the breakdown. A sex
/// with no records yields the [`DescriptiveStats::EMPTY`] sentinel, so the
/// result always has exactly two entries, male first.
#[must_use]
pub fn stats_by_sex(
    collection: &RecordCollection,
    pathology: &str,
) -> Vec<(Sex, DescriptiveStats)> {
    let subset = RecordFilter::for_pathology(pathology).select(collection);
    let groups = group_by(&subset, |r| r.sex);

    [Sex::Male, Sex::Female]
        .into_iter()
        .map(|sex| {
            let stats = groups.get(&sex).map_or(DescriptiveStats::EMPTY, |g| describe(g));
            (sex, stats)
        })
        .collect()
}

/// Descriptive statistics per age band, ascending by the band's lower
/// bound with the open-ended top band last; the "tous âges" aggregate is
/// excluded
#[must_use]
pub fn stats_by_age_band(
    collection: &RecordCollection,
    pathology: &str,
) -> Vec<(String, DescriptiveStats)> {
    let subset: Vec<&Record> = RecordFilter::for_pathology(pathology)
        .select(collection)
        .into_iter()
        .filter(|r| !r.is_all_ages())
        .collect();

    let groups = group_by(&subset, |r| r.age_band.clone());

    groups
        .into_iter()
        .sorted_by_key(|(band, _)| (age_band_rank(band), band.clone()))
        .map(|(band, group)| {
            let stats = describe(&group);
            (band, stats)
        })
        .collect()
}

/// Descriptive statistics per department, in department-code order
#[must_use]
pub fn stats_by_department(
    collection: &RecordCollection,
    pathology: &str,
) -> Vec<(String, DescriptiveStats)> {
    let subset = RecordFilter::for_pathology(pathology).select(collection);
    let groups = group_by(&subset, |r| r.department_code.clone());

    groups
        .into_iter()
        .sorted_by_key(|(code, _)| department_rank(code))
        .map(|(code, group)| {
            let stats = describe(&group);
            (code, stats)
        })
        .collect()
}

/// Descriptive statistics per year, ascending
#[must_use]
pub fn stats_by_year(
    collection: &RecordCollection,
    pathology: &str,
) -> Vec<(i32, DescriptiveStats)> {
    let subset = RecordFilter::for_pathology(pathology).select(collection);
    let groups = group_by(&subset, |r| r.year);

    groups
        .into_iter()
        .sorted_by_key(|(year, _)| *year)
        .map(|(year, group)| {
            let stats = describe(&group);
            (year, stats)
        })
        .collect()
}

/// Population-weighted prevalence per year, ascending.
///
/// The year-ordered series the trend module derives variations from.
#[must_use]
pub fn weighted_prevalence_by_year(
    collection: &RecordCollection,
    pathology: &str,
) -> Vec<(i32, f64)> {
    let subset = RecordFilter::for_pathology(pathology).select(collection);
    let groups = group_by(&subset, |r| r.year);

    groups
        .into_iter()
        .sorted_by_key(|(year, _)| *year)
        .map(|(year, group)| (year, weighted_prevalence(&group)))
        .collect()
}

/// Population-weighted prevalence per department, in department-code
/// order, optionally restricted to one year
#[must_use]
pub fn weighted_prevalence_by_department(
    collection: &RecordCollection,
    pathology: &str,
    year: Option<i32>,
) -> Vec<(String, f64)> {
    let mut filter = RecordFilter::for_pathology(pathology);
    if let Some(year) = year {
        filter = filter.with_year(year);
    }

    let subset = filter.select(collection);
    let groups = group_by(&subset, |r| r.department_code.clone());

    groups
        .into_iter()
        .sorted_by_key(|(code, _)| department_rank(code))
        .map(|(code, group)| (code, weighted_prevalence(&group)))
        .collect()
}
