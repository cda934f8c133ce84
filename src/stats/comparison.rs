//! Sex and age-band comparisons for a fixed pathology
//!
//! These comparisons are ratio-like derived metrics: whenever a denominator
//! or a compared subset is missing they return `None`, never a substitute
//! zero. A `0.0` gap and an incomputable gap are different answers.

use crate::filter::RecordFilter;
use crate::models::types::Sex;
use crate::models::RecordCollection;
use crate::stats::aggregate::{total_cases, total_population, weighted_prevalence};
use crate::stats::breakdown::stats_by_age_band;
use crate::stats::round3;

/// Male-to-female ratio of managed-patient counts for a pathology.
///
/// Based on case counts rather than prevalences, which are unevenly
/// reported across territories. `None` when no female cases exist.
#[must_use]
pub fn case_sex_ratio(collection: &RecordCollection, pathology: &str) -> Option<f64> {
    let base = RecordFilter::for_pathology(pathology);
    let male_cases = total_cases(&base.clone().with_sex(Sex::Male).select(collection));
    let female_cases = total_cases(&base.with_sex(Sex::Female).select(collection));

    if female_cases == 0 {
        return None;
    }

    Some(round3(male_cases as f64 / female_cases as f64))
}

/// Male minus female weighted prevalence for a pathology, in prevalence
/// points.
///
/// Positive values mean a higher prevalence among men. `None` when either
/// sex has no reference population.
#[must_use]
pub fn prevalence_sex_gap(collection: &RecordCollection, pathology: &str) -> Option<f64> {
    let base = RecordFilter::for_pathology(pathology);
    let male = base.clone().with_sex(Sex::Male).select(collection);
    let female = base.with_sex(Sex::Female).select(collection);

    if total_population(&male) == 0 || total_population(&female) == 0 {
        return None;
    }

    Some(round3(weighted_prevalence(&male) - weighted_prevalence(&female)))
}

/// Weighted-prevalence difference between two age bands of a pathology,
/// `to_band` minus `from_band`.
///
/// `None` when either band has no records for the pathology.
#[must_use]
pub fn prevalence_age_gap(
    collection: &RecordCollection,
    pathology: &str,
    from_band: &str,
    to_band: &str,
) -> Option<f64> {
    let base = RecordFilter::for_pathology(pathology);
    let from = base.clone().with_age_band(from_band).select(collection);
    let to = base.with_age_band(to_band).select(collection);

    if from.is_empty() || to.is_empty() {
        return None;
    }

    Some(round3(weighted_prevalence(&to) - weighted_prevalence(&from)))
}

/// The age band where a pathology's weighted prevalence peaks, with its
/// value.
///
/// Ties resolve to the earliest band in age order. `None` when the
/// pathology has no non-aggregate age-band records.
#[must_use]
pub fn peak_age_band(collection: &RecordCollection, pathology: &str) -> Option<(String, f64)> {
    let mut peak: Option<(String, f64)> = None;

    for (band, stats) in stats_by_age_band(collection, pathology) {
        let value = stats.weighted_prevalence;
        if peak.as_ref().is_none_or(|(_, best)| value > *best) {
            peak = Some((band, value));
        }
    }

    peak
}
