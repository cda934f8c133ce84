mod common;

use common::sample_collection;
use patho_stats::stats::{filtered_summary, global_summary};
use patho_stats::{RecordFilter, Sex};

#[test]
fn global_summary_counts_structure_and_totals() {
    let collection = sample_collection();

    let summary = global_summary(&collection);
    assert_eq!(summary.record_count, 7);
    assert_eq!(summary.pathology_count, 2);
    assert_eq!(summary.department_count, 3);
    assert_eq!(summary.year_count, 2);
    assert_eq!(summary.total_cases, 215);
    assert_eq!(summary.total_population, 7000);
    // 215 / 7000 * 100
    assert_eq!(summary.weighted_prevalence, 3.071);
    assert_eq!(summary.mean_prevalence, 3.071);
}

#[test]
fn filtered_summary_restricts_the_totals() {
    let collection = sample_collection();

    let filter = RecordFilter::new().with_sex(Sex::Male).with_year(2020);
    let summary = filtered_summary(&collection, &filter).unwrap();
    assert_eq!(summary.record_count, 3);
    assert_eq!(summary.total_cases, 90);
    assert_eq!(summary.total_population, 3000);
    assert_eq!(summary.weighted_prevalence, 3.0);
}

#[test]
fn filtered_summary_is_none_when_nothing_matches() {
    let collection = sample_collection();

    let filter = RecordFilter::for_pathology("Grippe");
    assert!(filtered_summary(&collection, &filter).is_none());
}
