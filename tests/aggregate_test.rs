mod common;

use common::{record, sample_collection};
use patho_stats::stats::{
    simple_mean_prevalence, total_cases, total_population, weighted_prevalence,
};
use patho_stats::{RecordFilter, Sex};

#[test]
fn totals_sum_counts_and_populations() {
    let collection = sample_collection();
    let records = collection.refs();

    assert_eq!(total_cases(&records), 215);
    assert_eq!(total_population(&records), 7000);
}

#[test]
fn weighted_prevalence_matches_ratio_of_sums() {
    // Concrete scenario from the product requirements: 15 cases over a
    // population of 2000 in two strata
    let records = vec![
        record(2020, "Diabète", Sex::Male, "tous âges", "01", 10, 1000, 1.0),
        record(2020, "Diabète", Sex::Female, "tous âges", "01", 5, 1000, 0.5),
    ];
    let refs: Vec<_> = records.iter().collect();

    assert_eq!(weighted_prevalence(&refs), 0.75);

    // The weighted figure always equals cases/population*100 under rounding
    let expected = total_cases(&refs) as f64 / total_population(&refs) as f64 * 100.0;
    assert!((weighted_prevalence(&refs) - expected).abs() < 0.0005);
}

#[test]
fn weighted_prevalence_of_nothing_is_zero() {
    assert_eq!(weighted_prevalence(&[]), 0.0);

    // Zero population is the same defined value, not an error
    let records = vec![record(2020, "Diabète", Sex::Male, "tous âges", "01", 0, 0, 0.0)];
    let refs: Vec<_> = records.iter().collect();
    assert_eq!(weighted_prevalence(&refs), 0.0);
}

#[test]
fn simple_mean_ignores_zero_prevalences() {
    let records = vec![
        record(2020, "Diabète", Sex::Male, "tous âges", "01", 10, 1000, 1.0),
        record(2020, "Diabète", Sex::Female, "tous âges", "01", 5, 1000, 0.5),
        record(2020, "Diabète", Sex::Female, "tous âges", "02", 0, 1000, 0.0),
    ];
    let refs: Vec<_> = records.iter().collect();

    assert_eq!(simple_mean_prevalence(&refs), 0.75);
}

#[test]
fn simple_mean_of_all_zero_prevalences_is_zero() {
    let records = vec![
        record(2020, "Diabète", Sex::Male, "tous âges", "01", 0, 1000, 0.0),
        record(2020, "Diabète", Sex::Female, "tous âges", "02", 0, 1000, 0.0),
    ];
    let refs: Vec<_> = records.iter().collect();

    assert_eq!(simple_mean_prevalence(&refs), 0.0);
}

#[test]
fn weighted_and_simple_mean_are_different_metrics() {
    // A huge low-prevalence stratum drags the weighted figure down while
    // the unweighted mean ignores stratum size
    let records = vec![
        record(2020, "Diabète", Sex::Male, "tous âges", "01", 10, 100_000, 0.01),
        record(2020, "Diabète", Sex::Female, "tous âges", "02", 90, 100, 90.0),
    ];
    let refs: Vec<_> = records.iter().collect();

    assert_eq!(weighted_prevalence(&refs), 0.1);
    assert_eq!(simple_mean_prevalence(&refs), 45.005);
}

#[test]
fn sum_consistency_across_department_breakdown() {
    let collection = sample_collection();
    let base = RecordFilter::for_pathology("Diabète");
    let whole = total_cases(&base.select(&collection));

    let per_department: u64 = collection
        .departments()
        .iter()
        .map(|code| total_cases(&base.clone().with_department(code).select(&collection)))
        .sum();

    assert_eq!(whole, per_department);
}
