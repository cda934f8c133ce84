mod common;

use common::{record, sample_collection};
use patho_stats::stats::{
    stats_by_age_band, stats_by_department, stats_by_sex, stats_by_year,
    weighted_prevalence_by_department, weighted_prevalence_by_year,
};
use patho_stats::{RecordCollection, Sex};

#[test]
fn sex_breakdown_covers_exactly_male_and_female() {
    let collection = RecordCollection::new(vec![
        record(2020, "Diabète", Sex::Male, "tous âges", "01", 10, 1000, 1.0),
        record(2020, "Diabète", Sex::Female, "tous âges", "01", 5, 1000, 0.5),
        // The aggregate stratum must not appear in the breakdown
        record(2020, "Diabète", Sex::All, "tous âges", "01", 15, 2000, 0.75),
    ]);

    let by_sex = stats_by_sex(&collection, "Diabète");
    assert_eq!(by_sex.len(), 2);
    assert_eq!(by_sex[0].0, Sex::Male);
    assert_eq!(by_sex[1].0, Sex::Female);
    assert_eq!(by_sex[0].1.weighted_prevalence, 1.0);
    assert_eq!(by_sex[1].1.weighted_prevalence, 0.5);
}

#[test]
fn missing_sex_yields_the_empty_sentinel() {
    let collection = RecordCollection::new(vec![record(
        2020, "Diabète", Sex::Male, "tous âges", "01", 10, 1000, 1.0,
    )]);

    let by_sex = stats_by_sex(&collection, "Diabète");
    assert!(!by_sex[0].1.is_empty());
    assert!(by_sex[1].1.is_empty());
}

#[test]
fn age_bands_are_age_ordered_with_open_ended_last() {
    let collection = RecordCollection::new(vec![
        record(2020, "Diabète", Sex::Male, "plus de 95 ans", "01", 1, 100, 1.0),
        record(2020, "Diabète", Sex::Male, "de 5 à 9 ans", "01", 2, 100, 2.0),
        record(2020, "Diabète", Sex::Male, "de 80 à 84 ans", "01", 3, 100, 3.0),
        record(2020, "Diabète", Sex::Male, "de 0 à 4 ans", "01", 4, 100, 4.0),
        // Aggregate band is excluded from the breakdown
        record(2020, "Diabète", Sex::Male, "tous âges", "01", 10, 400, 2.5),
    ]);

    let bands: Vec<String> = stats_by_age_band(&collection, "Diabète")
        .into_iter()
        .map(|(band, _)| band)
        .collect();

    assert_eq!(
        bands,
        vec!["de 0 à 4 ans", "de 5 à 9 ans", "de 80 à 84 ans", "plus de 95 ans"]
    );
}

#[test]
fn departments_are_code_ordered() {
    let collection = sample_collection();

    let codes: Vec<String> = stats_by_department(&collection, "Diabète")
        .into_iter()
        .map(|(code, _)| code)
        .collect();

    assert_eq!(codes, vec!["01", "2A"]);

    let asthme: Vec<String> = weighted_prevalence_by_department(&collection, "Asthme", None)
        .into_iter()
        .map(|(code, _)| code)
        .collect();
    assert_eq!(asthme, vec!["01", "971"]);
}

#[test]
fn years_are_ascending() {
    let collection = sample_collection();

    let years: Vec<i32> = stats_by_year(&collection, "Diabète")
        .into_iter()
        .map(|(year, _)| year)
        .collect();
    assert_eq!(years, vec![2020, 2021]);
}

#[test]
fn yearly_series_is_population_weighted() {
    let collection = sample_collection();

    let series = weighted_prevalence_by_year(&collection, "Diabète");
    // 2020: 45 cases / 3000, 2021: 60 cases / 2000
    assert_eq!(series, vec![(2020, 1.5), (2021, 3.0)]);
}

#[test]
fn year_restriction_applies_to_department_series() {
    let collection = sample_collection();

    let only_2020 = weighted_prevalence_by_department(&collection, "Diabète", Some(2020));
    assert_eq!(only_2020, vec![("01".to_string(), 0.75), ("2A".to_string(), 3.0)]);
}
