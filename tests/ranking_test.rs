mod common;

use common::{record, sample_collection};
use patho_stats::stats::{bottom_departments, fastest_growing, rank_pathologies, top_departments};
use patho_stats::{RecordCollection, RecordFilter, Sex};

#[test]
fn pathologies_rank_by_weighted_prevalence_descending() {
    let collection = sample_collection();

    let ranks = rank_pathologies(&collection, &RecordFilter::new(), None);
    assert_eq!(ranks.len(), 2);
    // Asthme: 110/2000 = 5.5%, Diabète: 105/5000 = 2.1%
    assert_eq!(ranks[0].pathology, "Asthme");
    assert_eq!(ranks[0].weighted_prevalence, 5.5);
    assert_eq!(ranks[1].pathology, "Diabète");
    assert_eq!(ranks[1].weighted_prevalence, 2.1);
}

#[test]
fn ranking_honors_dimension_filters() {
    let collection = sample_collection();

    let filter = RecordFilter::new().with_sex(Sex::Female).with_year(2021);
    let ranks = rank_pathologies(&collection, &filter, None);

    assert_eq!(ranks.len(), 2);
    assert_eq!(ranks[0].pathology, "Asthme");
    assert_eq!(ranks[0].total_cases, 60);
    assert_eq!(ranks[1].pathology, "Diabète");
    assert_eq!(ranks[1].total_cases, 40);
}

#[test]
fn top_n_truncates_the_ranking() {
    let collection = sample_collection();

    let ranks = rank_pathologies(&collection, &RecordFilter::new(), Some(1));
    assert_eq!(ranks.len(), 1);
    assert_eq!(ranks[0].pathology, "Asthme");
}

#[test]
fn equal_prevalences_rank_alphabetically() {
    let collection = RecordCollection::new(vec![
        record(2020, "Sclérose", Sex::All, "tous âges", "01", 10, 1000, 1.0),
        record(2020, "Asthme", Sex::All, "tous âges", "01", 10, 1000, 1.0),
    ]);

    let ranks = rank_pathologies(&collection, &RecordFilter::new(), None);
    assert_eq!(ranks[0].pathology, "Asthme");
    assert_eq!(ranks[1].pathology, "Sclérose");
}

#[test]
fn growth_ranks_between_two_years() {
    let collection = RecordCollection::new(vec![
        record(2020, "Diabète", Sex::All, "tous âges", "01", 100, 1000, 10.0),
        record(2021, "Diabète", Sex::All, "tous âges", "01", 150, 1000, 15.0),
        record(2020, "Asthme", Sex::All, "tous âges", "01", 50, 1000, 5.0),
        record(2021, "Asthme", Sex::All, "tous âges", "01", 60, 1000, 6.0),
    ]);

    let ranks = fastest_growing(&collection, 2020, 2021, &RecordFilter::new(), None).unwrap();
    assert_eq!(ranks.len(), 2);
    assert_eq!(ranks[0].pathology, "Diabète");
    assert_eq!(ranks[0].start_prevalence, 10.0);
    assert_eq!(ranks[0].end_prevalence, 15.0);
    assert_eq!(ranks[0].growth, 5.0);
    assert_eq!(ranks[1].pathology, "Asthme");
    assert_eq!(ranks[1].growth, 1.0);
}

#[test]
fn growth_excludes_pathologies_absent_from_a_boundary_year() {
    let collection = RecordCollection::new(vec![
        record(2020, "Diabète", Sex::All, "tous âges", "01", 100, 1000, 10.0),
        record(2021, "Diabète", Sex::All, "tous âges", "01", 150, 1000, 15.0),
        // Only observed in the end year: excluded, not treated as zero
        record(2021, "Asthme", Sex::All, "tous âges", "01", 60, 1000, 6.0),
    ]);

    let ranks = fastest_growing(&collection, 2020, 2021, &RecordFilter::new(), None).unwrap();
    assert_eq!(ranks.len(), 1);
    assert_eq!(ranks[0].pathology, "Diabète");
}

#[test]
fn growth_is_undefined_for_reversed_years_or_no_data() {
    let collection = sample_collection();

    assert!(fastest_growing(&collection, 2021, 2020, &RecordFilter::new(), None).is_none());

    let nothing = RecordFilter::for_pathology("Grippe");
    assert!(fastest_growing(&collection, 2020, 2021, &nothing, None).is_none());
}

#[test]
fn growth_ignores_a_year_constraint_on_the_filter() {
    let collection = RecordCollection::new(vec![
        record(2020, "Diabète", Sex::All, "tous âges", "01", 100, 1000, 10.0),
        record(2021, "Diabète", Sex::All, "tous âges", "01", 150, 1000, 15.0),
    ]);

    // A stray year constraint would otherwise empty one boundary subset
    let filter = RecordFilter::new().with_year(2020);
    let ranks = fastest_growing(&collection, 2020, 2021, &filter, None).unwrap();
    assert_eq!(ranks.len(), 1);
    assert_eq!(ranks[0].growth, 5.0);
}

#[test]
fn department_extremes_are_value_ordered() {
    let collection = RecordCollection::new(vec![
        record(2020, "Diabète", Sex::All, "tous âges", "01", 50, 1000, 5.0),
        record(2020, "Diabète", Sex::All, "tous âges", "02", 100, 1000, 10.0),
        record(2020, "Diabète", Sex::All, "tous âges", "03", 150, 1000, 15.0),
    ]);

    let top = top_departments(&collection, "Diabète", 2, None);
    assert_eq!(top, vec![("03".to_string(), 15.0), ("02".to_string(), 10.0)]);

    let bottom = bottom_departments(&collection, "Diabète", 2, None);
    assert_eq!(bottom, vec![("01".to_string(), 5.0), ("02".to_string(), 10.0)]);
}
