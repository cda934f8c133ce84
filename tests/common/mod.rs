//! Shared fixtures for the integration tests
#![allow(dead_code)]

use patho_stats::{PathologyLevel, Record, RecordCollection, Sex};

/// Build one observation record with the fields the tests care about
pub fn record(
    year: i32,
    pathology: &str,
    sex: Sex,
    age_band: &str,
    department: &str,
    cases: u64,
    population: u64,
    prevalence: f64,
) -> Record {
    Record::new(
        year,
        pathology.to_string(),
        PathologyLevel::Level1,
        age_band.to_string(),
        sex,
        department.to_string(),
        cases,
        population,
        prevalence,
    )
}

/// A small two-pathology collection spread over sexes, bands, departments
/// and years
pub fn sample_collection() -> RecordCollection {
    RecordCollection::new(vec![
        record(2020, "Diabète", Sex::Male, "de 45 à 49 ans", "01", 10, 1000, 1.0),
        record(2020, "Diabète", Sex::Female, "de 45 à 49 ans", "01", 5, 1000, 0.5),
        record(2020, "Diabète", Sex::Male, "de 45 à 49 ans", "2A", 30, 1000, 3.0),
        record(2021, "Diabète", Sex::Male, "de 45 à 49 ans", "01", 20, 1000, 2.0),
        record(2021, "Diabète", Sex::Female, "plus de 95 ans", "2A", 40, 1000, 4.0),
        record(2020, "Asthme", Sex::Male, "de 0 à 4 ans", "01", 50, 1000, 5.0),
        record(2021, "Asthme", Sex::Female, "de 0 à 4 ans", "971", 60, 1000, 6.0),
    ])
}
