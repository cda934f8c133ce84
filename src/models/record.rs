//! Occurrence record model
//!
//! One [`Record`] is a single cleaned observation stratum: a pathology
//! crossed with sex, age band, department and year, carrying the managed
//! patient count, the reference population and the source-computed
//! prevalence percentage.
//!
//! Records are constructed once by the ingestion layer and never mutated;
//! every statistic derives new values instead of touching its input.

use serde::{Deserialize, Serialize};

use crate::models::types::{ALL_AGES, PathologyLevel, Sex};

/// A single cleaned observation stratum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Observation year
    pub year: i32,
    /// Pathology name, resolved to the most specific non-empty hierarchy level
    pub pathology: String,
    /// Hierarchy level that supplied the pathology name
    pub pathology_level: PathologyLevel,
    /// Age-band label as carried by the source ("de 0 à 4 ans", …)
    pub age_band: String,
    /// Sex category of the stratum
    pub sex: Sex,
    /// Normalized department code ("01", "2A", "971", …)
    pub department_code: String,
    /// Resolved department display name, when the code is known
    pub department_name: Option<String>,
    /// Number of patients managed for the pathology in this stratum (Ntop)
    pub case_count: u64,
    /// Population denominator for this stratum (Npop)
    pub reference_population: u64,
    /// Source-computed prevalence percentage (prev)
    pub prevalence: f64,
}

impl Record {
    /// Create a new record from already-cleaned values
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        year: i32,
        pathology: String,
        pathology_level: PathologyLevel,
        age_band: String,
        sex: Sex,
        department_code: String,
        case_count: u64,
        reference_population: u64,
        prevalence: f64,
    ) -> Self {
        Self {
            year,
            pathology,
            pathology_level,
            age_band,
            sex,
            department_code,
            department_name: None,
            case_count,
            reference_population,
            prevalence,
        }
    }

    /// Attach the resolved department display name
    #[must_use]
    pub fn with_department_name(mut self, name: impl Into<String>) -> Self {
        self.department_name = Some(name.into());
        self
    }

    /// Prevalence recomputed from this stratum's own counts.
    ///
    /// Not guaranteed identical to the source-provided [`prevalence`] field;
    /// population-weighted aggregates always recompute from counts while
    /// per-record statistics use the source value.
    ///
    /// [`prevalence`]: Record::prevalence
    #[must_use]
    pub fn derived_prevalence(&self) -> f64 {
        if self.reference_population == 0 {
            return 0.0;
        }
        self.case_count as f64 / self.reference_population as f64 * 100.0
    }

    /// Whether this record is an "all ages" aggregate stratum
    #[must_use]
    pub fn is_all_ages(&self) -> bool {
        self.age_band == ALL_AGES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stratum(cases: u64, population: u64, prevalence: f64) -> Record {
        Record::new(
            2020,
            "Diabète".to_string(),
            PathologyLevel::Level1,
            "tous âges".to_string(),
            Sex::All,
            "01".to_string(),
            cases,
            population,
            prevalence,
        )
    }

    #[test]
    fn derived_prevalence_recomputes_from_counts() {
        let record = stratum(25, 1000, 2.4);
        // The source value and the derived value may legitimately differ
        assert!((record.derived_prevalence() - 2.5).abs() < 1e-9);
        assert_eq!(record.prevalence, 2.4);
    }

    #[test]
    fn derived_prevalence_with_no_population_is_zero() {
        assert_eq!(stratum(5, 0, 0.0).derived_prevalence(), 0.0);
    }

    #[test]
    fn department_name_is_attached_by_builder() {
        let record = stratum(1, 10, 10.0).with_department_name("Ain");
        assert_eq!(record.department_name.as_deref(), Some("Ain"));
    }
}
