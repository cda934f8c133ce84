//! Filtering capabilities for record collections
//!
//! This module provides the dimension filter used throughout the statistics
//! layer: up to five optional equality constraints over pathology, sex, age
//! band, department and year. Constraints combine with logical AND; a
//! constraint left unset matches every record.
//!
//! Filtering never fails: an empty sub-collection is a valid result and
//! every downstream statistic defines its behavior for it.

use serde::{Deserialize, Serialize};

use crate::models::record::Record;
use crate::models::types::{Sex, normalize_department};
use crate::models::RecordCollection;

/// An equality-constraint set over the five record dimensions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordFilter {
    /// Restrict to one pathology name
    pub pathology: Option<String>,
    /// Restrict to one sex category
    pub sex: Option<Sex>,
    /// Restrict to one age-band label
    pub age_band: Option<String>,
    /// Restrict to one department code (normalized on construction)
    pub department: Option<String>,
    /// Restrict to one year
    pub year: Option<i32>,
}

impl RecordFilter {
    /// A filter with no constraints, matching every record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for the most common case, a single-pathology filter
    #[must_use]
    pub fn for_pathology(pathology: impl Into<String>) -> Self {
        Self::new().with_pathology(pathology)
    }

    /// Constrain to one pathology name
    #[must_use]
    pub fn with_pathology(mut self, pathology: impl Into<String>) -> Self {
        self.pathology = Some(pathology.into());
        self
    }

    /// Constrain to one sex category
    #[must_use]
    pub const fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }

    /// Constrain to one age band
    #[must_use]
    pub fn with_age_band(mut self, age_band: impl Into<String>) -> Self {
        self.age_band = Some(age_band.into());
        self
    }

    /// Constrain to one department code
    #[must_use]
    pub fn with_department(mut self, department: &str) -> Self {
        self.department = Some(normalize_department(department));
        self
    }

    /// Constrain to one year
    #[must_use]
    pub const fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// The same filter with any year constraint removed.
    ///
    /// Used by comparisons that apply their own pair of year constraints.
    #[must_use]
    pub fn without_year(&self) -> Self {
        let mut filter = self.clone();
        filter.year = None;
        filter
    }

    /// Whether no constraint is set
    #[must_use]
    pub const fn is_unconstrained(&self) -> bool {
        self.pathology.is_none()
            && self.sex.is_none()
            && self.age_band.is_none()
            && self.department.is_none()
            && self.year.is_none()
    }

    /// Whether a record satisfies every set constraint
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(pathology) = &self.pathology {
            if record.pathology != *pathology {
                return false;
            }
        }
        if let Some(sex) = self.sex {
            if record.sex != sex {
                return false;
            }
        }
        if let Some(age_band) = &self.age_band {
            if record.age_band != *age_band {
                return false;
            }
        }
        if let Some(department) = &self.department {
            if record.department_code != *department {
                return false;
            }
        }
        if let Some(year) = self.year {
            if record.year != year {
                return false;
            }
        }
        true
    }

    /// Filter a borrowed record set, preserving relative order
    #[must_use]
    pub fn apply<'a>(&self, records: &[&'a Record]) -> Vec<&'a Record> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .copied()
            .collect()
    }

    /// Filter a whole collection, preserving ingestion order
    #[must_use]
    pub fn select<'a>(&self, collection: &'a RecordCollection) -> Vec<&'a Record> {
        collection
            .iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}
