//! Read-only record collection
//!
//! A [`RecordCollection`] owns the cleaned records for one analysis session
//! and answers the distinct-value queries the breakdown and summary modules
//! are built on. The dimension orderings live here so every consumer agrees
//! on them: age bands by lower bound with open-ended bands last, departments
//! by numeric-then-letter code order, years ascending.

use itertools::Itertools;

use crate::models::record::Record;
use crate::models::types::{age_band_rank, department_rank};

/// Ordered, immutable collection of observation records
#[derive(Debug, Clone, Default)]
pub struct RecordCollection {
    records: Vec<Record>,
}

impl RecordCollection {
    /// Create a collection from already-cleaned records, preserving order
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// All records, in ingestion order
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Borrowed view of every record, the working currency of the filter
    /// and statistics functions
    #[must_use]
    pub fn refs(&self) -> Vec<&Record> {
        self.records.iter().collect()
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Distinct pathology names, alphabetically sorted
    #[must_use]
    pub fn pathologies(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.pathology.as_str())
            .unique()
            .sorted()
            .map(str::to_string)
            .collect()
    }

    /// Distinct age bands in ascending age order, excluding the aggregate
    /// "all ages" sentinel
    #[must_use]
    pub fn age_bands(&self) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| !r.is_all_ages())
            .map(|r| r.age_band.as_str())
            .unique()
            .sorted_by_key(|band| (age_band_rank(band), (*band).to_string()))
            .map(str::to_string)
            .collect()
    }

    /// Distinct department codes in code order
    #[must_use]
    pub fn departments(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.department_code.as_str())
            .unique()
            .sorted_by_key(|code| department_rank(code))
            .map(str::to_string)
            .collect()
    }

    /// Distinct years, ascending
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(|r| r.year)
            .unique()
            .sorted()
            .collect()
    }
}

impl From<Vec<Record>> for RecordCollection {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
