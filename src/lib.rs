//! A Rust library for computing descriptive and comparative prevalence
//! statistics over disease-occurrence records, keyed by pathology, sex,
//! age band, department and year.
//!
//! The statistical engine is a set of pure functions over an immutable
//! record collection: dimension filtering, population-weighted aggregation,
//! descriptive statistics, per-dimension breakdowns, year-over-year trends,
//! cross-sectional z-score anomaly detection and pathology rankings. Data
//! loading and geography resolution live in the `ingest` module and stay
//! out of the engine.

pub mod config;
pub mod error;
pub mod filter;
pub mod ingest;
pub mod models;
pub mod stats;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use models::{PathologyLevel, Record, RecordCollection, Sex};

// Filtering capabilities
pub use filter::RecordFilter;

// Statistics entry points
pub use stats::{
    DescriptiveStats, GlobalSummary, Trend, describe, general_trend, global_summary, outliers,
    rank_pathologies, slope, variation_by_year, weighted_prevalence, z_scores,
};

// Ingestion collaborators
pub use ingest::{DepartmentResolver, FrenchDepartments, load_records, load_records_from_path};
