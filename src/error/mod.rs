//! Error handling for the prevalence statistics engine.
//!
//! The statistics functions themselves never fail on empty or degenerate
//! data; they return documented sentinels instead. Errors only arise at the
//! ingestion boundary (I/O, malformed CSV structure).

use std::path::PathBuf;

/// Specialized error type for loading and analyzing occurrence data
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Error opening or reading a source file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error in the structure of the delimited source data
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A column required by the ingestion schema is missing from the header
    #[error("missing required column '{0}' in source header")]
    MissingColumn(String),

    /// The source file contained no usable rows after cleaning
    #[error("no usable records in {0}")]
    EmptySource(PathBuf),
}

/// Result type for ingestion and analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;
