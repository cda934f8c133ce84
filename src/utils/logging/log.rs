//! Logging utilities
//!
//! This module provides standardized logging functions for ingestion
//! operations.

use std::path::Path;

/// Log the start of a load with consistent format
pub fn log_load_start(path: &Path) {
    log::info!("Loading occurrence records from {}", path.display());
}

/// Log the completion of a load with consistent format
///
/// # Arguments
/// * `path` - Source that was loaded
/// * `kept` - Number of records kept after cleaning
/// * `excluded` - Number of aggregate/sentinel rows excluded
/// * `skipped` - Number of incomplete or unparseable rows skipped
/// * `elapsed` - Optional elapsed time
pub fn log_load_complete(
    path: &Path,
    kept: usize,
    excluded: usize,
    skipped: usize,
    elapsed: Option<std::time::Duration>,
) {
    if let Some(duration) = elapsed {
        log::info!(
            "Loaded {} records from {} in {:?} ({} aggregate rows excluded, {} rows skipped)",
            kept,
            path.display(),
            duration,
            excluded,
            skipped
        );
    } else {
        log::info!(
            "Loaded {} records from {} ({} aggregate rows excluded, {} rows skipped)",
            kept,
            path.display(),
            excluded,
            skipped
        );
    }
}
