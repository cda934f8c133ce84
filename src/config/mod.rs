//! Configuration for analysis runs.

/// Configuration for an analysis session
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Absolute z-score at or above which a department or year is flagged
    pub outlier_threshold: f64,
    /// How many departments to list in top/bottom rankings
    pub extremes_count: usize,
    /// Whether the loader displays a progress spinner on large files
    pub show_progress: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            outlier_threshold: 2.0,
            extremes_count: 10,
            show_progress: true,
        }
    }
}
