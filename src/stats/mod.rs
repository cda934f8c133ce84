//! Statistical aggregation engine
//!
//! Pure functions over borrowed record sets. The layering is strict:
//! aggregate and describe reduce a record set to scalars, breakdown applies
//! them per distinct dimension value, and the trend, anomaly, comparison and
//! ranking modules build on the breakdowns. Nothing here performs I/O or
//! mutates its input.
//!
//! Empty or degenerate inputs are values, not errors: every function
//! documents its zero/`None`/sentinel result, and callers branch on those
//! instead of catching anything.

pub mod aggregate;
pub mod anomaly;
pub mod breakdown;
pub mod comparison;
pub mod describe;
pub mod ranking;
pub mod summary;
pub mod trend;

pub use aggregate::{simple_mean_prevalence, total_cases, total_population, weighted_prevalence};
pub use anomaly::{
    DepartmentScore, anomalous_years, department_deviations, national_weighted_mean, outliers,
    z_scores,
};
pub use breakdown::{
    stats_by_age_band, stats_by_department, stats_by_sex, stats_by_year,
    weighted_prevalence_by_department, weighted_prevalence_by_year,
};
pub use comparison::{case_sex_ratio, peak_age_band, prevalence_age_gap, prevalence_sex_gap};
pub use describe::{DescriptiveStats, describe};
pub use ranking::{
    GrowthRank, PathologyRank, bottom_departments, fastest_growing, rank_pathologies,
    top_departments,
};
pub use summary::{FilteredSummary, GlobalSummary, filtered_summary, global_summary};
pub use trend::{Trend, YearVariation, general_trend, slope, variation_by_year};

/// Round a percentage or score to the 3 decimals used across the engine
#[must_use]
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
