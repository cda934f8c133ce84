//! Pathology hierarchy resolution
//!
//! The source carries a 3-level pathology hierarchy per row. A record's
//! name is the most specific level that is actually filled in: level 3 if
//! present, else level 2, else level 1.

use crate::models::types::PathologyLevel;

/// Resolve a row's pathology name from its three hierarchy fields.
///
/// Fields are trimmed before the emptiness check. `None` when all three
/// levels are blank, in which case the row is unusable.
#[must_use]
pub fn resolve_pathology(
    level1: &str,
    level2: &str,
    level3: &str,
) -> Option<(String, PathologyLevel)> {
    let level3 = level3.trim();
    if !level3.is_empty() {
        return Some((level3.to_string(), PathologyLevel::Level3));
    }

    let level2 = level2.trim();
    if !level2.is_empty() {
        return Some((level2.to_string(), PathologyLevel::Level2));
    }

    let level1 = level1.trim();
    if !level1.is_empty() {
        return Some((level1.to_string(), PathologyLevel::Level1));
    }

    None
}
