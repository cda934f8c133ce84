//! Common domain type definitions
//!
//! This module contains the enum types and dimension-ordering keys used
//! across the record model and the statistics modules.

use serde::{Deserialize, Serialize};

/// Aggregate age-band label used by the source for "all ages" rollup strata
pub const ALL_AGES: &str = "tous âges";

/// Rank assigned to open-ended age bands so they sort after every bounded band
pub const OPEN_ENDED_AGE_RANK: u32 = 999;

/// Sex category of a stratum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Male strata ("hommes")
    Male,
    /// Female strata ("femmes")
    Female,
    /// Aggregate strata covering both sexes ("tous sexes")
    All,
}

impl Sex {
    /// Source label for this category
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "hommes",
            Self::Female => "femmes",
            Self::All => "tous sexes",
        }
    }
}

impl From<&str> for Sex {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "hommes" | "homme" | "male" | "m" | "1" => Self::Male,
            "femmes" | "femme" | "female" | "f" | "2" => Self::Female,
            _ => Self::All,
        }
    }
}

/// Which level of the 3-level pathology hierarchy supplied a record's name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PathologyLevel {
    /// Broad disease group (patho_niv1)
    Level1,
    /// Disease sub-group (patho_niv2)
    Level2,
    /// Most specific condition (patho_niv3)
    Level3,
}

impl PathologyLevel {
    /// Numeric level, 1 through 3
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Level1 => 1,
            Self::Level2 => 2,
            Self::Level3 => 3,
        }
    }
}

/// Ordering rank for an age-band label.
///
/// Bands sort by the lower bound parsed out of the label ("de 5 à 9 ans"
/// ranks 5). Open-ended bands ("plus de 95 ans") and labels with no parsable
/// bound rank [`OPEN_ENDED_AGE_RANK`] so they land at the end.
#[must_use]
pub fn age_band_rank(label: &str) -> u32 {
    if label.contains("plus de") {
        return OPEN_ENDED_AGE_RANK;
    }

    label
        .split_whitespace()
        .find_map(|token| token.parse::<u32>().ok())
        .unwrap_or(OPEN_ENDED_AGE_RANK)
}

/// Normalize a department code for use as a grouping key.
///
/// Trims surrounding whitespace and upper-cases letter parts so overseas and
/// Corsican codes ("2a", " 2B ") compare consistently.
#[must_use]
pub fn normalize_department(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Ordering rank for a department code.
///
/// Codes sort by their leading numeric portion, then by any trailing letter
/// portion, which interleaves Corsican codes correctly: "01" < "2A" < "2B" <
/// "03" < … < "971". Codes with no leading digits sort last.
#[must_use]
pub fn department_rank(code: &str) -> (u32, String) {
    let digit_count = code.chars().take_while(char::is_ascii_digit).count();
    let number = code[..digit_count].parse::<u32>().unwrap_or(u32::MAX);
    (number, code[digit_count..].to_string())
}
