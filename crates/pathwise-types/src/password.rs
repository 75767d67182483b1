//! Password strength scoring result.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Outcome of the five independent password checks.
///
/// `score` is the number of checks that passed (0..=5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStrength {
    pub score: u8,
    pub min_length: bool,
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_number: bool,
    pub has_special: bool,
}

impl PasswordStrength {
    pub fn level(&self) -> StrengthLevel {
        StrengthLevel::from_score(self.score)
    }
}

/// Coarse classification shown by the strength indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    /// Below 3 is weak, 3 and 4 are medium, 5 is strong.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthLevel::Weak,
            3..=4 => StrengthLevel::Medium,
            _ => StrengthLevel::Strong,
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLevel::Weak => write!(f, "weak"),
            StrengthLevel::Medium => write!(f, "medium"),
            StrengthLevel::Strong => write!(f, "strong"),
        }
    }
}
