//! Password strength scoring.
//!
//! One point per length threshold reached (8, 12, 16 characters) and
//! one per character class present (lowercase, uppercase, digit, other).

use std::fmt;

use serde::Serialize;

/// Coarse strength bucket for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "weak",
            StrengthLevel::Medium => "medium",
            StrengthLevel::Strong => "strong",
            StrengthLevel::VeryStrong => "very-strong",
        }
    }

    fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthLevel::Weak,
            3..=4 => StrengthLevel::Medium,
            5..=6 => StrengthLevel::Strong,
            _ => StrengthLevel::VeryStrong,
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Strength {
    pub level: StrengthLevel,
    /// 0 to [`Strength::MAX_SCORE`].
    pub score: u8,
}

impl Strength {
    pub const MAX_SCORE: u8 = 7;
}

/// Score a password from 0 to [`Strength::MAX_SCORE`].
///
/// Length is counted in Unicode scalar values (`chars()`), so an emoji
/// or other astral character counts as one, not as two UTF-16 units.
pub fn score_strength(password: &str) -> Strength {
    let length = password.chars().count();

    let checks = [
        length >= 8,
        length >= 12,
        length >= 16,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    let score = checks.iter().filter(|&&hit| hit).count() as u8;

    Strength {
        level: StrengthLevel::from_score(score),
        score,
    }
}
