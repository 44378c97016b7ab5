//! Random password generation from character-class policies.
//!
//! Characters are drawn with `random_range`, which samples uniformly
//! over the charset, so no index is favoured when the charset size does
//! not divide the RNG's output range.

pub mod strength;

use rand::Rng;

use crate::errors::{PassVaultError, Result};

pub use strength::{score_strength, Strength, StrengthLevel};

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMBERS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Default generated password length.
pub const DEFAULT_LENGTH: usize = 16;

/// Upper bound on a single generated password.
pub const MAX_LENGTH: usize = 4096;

/// Which character classes a generated password may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }
}

impl PasswordPolicy {
    /// Union of the enabled classes, in a fixed order.
    pub fn charset(&self) -> Vec<char> {
        [
            (self.lowercase, LOWERCASE),
            (self.uppercase, UPPERCASE),
            (self.numbers, NUMBERS),
            (self.symbols, SYMBOLS),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .flat_map(|(_, set)| set.chars())
        .collect()
    }
}

/// Generate a `length`-character password from the classes `policy` enables.
pub fn generate(length: usize, policy: &PasswordPolicy) -> Result<String> {
    if length == 0 {
        return Err(PassVaultError::InvalidInput(
            "password length must be at least 1".into(),
        ));
    }
    if length > MAX_LENGTH {
        return Err(PassVaultError::InvalidInput(format!(
            "password length cannot exceed {MAX_LENGTH}"
        )));
    }

    let charset = policy.charset();
    if charset.is_empty() {
        return Err(PassVaultError::InvalidInput(
            "at least one character class must be enabled".into(),
        ));
    }

    let mut rng = rand::rng();
    Ok((0..length)
        .map(|_| charset[rng.random_range(0..charset.len())])
        .collect())
}
