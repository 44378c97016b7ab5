//! `passvault generate` — print a random password. Does not touch the vault.

use crate::cli::output;
use crate::cli::load_settings;
use crate::errors::Result;
use crate::generator::{self, score_strength, PasswordPolicy};

/// Execute the `generate` command.
pub fn execute(length: Option<usize>, policy: &PasswordPolicy) -> Result<()> {
    let settings = load_settings()?;
    let password = generator::generate(length.unwrap_or(settings.generator_length), policy)?;

    println!("{password}");
    output::print_strength(&score_strength(&password));
    Ok(())
}
