//! `passvault strength` — score a password without storing it.

use zeroize::Zeroizing;

use crate::cli::output;
use crate::errors::{PassVaultError, Result};
use crate::generator::score_strength;

/// Execute the `strength` command.
pub fn execute(password: Option<&str>) -> Result<()> {
    let strength = match password {
        Some(pw) => score_strength(pw),
        None => {
            let pw = Zeroizing::new(
                dialoguer::Password::new()
                    .with_prompt("Password to score")
                    .allow_empty_password(true)
                    .interact()
                    .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?,
            );
            score_strength(&pw)
        }
    };
    output::print_strength(&strength);
    Ok(())
}
