//! One module per subcommand.

pub mod add;
pub mod delete;
pub mod edit;
pub mod generate;
pub mod init;
pub mod list;
pub mod show;
pub mod strength;

use crate::config::Settings;
use crate::errors::Result;
use crate::generator::{self, PasswordPolicy};

/// Generate a password with the default policy for `--generate` flags.
pub(crate) fn generated_password(length: Option<usize>, settings: &Settings) -> Result<String> {
    generator::generate(
        length.unwrap_or(settings.generator_length),
        &PasswordPolicy::default(),
    )
}
