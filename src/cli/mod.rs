//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{PassVaultError, Result};
use crate::remote::FsStore;
use crate::vault::VaultStore;

/// Minimum master password length accepted by `init`.
const MIN_PASSWORD_LEN: usize = 8;

/// Environment variable consulted before prompting for the master password.
const PASSWORD_ENV: &str = "PASSVAULT_PASSWORD";

/// PassVault CLI: local-first credential vault.
#[derive(Parser)]
#[command(
    name = "passvault",
    about = "Local-first credential vault with client-side encryption",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Store directory (default: .passvault, or `store_dir` in .passvault.toml)
    #[arg(long, global = true)]
    pub store_dir: Option<String>,

    /// User whose vault to open (default: `user` in .passvault.toml)
    #[arg(short, long, env = "PASSVAULT_USER", global = true)]
    pub user: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Create a new vault for the user
    Init,

    /// Add a credential
    Add {
        /// Website or service name
        website: String,
        /// Login URL
        #[arg(long)]
        url: Option<String>,
        /// Username or email
        #[arg(long, default_value = "")]
        username: String,
        /// banking, email, social, gaming, work or other
        #[arg(short, long, default_value = "other")]
        category: String,
        /// Free-form notes (stored encrypted)
        #[arg(long)]
        notes: Option<String>,
        /// Generate a random password instead of prompting
        #[arg(short, long)]
        generate: bool,
        /// Length of the generated password
        #[arg(long)]
        length: Option<usize>,
    },

    /// Edit a credential
    Edit {
        /// Entry id (see `passvault list`)
        id: String,
        #[arg(long)]
        website: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        username: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        /// Prompt for a new password
        #[arg(long, conflicts_with = "generate")]
        password: bool,
        /// Replace the password with a generated one
        #[arg(short, long)]
        generate: bool,
        /// Length of the generated password
        #[arg(long)]
        length: Option<usize>,
    },

    /// List credentials
    List {
        /// Only show this category ("all" for every category)
        #[arg(short, long)]
        category: Option<String>,
        /// Case-insensitive match on website or username
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one credential
    Show {
        /// Entry id
        id: String,
        /// Print the password and notes in clear text
        #[arg(long)]
        reveal: bool,
        /// Copy the password to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Delete a credential
    Delete {
        /// Entry id
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Generate a random password
    Generate {
        /// Password length (default: `generator_length` in .passvault.toml)
        #[arg(short, long)]
        length: Option<usize>,
        #[arg(long)]
        no_uppercase: bool,
        #[arg(long)]
        no_lowercase: bool,
        #[arg(long)]
        no_numbers: bool,
        #[arg(long)]
        no_symbols: bool,
    },

    /// Score a password's strength
    Strength {
        /// Password to score (omit for interactive prompt)
        password: Option<String>,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the master password from `PASSVAULT_PASSWORD` or an interactive prompt.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter master password")
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new master password with confirmation (used by `init`).
pub fn prompt_new_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        if !pw.is_empty() {
            if pw.chars().count() < MIN_PASSWORD_LEN {
                return Err(PassVaultError::InvalidInput(format!(
                    "master password must be at least {MIN_PASSWORD_LEN} characters"
                )));
            }
            return Ok(Zeroizing::new(pw));
        }
    }

    loop {
        let password = dialoguer::Password::new()
            .with_prompt("Choose master password")
            .with_confirmation(
                "Confirm master password",
                "Passwords do not match, try again",
            )
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?;

        if password.chars().count() < MIN_PASSWORD_LEN {
            output::warning(&format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters. Try again."
            ));
            continue;
        }

        return Ok(Zeroizing::new(password));
    }
}

/// Prompt for an entry password (hidden input).
pub fn prompt_entry_password(website: &str) -> Result<Zeroizing<String>> {
    let pw = dialoguer::Password::new()
        .with_prompt(format!("Password for {website}"))
        .allow_empty_password(true)
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Load `.passvault.toml` from the working directory.
pub fn load_settings() -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    Settings::load(&cwd)
}

/// Root directory of the file-backed store, honouring `--store-dir`.
pub fn store_root(cli: &Cli, settings: &Settings) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(match &cli.store_dir {
        Some(dir) => cwd.join(dir),
        None => settings.store_root(&cwd),
    })
}

/// A locked vault session for the selected user.
pub fn vault_for(cli: &Cli, settings: &Settings) -> Result<VaultStore> {
    let root = store_root(cli, settings)?;
    let user = cli.user.as_deref().unwrap_or(&settings.user);
    VaultStore::new(Arc::new(FsStore::new(root)), user)
}

/// Unlock the selected user's vault and load its entries.
///
/// Entries that fail to decrypt are reported as warnings; the rest of
/// the vault stays usable.
pub async fn open_vault(cli: &Cli) -> Result<(VaultStore, Settings)> {
    let settings = load_settings()?;
    let mut store = vault_for(cli, &settings)?;

    let password = prompt_password()?;
    store.unlock(&password).await?;
    drop(password);

    let report = store.load().await?;
    for failure in &report.failures {
        output::warning(&format!(
            "Entry '{}' could not be loaded: {}",
            failure.id, failure.error
        ));
    }

    Ok((store, settings))
}
