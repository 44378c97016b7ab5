//! `passvault edit` — update fields of an existing credential.

use crate::cli::output;
use crate::cli::{open_vault, prompt_entry_password, Cli};
use crate::errors::{PassVaultError, Result};
use crate::generator::score_strength;
use crate::vault::{Category, EntryInput};

/// Arguments of the `edit` command. `None` keeps the current value.
pub struct EditArgs<'a> {
    pub id: &'a str,
    pub website: Option<&'a str>,
    pub url: Option<&'a str>,
    pub username: Option<&'a str>,
    pub category: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub password: bool,
    pub generate: bool,
    pub length: Option<usize>,
}

/// Execute the `edit` command.
pub async fn execute(cli: &Cli, args: EditArgs<'_>) -> Result<()> {
    let category = args.category.map(str::parse::<Category>).transpose()?;

    let (mut store, settings) = open_vault(cli).await?;

    let current = store
        .get(args.id)
        .ok_or_else(|| PassVaultError::NotFound(args.id.to_string()))?;

    let mut input = EntryInput {
        website: args.website.unwrap_or(&current.website).to_string(),
        url: args.url.map(str::to_string).or_else(|| current.url.clone()),
        username: args.username.unwrap_or(&current.username).to_string(),
        password: current.password.clone(),
        category: category.unwrap_or(current.category),
        notes: args.notes.map(str::to_string).or_else(|| current.notes.clone()),
    };

    let password_changed = args.password || args.generate;
    if args.generate {
        input.password = super::generated_password(args.length, &settings)?;
    } else if args.password {
        input.password = prompt_entry_password(&input.website)?.to_string();
    }

    let entry = store.save(Some(args.id), &input).await?;

    output::success(&format!("Updated '{}'", entry.website));
    if password_changed {
        output::print_strength(&score_strength(&entry.password));
    }

    store.lock();
    Ok(())
}
