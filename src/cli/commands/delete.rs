//! `passvault delete` — remove a credential from the vault.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::{PassVaultError, Result};

/// Execute the `delete` command.
pub async fn execute(cli: &Cli, id: &str, force: bool) -> Result<()> {
    let (mut store, _) = open_vault(cli).await?;

    let website = store
        .get(id)
        .map(|e| e.website.clone())
        .ok_or_else(|| PassVaultError::NotFound(id.to_string()))?;

    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete password for '{website}'?"))
            .default(false)
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            store.lock();
            return Ok(());
        }
    }

    store.delete(id).await?;
    output::success(&format!("Deleted '{website}'"));

    store.lock();
    Ok(())
}
