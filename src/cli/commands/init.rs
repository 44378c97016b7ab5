//! `passvault init` — create a new vault for the selected user.

use crate::cli::output;
use crate::cli::{load_settings, prompt_new_password, store_root, vault_for, Cli};
use crate::errors::Result;

/// Execute the `init` command.
pub async fn execute(cli: &Cli) -> Result<()> {
    let settings = load_settings()?;
    let mut store = vault_for(cli, &settings)?;

    let password = prompt_new_password()?;
    store
        .initialize(&password, &settings.argon2_params())
        .await?;
    drop(password);

    output::success(&format!(
        "Vault created for '{}' in {}",
        store.user_id(),
        store_root(cli, &settings)?.display()
    ));
    output::tip("Run `passvault add <WEBSITE>` to add a password.");
    output::tip("Run `passvault generate` to create a strong password.");

    store.lock();
    Ok(())
}
