//! `passvault show` — display one credential.

use console::style;

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::{PassVaultError, Result};
use crate::generator::score_strength;

/// Execute the `show` command.
pub async fn execute(cli: &Cli, id: &str, reveal: bool, copy: bool) -> Result<()> {
    let (mut store, _) = open_vault(cli).await?;

    let entry = store
        .get(id)
        .ok_or_else(|| PassVaultError::NotFound(id.to_string()))?;

    let secret = |s: &str| {
        if reveal {
            s.to_string()
        } else {
            output::MASK.to_string()
        }
    };

    println!("{}", style(&entry.website).bold());
    println!("  {:<10} {}", "Id:", entry.id);
    if let Some(url) = &entry.url {
        println!("  {:<10} {url}", "URL:");
    }
    println!("  {:<10} {}", "Username:", entry.username);
    println!("  {:<10} {}", "Password:", secret(&entry.password));
    println!("  {:<10} {}", "Category:", entry.category);
    if let Some(notes) = &entry.notes {
        println!("  {:<10} {}", "Notes:", secret(notes));
    }
    println!(
        "  {:<10} {}",
        "Created:",
        entry.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!(
        "  {:<10} {}",
        "Updated:",
        entry.updated_at.format("%Y-%m-%d %H:%M:%S")
    );
    output::print_strength(&score_strength(&entry.password));

    if copy {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| PassVaultError::CommandFailed(format!("clipboard: {e}")))?;
        clipboard
            .set_text(entry.password.clone())
            .map_err(|e| PassVaultError::CommandFailed(format!("clipboard: {e}")))?;
        output::success("Password copied to clipboard");
    } else if !reveal {
        output::tip("Use --reveal to print secrets or --copy to copy the password.");
    }

    store.lock();
    Ok(())
}
