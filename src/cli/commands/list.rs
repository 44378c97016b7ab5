//! `passvault list` — display credentials in a table.

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::Result;
use crate::vault::{Category, ALL_CATEGORIES};

/// Execute the `list` command.
pub async fn execute(cli: &Cli, category: Option<&str>, search: Option<&str>) -> Result<()> {
    if let Some(c) = category.filter(|c| *c != ALL_CATEGORIES) {
        c.parse::<Category>()?;
    }

    let (mut store, _) = open_vault(cli).await?;

    let matches = store.filter(category, search);
    output::info(&format!(
        "{} of {} password(s) for '{}'",
        matches.len(),
        store.len(),
        store.user_id()
    ));
    output::print_entries_table(&matches);

    store.lock();
    Ok(())
}
