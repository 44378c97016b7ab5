//! `passvault add` — store a new credential.

use std::io::{self, IsTerminal, Read};

use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{open_vault, prompt_entry_password, Cli};
use crate::errors::Result;
use crate::generator::score_strength;
use crate::vault::{Category, EntryInput};

/// Arguments of the `add` command.
pub struct AddArgs<'a> {
    pub website: &'a str,
    pub url: Option<&'a str>,
    pub username: &'a str,
    pub category: &'a str,
    pub notes: Option<&'a str>,
    pub generate: bool,
    pub length: Option<usize>,
}

/// Execute the `add` command.
pub async fn execute(cli: &Cli, args: AddArgs<'_>) -> Result<()> {
    let category: Category = args.category.parse()?;

    let (mut store, settings) = open_vault(cli).await?;

    let password = if args.generate {
        Zeroizing::new(super::generated_password(args.length, &settings)?)
    } else if !io::stdin().is_terminal() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        let buf = Zeroizing::new(buf);
        // Only the line terminator is stripped; other whitespace is part of the password.
        let line = buf
            .strip_suffix('\n')
            .map(|s| s.strip_suffix('\r').unwrap_or(s))
            .unwrap_or(buf.as_str());
        Zeroizing::new(line.to_string())
    } else {
        prompt_entry_password(args.website)?
    };

    let input = EntryInput {
        website: args.website.to_string(),
        url: args.url.map(str::to_string),
        username: args.username.to_string(),
        password: password.to_string(),
        category,
        notes: args.notes.map(str::to_string),
    };

    let entry = store.save(None, &input).await?;

    output::success(&format!(
        "Added '{}' ({} entries total)",
        entry.website,
        store.len()
    ));
    output::info(&format!("Id: {}", entry.id));
    output::print_strength(&score_strength(&password));

    store.lock();
    Ok(())
}
