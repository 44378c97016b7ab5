//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::generator::{Strength, StrengthLevel};
use crate::vault::Entry;

/// Shown in place of a secret that was not revealed.
pub const MASK: &str = "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}";

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of entries (never includes secrets).
pub fn print_entries_table(entries: &[&Entry]) {
    if entries.is_empty() {
        info("No passwords found.");
        tip("Run `passvault add <WEBSITE>` to add your first password.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Website", "Username", "Category", "Updated"]);

    for e in entries {
        table.add_row(vec![
            e.id.clone(),
            e.website.clone(),
            e.username.clone(),
            e.category.to_string(),
            e.updated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]);
    }

    println!("{table}");
}

/// Print a strength meter line, colored by level.
pub fn print_strength(strength: &Strength) {
    let label = match strength.level {
        StrengthLevel::Weak => style(strength.level.as_str()).red(),
        StrengthLevel::Medium => style(strength.level.as_str()).yellow(),
        StrengthLevel::Strong => style(strength.level.as_str()).green(),
        StrengthLevel::VeryStrong => style(strength.level.as_str()).green().bold(),
    };
    println!(
        "Strength: {label} ({}/{})",
        strength.score,
        Strength::MAX_SCORE
    );
}
