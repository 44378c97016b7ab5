use clap::Parser;
use passvault::cli::commands::{add::AddArgs, edit::EditArgs};
use passvault::cli::{Cli, Commands};
use passvault::generator::PasswordPolicy;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Diagnostics go to stderr so stdout stays clean for piping.
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("passvault=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => passvault::cli::commands::init::execute(&cli).await,
        Commands::Add {
            ref website,
            ref url,
            ref username,
            ref category,
            ref notes,
            generate,
            length,
        } => {
            let args = AddArgs {
                website,
                url: url.as_deref(),
                username,
                category,
                notes: notes.as_deref(),
                generate,
                length,
            };
            passvault::cli::commands::add::execute(&cli, args).await
        }
        Commands::Edit {
            ref id,
            ref website,
            ref url,
            ref username,
            ref category,
            ref notes,
            password,
            generate,
            length,
        } => {
            let args = EditArgs {
                id,
                website: website.as_deref(),
                url: url.as_deref(),
                username: username.as_deref(),
                category: category.as_deref(),
                notes: notes.as_deref(),
                password,
                generate,
                length,
            };
            passvault::cli::commands::edit::execute(&cli, args).await
        }
        Commands::List {
            ref category,
            ref search,
        } => {
            passvault::cli::commands::list::execute(&cli, category.as_deref(), search.as_deref())
                .await
        }
        Commands::Show { ref id, reveal, copy } => {
            passvault::cli::commands::show::execute(&cli, id, reveal, copy).await
        }
        Commands::Delete { ref id, force } => {
            passvault::cli::commands::delete::execute(&cli, id, force).await
        }
        Commands::Generate {
            length,
            no_uppercase,
            no_lowercase,
            no_numbers,
            no_symbols,
        } => {
            let policy = PasswordPolicy {
                uppercase: !no_uppercase,
                lowercase: !no_lowercase,
                numbers: !no_numbers,
                symbols: !no_symbols,
            };
            passvault::cli::commands::generate::execute(length, &policy)
        }
        Commands::Strength { ref password } => {
            passvault::cli::commands::strength::execute(password.as_deref())
        }
    };

    if let Err(e) = result {
        passvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
