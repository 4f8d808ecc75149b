use std::path::PathBuf;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;

use expense_tracker::cli::{handle_expense_command, ExpenseCommands};
use expense_tracker::config::paths::STORE_FILE_ENV;
use expense_tracker::config::{Settings, TrackerPaths};
use expense_tracker::display::format_usage;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Track personal expenses from the command line",
    long_about = "Records expenses with a description, amount and date in a single \
                  JSON file, and lists, updates, deletes and totals them."
)]
struct Cli {
    /// Path to the expense store (defaults to ./expenses.json)
    #[arg(long, global = true, env = STORE_FILE_ENV)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<ExpenseCommands>,
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    // Bad arguments are reported, not treated as a failed run
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print()?;
            if err.kind() == ErrorKind::InvalidSubcommand {
                println!();
                print!("{}", format_usage());
            }
            return Ok(());
        }
    };

    let Some(command) = cli.command else {
        print!("{}", format_usage());
        return Ok(());
    };

    let paths = TrackerPaths::resolve(cli.file);
    log::debug!("using expense store {}", paths.store_file().display());

    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths, &settings)?;
    storage.load_all()?;

    log::debug!("dispatching {:?}", command);
    match handle_expense_command(&storage, &settings, command) {
        Ok(()) => Ok(()),
        Err(err) if err.is_recoverable() => {
            println!("Error: {}", err);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
