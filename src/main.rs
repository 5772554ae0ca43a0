use anyhow::Result;
use clap::Parser;

use expense_tracker::cli::{handle_expense_command, Cli, Commands};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::logging::init_tracing;
use expense_tracker::storage::ExpenseStore;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = ExpensePaths::new()?.with_store_file(cli.args.file.clone());
    let settings = Settings::load_or_default(&paths)?;

    let store = ExpenseStore::new(paths.store_file(&settings));
    tracing::debug!(store = %store.path().display(), "resolved expense store");

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&store, &settings, cmd, &cli.args)?;
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Store file:       {}", store.path().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Month filter:    {}", settings.month_filter);
        }
        None => {
            println!("Expense Tracker - manage expenses from the command line");
            println!();
            println!("Run 'expense-tracker --help' for usage information.");
        }
    }

    Ok(())
}
