//! CLI command handlers
//!
//! This module contains the clap definitions and the implementation of CLI
//! commands, bridging argument parsing with the service layer.

pub mod expense;

use clap::{Parser, Subcommand};

pub use expense::{handle_expense_command, ExpenseArgs, ExpenseCommands};

#[derive(Parser, Debug)]
#[command(
    name = "expense-tracker",
    version,
    about = "CLI for managing expenses",
    long_about = "Records, updates, lists, deletes and summarizes expenses kept in a \
                  local JSON file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub args: ExpenseArgs,

    /// Print diagnostic output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show resolved paths and settings
    Config,
}
