//! Command-line interface for strictly_mastermind.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Strictly Mastermind - break a hidden color code against a remote judge
#[derive(Parser, Debug)]
#[command(name = "strictly_mastermind")]
#[command(about = "Mastermind client for a remote judging service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Judge base URL, overriding config and environment
    #[arg(long, global = true)]
    pub judge_url: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Inspect or change the saved settings
    Settings {
        /// Settings action
        #[command(subcommand)]
        action: SettingsCommand,
    },
}

/// Settings actions
#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Print the saved settings
    Show,

    /// Change the saved settings; values are clamped into range
    Set {
        /// Number of colors (2-26)
        #[arg(long, allow_negative_numbers = true)]
        colors: Option<i64>,

        /// Number of pegs (2-10)
        #[arg(long, allow_negative_numbers = true)]
        pegs: Option<i64>,

        /// Allow repeated colors in the secret
        #[arg(long, conflicts_with = "no_duplicates")]
        duplicates: bool,

        /// Forbid repeated colors in the secret
        #[arg(long)]
        no_duplicates: bool,
    },

    /// Forget the saved settings
    Reset,
}
