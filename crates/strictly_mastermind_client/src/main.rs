//! Strictly Mastermind - terminal client.

#![warn(missing_docs)]

mod cli;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, SettingsCommand};
use strictly_mastermind::Settings;
use strictly_mastermind_client::{ClientConfig, GameController, HttpJudge, SettingsStore, play};
use tokio::io::BufReader;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "strictly_mastermind.toml";
const LOG_FILE: &str = "strictly_mastermind.log";
const DEFAULT_FILTER: &str = "warn,strictly_mastermind=info";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match &cli.command {
        Command::Play => init_file_tracing()?,
        Command::Settings { .. } => init_stderr_tracing(),
    }

    let config = load_config(&cli)?;

    match cli.command {
        Command::Play => run_play(config).await,
        Command::Settings { action } => run_settings(config, action),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Logs to a file so they never interleave with the board.
fn init_file_tracing() -> Result<()> {
    let log_file = std::fs::File::create(LOG_FILE)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Resolves configuration: CLI flag over environment over file over defaults.
#[instrument(skip_all)]
fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let config = ClientConfig::load(cli.config.as_deref(), Path::new(DEFAULT_CONFIG_PATH))?
        .apply_env()?;

    let config = match &cli.judge_url {
        Some(url) => {
            info!(url = %url, "Judge URL from command line");
            let judge = config.judge().clone().with_base_url(url.clone());
            config.with_judge(judge)
        }
        None => config,
    };

    info!(
        judge = %config.judge().base_url(),
        settings_path = %config.settings_path().display(),
        "Configuration resolved"
    );
    Ok(config)
}

/// Run the interactive game
#[instrument(skip_all)]
async fn run_play(config: ClientConfig) -> Result<()> {
    info!("Starting Strictly Mastermind");

    let store = SettingsStore::new(config.settings_path());
    let settings = store.load();

    let judge = Arc::new(HttpJudge::new(config.judge().clone())?);
    let mut controller = GameController::new(judge, settings);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    play::run(&mut controller, &store, stdin, &mut stdout).await?;

    info!("Goodbye");
    Ok(())
}

/// Run a settings subcommand
#[instrument(skip(config))]
fn run_settings(config: ClientConfig, action: SettingsCommand) -> Result<()> {
    let store = SettingsStore::new(config.settings_path());

    match action {
        SettingsCommand::Show => {
            println!("{}", store.load());
            println!("(stored in {})", store.path().display());
        }
        SettingsCommand::Set {
            colors,
            pegs,
            duplicates,
            no_duplicates,
        } => {
            let current = store.load();
            let allow_duplicates = match (duplicates, no_duplicates) {
                (true, _) => true,
                (_, true) => false,
                _ => current.allow_duplicates(),
            };
            let settings = Settings::clamped(
                colors.unwrap_or_else(|| i64::from(current.alphabet_size())),
                pegs.unwrap_or_else(|| i64::from(current.code_length())),
                allow_duplicates,
            );
            store.save(&settings)?;
            println!("{}", settings);
        }
        SettingsCommand::Reset => {
            store.clear()?;
            println!("{}", Settings::default());
        }
    }
    Ok(())
}
