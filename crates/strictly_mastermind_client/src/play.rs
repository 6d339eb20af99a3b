//! Line-oriented interactive play.
//!
//! One command per line. The loop dispatches each command to the
//! [`GameController`] to completion before reading the next, so at most one
//! guess is ever in flight.

use std::io::Write;
use std::str::FromStr;

use strictly_mastermind::{Alphabet, Color, GuessError, Settings};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, instrument, warn};

use crate::controller::{GameController, PlayError, SubmissionOutcome};
use crate::judge::Judge;
use crate::render::render_game;
use crate::store::SettingsStore;

/// Help text shown by `help` and at startup.
pub const HELP: &str = "\
Commands:
  ABCD                 fill the whole guess and submit it
  set <peg> <letter>   set one peg (pegs count from 1)
  clear [peg]          clear one peg, or the whole guess
  submit               submit the current guess
  settings <colors> <pegs> <dups|nodups>
                       change settings and start a new game
  restart              abandon this game and start a new one
  help                 show this text
  quit                 leave";

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    /// Fill every peg from letters, then submit.
    Guess(String),
    /// Set one peg, zero-based.
    Set {
        /// Zero-based peg position.
        position: usize,
        /// Uppercase letter of the color.
        symbol: char,
    },
    /// Clear one peg, zero-based, or every peg.
    Clear(Option<usize>),
    /// Submit the current guess.
    Submit,
    /// Change settings.
    Settings {
        /// Requested alphabet size, clamped later.
        colors: i64,
        /// Requested code length, clamped later.
        pegs: i64,
        /// Whether the secret may repeat colors.
        allow_duplicates: bool,
    },
    /// Start a new game with the same settings.
    Restart,
    /// Show help.
    Help,
    /// Leave the loop.
    Quit,
}

/// A line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandError {
    /// Blank line.
    #[display("Empty command")]
    Empty,
    /// Unrecognized word.
    #[display("Unknown command '{}', type 'help'", _0)]
    Unknown(String),
    /// Recognized command with bad arguments.
    #[display("Usage: {}", _0)]
    Usage(&'static str),
}

impl std::error::Error for CommandError {}

fn parse_peg(word: Option<&str>, usage: &'static str) -> Result<usize, CommandError> {
    word.and_then(|w| w.parse::<usize>().ok())
        .and_then(|n| n.checked_sub(1))
        .ok_or(CommandError::Usage(usage))
}

impl FromStr for PlayCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Err(CommandError::Empty);
        };
        let rest: Vec<&str> = words.collect();

        let command = match (first.to_ascii_lowercase().as_str(), rest.as_slice()) {
            ("quit" | "exit" | "q", []) => PlayCommand::Quit,
            ("help" | "?", []) => PlayCommand::Help,
            ("restart" | "new", []) => PlayCommand::Restart,
            ("submit", []) => PlayCommand::Submit,
            ("clear", []) => PlayCommand::Clear(None),
            ("clear", [peg]) => PlayCommand::Clear(Some(parse_peg(Some(*peg), "clear [peg]")?)),
            ("set", [peg, letter]) => {
                const USAGE: &str = "set <peg> <letter>";
                let position = parse_peg(Some(*peg), USAGE)?;
                let mut chars = letter.chars();
                let symbol = match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
                    _ => return Err(CommandError::Usage(USAGE)),
                };
                PlayCommand::Set { position, symbol }
            }
            ("set", _) => return Err(CommandError::Usage("set <peg> <letter>")),
            ("settings", [colors, pegs, dups]) => {
                const USAGE: &str = "settings <colors> <pegs> <dups|nodups>";
                let colors = colors.parse().map_err(|_| CommandError::Usage(USAGE))?;
                let pegs = pegs.parse().map_err(|_| CommandError::Usage(USAGE))?;
                let allow_duplicates = match dups.to_ascii_lowercase().as_str() {
                    "dups" | "yes" | "1" => true,
                    "nodups" | "no" | "0" => false,
                    _ => return Err(CommandError::Usage(USAGE)),
                };
                PlayCommand::Settings {
                    colors,
                    pegs,
                    allow_duplicates,
                }
            }
            ("settings", _) => {
                return Err(CommandError::Usage("settings <colors> <pegs> <dups|nodups>"));
            }
            (_, []) if first.chars().all(|c| c.is_ascii_alphabetic()) => {
                PlayCommand::Guess(first.to_ascii_uppercase())
            }
            _ => return Err(CommandError::Unknown(first.to_string())),
        };
        Ok(command)
    }
}

/// Runs the interactive loop until `quit` or end of input.
///
/// Starts a game first if none is active. Player-facing failures are printed
/// and play continues; only I/O errors end the loop early.
///
/// # Errors
///
/// Returns any error reading `input` or writing `output`.
#[instrument(skip_all)]
pub async fn run<J, R, W>(
    controller: &mut GameController<J>,
    store: &SettingsStore,
    input: R,
    output: &mut W,
) -> std::io::Result<()>
where
    J: Judge,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(output, "{}", HELP)?;
    if controller.session_id().is_none() {
        report(output, controller.start().await.map(|_| ()))?;
    }
    show(controller, output)?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<PlayCommand>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };
        debug!(?command, "Command");

        match command {
            PlayCommand::Quit => {
                info!("Player quit");
                break;
            }
            PlayCommand::Help => writeln!(output, "{}", HELP)?,
            PlayCommand::Restart => report(output, controller.restart().await.map(|_| ()))?,
            PlayCommand::Settings {
                colors,
                pegs,
                allow_duplicates,
            } => {
                let settings = Settings::clamped(colors, pegs, allow_duplicates);
                if let Err(e) = store.save(&settings) {
                    warn!(error = %e, "Settings not persisted");
                    writeln!(output, "Settings not saved: {}", e.message)?;
                }
                writeln!(output, "Settings: {}", settings)?;
                report(output, controller.apply_settings(settings).await.map(|_| ()))?;
            }
            PlayCommand::Set { position, symbol } => {
                let result = decode_symbol(controller, symbol)
                    .and_then(|color| controller.set_peg(position, color));
                report(output, result)?;
            }
            PlayCommand::Clear(Some(position)) => report(output, controller.clear_peg(position))?,
            PlayCommand::Clear(None) => report(output, controller.clear_guess())?,
            PlayCommand::Submit => submit(controller, output).await?,
            PlayCommand::Guess(board) => match controller.fill_guess(&board) {
                Ok(()) => submit(controller, output).await?,
                Err(e) => report(output, Err(e))?,
            },
        }
        show(controller, output)?;
    }
    Ok(())
}

fn decode_symbol<J: Judge>(
    controller: &GameController<J>,
    symbol: char,
) -> Result<Color, PlayError> {
    let alphabet = Alphabet::from(controller.settings());
    alphabet
        .decode(symbol)
        .map_err(|e| PlayError::InvalidGuess(GuessError::Codec(e)))
}

async fn submit<J: Judge, W: Write>(
    controller: &mut GameController<J>,
    output: &mut W,
) -> std::io::Result<()> {
    match controller.submit_guess().await {
        Ok(SubmissionOutcome::Recorded(status)) => {
            debug!(%status, "Guess judged");
            Ok(())
        }
        Ok(SubmissionOutcome::Stale) => Ok(()),
        Err(e) => report(output, Err(e)),
    }
}

fn report<W: Write>(output: &mut W, result: Result<(), PlayError>) -> std::io::Result<()> {
    if let Err(e) = result {
        if e.is_retryable() {
            writeln!(output, "{} (try again)", e)?;
        } else {
            writeln!(output, "{}", e)?;
        }
    }
    Ok(())
}

fn show<J: Judge, W: Write>(controller: &GameController<J>, output: &mut W) -> std::io::Result<()> {
    match controller.game() {
        Some(game) => write!(output, "{}", render_game(game, controller.guess())),
        None => writeln!(output, "No game in progress, type 'restart' to try again."),
    }
}
