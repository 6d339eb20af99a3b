//! Plain-text rendering of a game for the terminal play loop.

use std::fmt::Write as _;

use strictly_mastermind::{Alphabet, AnyGame, GuessBuilder, Outcome, TURN_LIMIT, Turn};

/// Placeholder for an unset peg.
pub const EMPTY_SLOT: char = '_';

/// One history row: turn number, letters, key pegs.
pub fn render_turn(number: usize, turn: &Turn, code_length: u8) -> String {
    let pegs: String = turn
        .feedback()
        .key_pegs(code_length)
        .iter()
        .map(ToString::to_string)
        .collect();
    format!("{:>2}  {}  {}", number, turn.board(), pegs)
}

/// The guess being assembled, letters separated by spaces.
pub fn render_guess(builder: &GuessBuilder) -> String {
    let alphabet = builder.alphabet();
    builder
        .slots()
        .iter()
        .map(|slot| {
            slot.and_then(|color| alphabet.encode(color).ok())
                .unwrap_or(EMPTY_SLOT)
        })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Win or loss banner.
pub fn render_banner(outcome: &Outcome) -> String {
    outcome.to_string()
}

/// The whole board: header, history, then the guess or the banner.
pub fn render_game(game: &AnyGame, builder: Option<&GuessBuilder>) -> String {
    let settings = game.settings();
    let code_length = settings.code_length();
    let mut out = String::new();

    let played = game.history().len();
    let turn = if game.status().is_terminal() {
        played
    } else {
        (played + 1).min(TURN_LIMIT)
    };
    let _ = writeln!(
        out,
        "Turn {}/{}  ({}, letters A-{})",
        turn,
        TURN_LIMIT,
        settings,
        Alphabet::from(settings).last_symbol()
    );

    for (i, turn) in game.history().iter().enumerate() {
        let _ = writeln!(out, "{}", render_turn(i + 1, turn, code_length));
    }

    match (game.outcome(), builder) {
        (Some(outcome), _) => {
            let _ = writeln!(out, "{}", render_banner(outcome));
        }
        (None, Some(builder)) => {
            let _ = writeln!(out, "Guess: {}", render_guess(builder));
        }
        (None, None) => {}
    }
    out
}
