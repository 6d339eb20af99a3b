//! Tests for command parsing, rendering and the interactive loop.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use strictly_mastermind::{Color, GuessBuilder, SessionId, Settings};
use strictly_mastermind_client::play::{self, CommandError, PlayCommand};
use strictly_mastermind_client::render::render_guess;
use strictly_mastermind_client::{Evaluation, GameController, Judge, JudgeError, SettingsStore};
use tempfile::TempDir;

/// Judge answering guesses from a fixed queue of `(blacks, whites)` pairs.
#[derive(Default)]
struct QueueJudge {
    answers: Mutex<VecDeque<(u32, u32)>>,
    generated: Mutex<Vec<Settings>>,
}

impl QueueJudge {
    fn with_answers(answers: &[(u32, u32)]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().copied().collect()),
            generated: Mutex::default(),
        }
    }
}

#[async_trait]
impl Judge for QueueJudge {
    async fn start(&self) -> Result<SessionId, JudgeError> {
        Ok(SessionId::new("play"))
    }

    async fn generate(&self, _session: &SessionId, settings: &Settings) -> Result<(), JudgeError> {
        self.generated.lock().expect("lock").push(*settings);
        Ok(())
    }

    async fn evaluate(&self, _session: &SessionId, _board: &str) -> Result<Evaluation, JudgeError> {
        let (blacks, whites) = self
            .answers
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or((0, 0));
        Ok(Evaluation::new(blacks, whites, None))
    }
}

async fn play_script(
    judge: Arc<QueueJudge>,
    store: &SettingsStore,
    script: &str,
) -> (GameController<QueueJudge>, String) {
    let mut controller = GameController::new(judge, Settings::default());
    let mut output = Vec::new();
    play::run(&mut controller, store, script.as_bytes(), &mut output)
        .await
        .expect("Play loop failed");
    let output = String::from_utf8(output).expect("UTF-8 output");
    (controller, output)
}

// ─────────────────────────────────────────────────────────────
//  Parsing
// ─────────────────────────────────────────────────────────────

#[test]
fn test_parse_commands() {
    assert_eq!(
        "abcd".parse::<PlayCommand>(),
        Ok(PlayCommand::Guess("ABCD".to_string()))
    );
    assert_eq!(
        "set 2 c".parse::<PlayCommand>(),
        Ok(PlayCommand::Set {
            position: 1,
            symbol: 'C'
        })
    );
    assert_eq!("clear".parse::<PlayCommand>(), Ok(PlayCommand::Clear(None)));
    assert_eq!(
        "clear 3".parse::<PlayCommand>(),
        Ok(PlayCommand::Clear(Some(2)))
    );
    assert_eq!(
        "settings 8 5 nodups".parse::<PlayCommand>(),
        Ok(PlayCommand::Settings {
            colors: 8,
            pegs: 5,
            allow_duplicates: false
        })
    );
    assert_eq!("  QUIT ".parse::<PlayCommand>(), Ok(PlayCommand::Quit));
    assert_eq!("submit".parse::<PlayCommand>(), Ok(PlayCommand::Submit));
    assert_eq!("restart".parse::<PlayCommand>(), Ok(PlayCommand::Restart));
}

#[test]
fn test_parse_errors() {
    assert_eq!("   ".parse::<PlayCommand>(), Err(CommandError::Empty));
    assert!(matches!(
        "set 0 a".parse::<PlayCommand>(),
        Err(CommandError::Usage(_))
    ));
    assert!(matches!(
        "set 1 ab".parse::<PlayCommand>(),
        Err(CommandError::Usage(_))
    ));
    assert!(matches!(
        "settings 8 5 maybe".parse::<PlayCommand>(),
        Err(CommandError::Usage(_))
    ));
    assert!(matches!(
        "AB12".parse::<PlayCommand>(),
        Err(CommandError::Unknown(_))
    ));
}

// ─────────────────────────────────────────────────────────────
//  Rendering
// ─────────────────────────────────────────────────────────────

#[test]
fn test_render_partial_guess() {
    let mut builder = GuessBuilder::new(&Settings::default());
    builder.set_peg(0, Color::new(0)).expect("Set failed");
    builder.set_peg(2, Color::new(2)).expect("Set failed");
    assert_eq!(render_guess(&builder), "A _ C _");
}

// ─────────────────────────────────────────────────────────────
//  Loop
// ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_play_to_a_win() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SettingsStore::new(dir.path().join("settings.json"));
    let judge = Arc::new(QueueJudge::with_answers(&[(1, 2), (4, 0)]));

    let (controller, output) = play_script(judge, &store, "AABB\nCCDD\nquit\n").await;

    assert_eq!(controller.history().len(), 2);
    assert!(output.contains(" 1  AABB  ●○○·"), "Output was:\n{}", output);
    assert!(output.contains("You win! The combination was: CCDD"));
}

#[tokio::test]
async fn test_bad_input_keeps_playing() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SettingsStore::new(dir.path().join("settings.json"));
    let judge = Arc::new(QueueJudge::with_answers(&[(0, 0)]));

    let (controller, output) = play_script(judge, &store, "ZZZZ\nfly away\nsubmit\nABCD\n").await;

    assert_eq!(controller.history().len(), 1);
    assert!(output.contains("Unknown command 'fly'"));
    assert!(output.contains("Guess is incomplete"));
}

#[tokio::test]
async fn test_settings_command_saves_and_restarts() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SettingsStore::new(dir.path().join("settings.json"));
    let judge = Arc::new(QueueJudge::default());

    let (controller, _output) =
        play_script(Arc::clone(&judge), &store, "settings 3 5 nodups\n").await;

    let expected = Settings::new(3, 3, false).expect("Valid settings");
    assert_eq!(store.load(), expected);
    assert_eq!(controller.settings(), &expected);
    assert_eq!(
        judge.generated.lock().expect("lock").as_slice(),
        &[Settings::default(), expected]
    );
}
