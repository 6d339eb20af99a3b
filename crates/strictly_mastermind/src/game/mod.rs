//! Game session state machine: `playing`, then `won` or `lost`.

mod phases;
mod turn;
mod typestate;
mod wrapper;

pub use phases::{GameStatus, Outcome, TURN_LIMIT};
pub use turn::{Rejected, Turn, TurnError};
pub use typestate::{GameFinished, GameInProgress, GameResult};
pub use wrapper::AnyGame;
