//! Tic-tac-toe: board snapshots, win detection and the match state machine.

mod action;
mod game;
mod history;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod scoreboard;
mod types;

pub use action::{Move, MoveError};
pub use game::{GameState, StateError};
pub use history::{History, HistoryError};
pub use phases::{Lifecycle, MatchResult, MatchSummary, RoundOutcome};
pub use position::Position;
pub use rules::{BOARD_SIZE, WIN_LENGTH, check_winner};
pub use scoreboard::Scoreboard;
pub use types::{Board, Cell, Player, SQUARE_COUNT};
