//! Two-player tic-tac-toe with move history and round scoring.
//!
//! # Architecture
//!
//! - **Games**: board snapshots, win detection and the [`GameState`]
//!   match state machine
//! - **Config**: [`MatchConfig`] loaded from TOML
//! - **TUI**: terminal front-end driving the state machine ([`run_tui`])
//!
//! # Example
//!
//! ```
//! use tictactoe_match::{GameState, Lifecycle, Player, RoundOutcome};
//!
//! let mut game = GameState::new();
//! for index in [0, 4, 1, 7, 2] {
//!     game.apply_move(index);
//! }
//! assert_eq!(game.lifecycle(), &Lifecycle::RoundEnded(RoundOutcome::Win(Player::X)));
//! assert_eq!(game.scoreboard().wins(Player::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, MatchConfig};

// Crate-level exports - Terminal UI
pub use tui::{App, run_tui};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::invariants::{
    AlternatingTurnInvariant, GameInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant,
};
pub use games::tictactoe::rules::{Direction, is_full, scan_lines};
pub use games::tictactoe::{
    BOARD_SIZE, Board, Cell, GameState, History, HistoryError, Lifecycle, MatchResult,
    MatchSummary, Move, MoveError, Player, Position, RoundOutcome, SQUARE_COUNT, Scoreboard,
    StateError, WIN_LENGTH, check_winner,
};
