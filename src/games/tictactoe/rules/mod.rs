//! Game rules for tic-tac-toe.
//!
//! Pure functions over board snapshots. Rules are separated from board
//! storage so the game state and the invariants can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{BOARD_SIZE, Direction, WIN_LENGTH, check_winner, scan_lines};
