//! Move records and move rejection reasons.

use derive_new::new;
use serde::{Deserialize, Serialize};

use super::{Player, Position};

/// A move in tic-tac-toe: a player placing their mark at a position.
///
/// History stores board snapshots; moves are recovered from consecutive
/// snapshots for the move list and replay output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was not applied.
///
/// Rejected moves never change the game; this only explains the no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is not on the board.
    #[display("Index {} is off the board (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// The round is over or the match has ended.
    #[display("Round is not in play")]
    RoundNotInPlay,
}

impl std::error::Error for MoveError {}
