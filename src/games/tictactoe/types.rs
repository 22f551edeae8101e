//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::position::Position;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = 9;

/// Player in the game.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board snapshot.
///
/// Boards are values: placing a mark returns a new board and leaves
/// the original untouched, so snapshots can be kept in history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; SQUARE_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; SQUARE_COUNT],
        }
    }

    /// Builds a board from explicit cells.
    pub fn from_cells(cells: [Cell; SQUARE_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Gets the cell at a named position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns a copy of this board with `player` marked at `index`.
    ///
    /// Callers validate the index first; an out-of-range index yields
    /// an unchanged copy.
    pub fn with_mark(&self, index: usize, player: Player) -> Self {
        let mut next = self.clone();
        if let Some(cell) = next.cells.get_mut(index) {
            *cell = Cell::Occupied(player);
        }
        next
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; SQUARE_COUNT] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Player to move on this board, derived from mark parity.
    pub fn turn(&self) -> Player {
        if self.mark_count() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns the single mark that turns `previous` into `self`.
    ///
    /// `None` unless exactly one cell differs and that cell went from
    /// empty to occupied.
    pub fn placed_since(&self, previous: &Board) -> Option<(usize, Player)> {
        let mut changed = self
            .cells
            .iter()
            .zip(previous.cells.iter())
            .enumerate()
            .filter(|(_, (now, before))| now != before);

        let (index, (now, before)) = changed.next()?;
        if changed.next().is_some() || *before != Cell::Empty {
            return None;
        }
        now.player().map(|player| (index, player))
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (index, cell) in self.cells.iter().enumerate() {
            let (row, col) = (index / 3, index % 3);
            match cell {
                Cell::Empty => result.push_str(&(index + 1).to_string()),
                Cell::Occupied(player) => result.push_str(&player.to_string()),
            }
            if col < 2 {
                result.push('|');
            } else if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(4, Player::X);
        assert_eq!(board.mark_count(), 0);
        assert_eq!(next.cell(Position::Center), Cell::Occupied(Player::X));
    }

    #[test]
    fn test_turn_follows_parity() {
        let board = Board::new();
        assert_eq!(board.turn(), Player::X);
        let board = board.with_mark(0, Player::X);
        assert_eq!(board.turn(), Player::O);
        let board = board.with_mark(8, Player::O);
        assert_eq!(board.turn(), Player::X);
    }

    #[test]
    fn test_placed_since_single_mark() {
        let before = Board::new().with_mark(0, Player::X);
        let after = before.with_mark(5, Player::O);
        assert_eq!(after.placed_since(&before), Some((5, Player::O)));
    }

    #[test]
    fn test_placed_since_rejects_overwrite_and_multiple() {
        let before = Board::new().with_mark(0, Player::X);
        let overwritten = before.with_mark(0, Player::O);
        assert_eq!(overwritten.placed_since(&before), None);

        let two = before.with_mark(1, Player::O).with_mark(2, Player::X);
        assert_eq!(two.placed_since(&before), None);
        assert_eq!(before.placed_since(&before), None);
    }

    #[test]
    fn test_display_layout() {
        let board = Board::new().with_mark(0, Player::X).with_mark(4, Player::O);
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
