//! Win detection logic for tic-tac-toe.
//!
//! Rather than a fixed table of the eight winning lines, the scan walks
//! every cell and follows each direction for `win_length` cells. The
//! same routine works for any square board and line length.

use super::super::{Board, Cell, Player, RoundOutcome};
use super::draw::is_full;
use tracing::instrument;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of identical marks in a line needed to win.
pub const WIN_LENGTH: usize = 3;

/// Direction a line extends from its starting cell.
///
/// Variant order is the scan priority when several lines start at the
/// same cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Down and to the right.
    DiagonalDownRight,
    /// Down and to the left.
    DiagonalDownLeft,
}

impl Direction {
    /// Whether a line of `win_length` starting at (`row`, `col`) stays on the board.
    pub fn fits(self, row: usize, col: usize, size: usize, win_length: usize) -> bool {
        let room_right = col + win_length <= size;
        let room_down = row + win_length <= size;
        let room_left = col + 1 >= win_length;
        match self {
            Direction::Horizontal => room_right,
            Direction::Vertical => room_down,
            Direction::DiagonalDownRight => room_down && room_right,
            Direction::DiagonalDownLeft => room_down && room_left,
        }
    }

    /// Index of the `step`-th cell of a line starting at (`row`, `col`).
    ///
    /// Only valid when [`Direction::fits`] holds for the line.
    fn index(self, row: usize, col: usize, step: usize, size: usize) -> usize {
        match self {
            Direction::Horizontal => row * size + col + step,
            Direction::Vertical => (row + step) * size + col,
            Direction::DiagonalDownRight => (row + step) * size + col + step,
            Direction::DiagonalDownLeft => (row + step) * size + col - step,
        }
    }
}

/// Scans a `size` x `size` grid for a completed line of `win_length` marks.
///
/// Cells are visited in row-major order and, per cell, directions in
/// [`Direction`] order; the first complete line found decides the result.
/// `cells` must hold exactly `size * size` entries and `win_length` must
/// be at least 1.
pub fn scan_lines(cells: &[Cell], size: usize, win_length: usize) -> Option<Player> {
    debug_assert_eq!(cells.len(), size * size);
    debug_assert!(win_length >= 1);

    for row in 0..size {
        for col in 0..size {
            let Cell::Occupied(player) = cells[row * size + col] else {
                continue;
            };

            for direction in <Direction as strum::IntoEnumIterator>::iter() {
                if !direction.fits(row, col, size, win_length) {
                    continue;
                }
                let complete = (1..win_length)
                    .all(|step| cells[direction.index(row, col, step, size)] == Cell::Occupied(player));
                if complete {
                    return Some(player);
                }
            }
        }
    }

    None
}

/// Evaluates a board snapshot.
///
/// Returns `Win` on the first complete line, `Draw` when the board is
/// full without one, and `InProgress` otherwise.
#[instrument(skip(board), fields(marks = board.mark_count()))]
pub fn check_winner(board: &Board) -> RoundOutcome {
    match scan_lines(board.cells(), BOARD_SIZE, WIN_LENGTH) {
        Some(player) => RoundOutcome::Win(player),
        None if is_full(board) => RoundOutcome::Draw,
        None => RoundOutcome::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    fn mark(board: Board, positions: &[Position], player: Player) -> Board {
        positions
            .iter()
            .fold(board, |b, pos| b.with_mark(pos.to_index(), player))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), RoundOutcome::InProgress);
    }

    #[test]
    fn test_winner_top_row() {
        let board = mark(
            Board::new(),
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
            Player::X,
        );
        assert_eq!(check_winner(&board), RoundOutcome::Win(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let board = mark(
            Board::new(),
            &[Position::TopRight, Position::MiddleRight, Position::BottomRight],
            Player::O,
        );
        assert_eq!(check_winner(&board), RoundOutcome::Win(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let board = mark(
            Board::new(),
            &[Position::TopLeft, Position::Center, Position::BottomRight],
            Player::O,
        );
        assert_eq!(check_winner(&board), RoundOutcome::Win(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = mark(
            Board::new(),
            &[Position::TopRight, Position::Center, Position::BottomLeft],
            Player::X,
        );
        assert_eq!(check_winner(&board), RoundOutcome::Win(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = mark(
            Board::new(),
            &[Position::TopLeft, Position::TopCenter],
            Player::X,
        );
        assert_eq!(check_winner(&board), RoundOutcome::InProgress);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = mark(Board::new(), &[Position::TopLeft, Position::TopRight], Player::X);
        let board = mark(board, &[Position::TopCenter], Player::O);
        assert_eq!(check_winner(&board), RoundOutcome::InProgress);
    }

    #[test]
    fn test_scan_order_breaks_ties() {
        // O completes the middle row, X the bottom row; the earlier row wins.
        let board = mark(
            Board::new(),
            &[Position::MiddleLeft, Position::Center, Position::MiddleRight],
            Player::O,
        );
        let board = mark(
            board,
            &[Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
            Player::X,
        );
        assert_eq!(check_winner(&board), RoundOutcome::Win(Player::O));
    }

    #[test]
    fn test_direction_fits_on_3x3() {
        assert!(Direction::Horizontal.fits(0, 0, 3, 3));
        assert!(!Direction::Horizontal.fits(0, 1, 3, 3));
        assert!(Direction::Vertical.fits(0, 2, 3, 3));
        assert!(!Direction::Vertical.fits(1, 0, 3, 3));
        assert!(Direction::DiagonalDownLeft.fits(0, 2, 3, 3));
        assert!(!Direction::DiagonalDownLeft.fits(0, 1, 3, 3));
        assert!(!Direction::DiagonalDownRight.fits(0, 1, 3, 3));
    }

    #[test]
    fn test_scan_lines_larger_board() {
        // 5x5 board, four in a row on the anti-diagonal starting at (0, 4).
        let mut cells = vec![Cell::Empty; 25];
        for step in 0..4 {
            cells[step * 5 + 4 - step] = Cell::Occupied(Player::O);
        }
        assert_eq!(scan_lines(&cells, 5, 4), Some(Player::O));
        assert_eq!(scan_lines(&cells, 5, 5), None);
    }

    #[test]
    fn test_scan_lines_does_not_wrap_rows() {
        // Cells 3, 4 and 5 of a 4x4 board straddle two rows.
        let mut cells = vec![Cell::Empty; 16];
        for index in [3, 4, 5] {
            cells[index] = Cell::Occupied(Player::X);
        }
        assert_eq!(scan_lines(&cells, 4, 3), None);
    }
}
