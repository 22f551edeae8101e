//! Board snapshot history with a movable view.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::action::Move;
use super::{Board, Position};

/// Why a serialized history was rejected.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
    /// No snapshots at all; the empty board is required.
    #[display("History has no snapshots")]
    Empty,
    /// The view points past the newest snapshot.
    #[display("Viewed snapshot {} is past the end ({} snapshots)", current, len)]
    ViewOutOfRange {
        /// Requested view.
        current: usize,
        /// Number of snapshots.
        len: usize,
    },
}

impl std::error::Error for HistoryError {}

/// Wire form of [`History`], checked before use.
#[derive(Deserialize)]
struct HistoryRecord {
    snapshots: Vec<Board>,
    current: usize,
}

impl TryFrom<HistoryRecord> for History {
    type Error = HistoryError;

    fn try_from(record: HistoryRecord) -> Result<Self, Self::Error> {
        let len = record.snapshots.len();
        if len == 0 {
            return Err(HistoryError::Empty);
        }
        if record.current >= len {
            return Err(HistoryError::ViewOutOfRange {
                current: record.current,
                len,
            });
        }
        Ok(Self {
            snapshots: record.snapshots,
            current: record.current,
        })
    }
}

/// Ordered board snapshots, oldest first.
///
/// `snapshots[0]` is always the empty board and each later snapshot adds
/// exactly one mark. `current` selects the snapshot being viewed; it sits
/// at the latest snapshot unless the player has stepped back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HistoryRecord")]
pub struct History {
    pub(super) snapshots: Vec<Board>,
    pub(super) current: usize,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current: 0,
        }
    }

    /// All snapshots, including any ahead of the view.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Number of snapshots (moves played plus one).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the empty board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the viewed snapshot.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Index of the newest snapshot.
    pub fn latest_index(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Whether the view is at the newest snapshot.
    pub fn is_at_latest(&self) -> bool {
        self.current == self.latest_index()
    }

    /// The viewed snapshot.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// Moves the view to snapshot `n`. Returns false if `n` does not exist.
    pub fn jump_to(&mut self, n: usize) -> bool {
        if n >= self.snapshots.len() {
            return false;
        }
        self.current = n;
        true
    }

    /// Appends `board` after the viewed snapshot.
    ///
    /// Snapshots ahead of the view are discarded first; the view moves to
    /// the new snapshot.
    pub fn push(&mut self, board: Board) {
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(board);
        self.current = self.snapshots.len() - 1;
    }

    /// Drops everything but the empty board.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Moves recovered from consecutive snapshots, across the whole history.
    pub fn moves(&self) -> Vec<Move> {
        self.snapshots
            .windows(2)
            .filter_map(|pair| pair[1].placed_since(&pair[0]))
            .filter_map(|(index, player)| {
                Position::from_index(index).map(|pos| Move::new(player, pos))
            })
            .collect()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;

    fn played(indices: &[usize]) -> History {
        let mut history = History::new();
        for &index in indices {
            let next = history.current().with_mark(index, history.current().turn());
            history.push(next);
        }
        history
    }

    #[test]
    fn test_new_history_has_empty_board() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert!(history.is_at_latest());
        assert_eq!(history.current(), &Board::new());
    }

    #[test]
    fn test_jump_keeps_snapshots() {
        let mut history = played(&[0, 4, 8]);
        assert!(history.jump_to(1));
        assert_eq!(history.len(), 4);
        assert_eq!(history.current().mark_count(), 1);
        assert!(!history.is_at_latest());
        assert!(!history.jump_to(4));
        assert_eq!(history.current_index(), 1);
    }

    #[test]
    fn test_push_truncates_future() {
        let mut history = played(&[0, 4, 8]);
        history.jump_to(1);
        let next = history.current().with_mark(2, Player::O);
        history.push(next);
        assert_eq!(history.len(), 3);
        assert!(history.is_at_latest());
        assert_eq!(
            history.moves(),
            vec![
                Move::new(Player::X, Position::TopLeft),
                Move::new(Player::O, Position::TopRight),
            ]
        );
    }

    #[test]
    fn test_deserialize_rejects_empty_history() {
        let err = serde_json::from_str::<History>(r#"{"snapshots":[],"current":0}"#).unwrap_err();
        assert!(err.to_string().contains("no snapshots"));
    }

    #[test]
    fn test_deserialize_rejects_dangling_view() {
        let mut json = serde_json::to_value(played(&[4])).expect("serializable");
        json["current"] = 5.into();
        let err = serde_json::from_value::<History>(json).unwrap_err();
        assert!(err.to_string().contains("past the end"));
    }

    #[test]
    fn test_deserialize_keeps_valid_history() {
        let mut history = played(&[0, 4, 8]);
        history.jump_to(1);
        let json = serde_json::to_string(&history).expect("serializable");
        let restored: History = serde_json::from_str(&json).expect("valid history");
        assert_eq!(restored, history);
    }
}
