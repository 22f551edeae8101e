//! History consistency invariant: snapshot `i` holds exactly `i` marks.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: history starts empty and grows by one mark per snapshot.
///
/// Also requires the view cursor to point at an existing snapshot.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        let snapshots = history.snapshots();

        let starts_empty = snapshots.first() == Some(&Board::new());
        let counts_match = snapshots
            .iter()
            .enumerate()
            .all(|(i, board)| board.mark_count() == i);

        starts_empty && counts_match && history.current_index() < snapshots.len()
    }

    fn description() -> &'static str {
        "Snapshot i holds exactly i marks"
    }
}
