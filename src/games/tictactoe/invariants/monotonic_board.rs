//! Monotonic board invariant: cells never change once set.

use super::super::GameState;
use super::Invariant;

/// Invariant: each snapshot adds exactly one mark to its predecessor.
///
/// An occupied cell is never overwritten or cleared within a round.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .snapshots()
            .windows(2)
            .all(|pair| pair[1].placed_since(&pair[0]).is_some())
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
