//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::GameState;
use super::Invariant;

/// Invariant: each mark in history was placed by the player whose turn it was.
///
/// X places on boards with an even number of marks, O on odd.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .snapshots()
            .windows(2)
            .all(|pair| match pair[1].placed_since(&pair[0]) {
                Some((_, player)) => player == pair[0].turn(),
                None => false,
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Player};

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let game = GameState::replay(&[0, 4, 2, 6, 8]);
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.turn(), Player::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = GameState::replay(&[0]);
        let twice = game.board().with_mark(4, Player::X);
        game.history.push(twice);
        assert!(!AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_o_first_violates() {
        let mut game = GameState::new();
        game.history.push(Board::new().with_mark(0, Player::O));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
