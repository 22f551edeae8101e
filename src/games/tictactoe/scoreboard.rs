//! Win tally across the rounds of a match.

use serde::{Deserialize, Serialize};

use super::Player;
use super::phases::MatchResult;

/// Round wins per player. Draws are not counted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scoreboard {
    x: u32,
    o: u32,
}

impl Scoreboard {
    /// Creates a scoreboard at 0/0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Adds one round win for `player`.
    pub fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }

    /// Resets both counts to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Player with more wins, or a tie.
    pub fn leader(&self) -> MatchResult {
        match self.x.cmp(&self.o) {
            std::cmp::Ordering::Greater => MatchResult::Winner(Player::X),
            std::cmp::Ordering::Less => MatchResult::Winner(Player::O),
            std::cmp::Ordering::Equal => MatchResult::Tie,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_reset() {
        let mut scores = Scoreboard::new();
        scores.record_win(Player::X);
        scores.record_win(Player::X);
        scores.record_win(Player::O);
        assert_eq!(scores.wins(Player::X), 2);
        assert_eq!(scores.wins(Player::O), 1);
        assert_eq!(scores.leader(), MatchResult::Winner(Player::X));

        scores.reset();
        assert_eq!(scores, Scoreboard::new());
        assert_eq!(scores.leader(), MatchResult::Tie);
    }
}
