//! Round outcomes, match results and the game lifecycle.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::Player;
use super::scoreboard::Scoreboard;

/// Result of evaluating a board.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// No line yet and empty cells remain.
    #[display("In progress")]
    InProgress,
    /// A player completed a line.
    #[display("Player {} wins", _0)]
    Win(Player),
    /// Board is full with no line.
    #[display("Draw")]
    Draw,
}

impl RoundOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            RoundOutcome::Win(player) => Some(*player),
            RoundOutcome::InProgress | RoundOutcome::Draw => None,
        }
    }

    /// Returns true once the round is decided.
    pub fn is_finished(&self) -> bool {
        !matches!(self, RoundOutcome::InProgress)
    }
}

/// Overall result of a match, decided by the scoreboard.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    /// One player won more rounds.
    #[display("Player {} wins the match", _0)]
    Winner(Player),
    /// Both players won the same number of rounds.
    #[display("It's a tie")]
    Tie,
}

/// Final scores frozen when a match ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Scores at the moment the match ended.
    pub scores: Scoreboard,
    /// Winner by score, or a tie.
    pub result: MatchResult,
}

impl MatchSummary {
    /// Freezes a scoreboard into a summary.
    pub fn from_scores(scores: Scoreboard) -> Self {
        Self {
            result: scores.leader(),
            scores,
        }
    }
}

/// Where the game is in its round/match cycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lifecycle {
    /// Moves are accepted.
    #[default]
    Playing,
    /// The round is decided; waiting for continue or end.
    RoundEnded(RoundOutcome),
    /// The match is over; only a new match leaves this state.
    MatchEnded(MatchSummary),
}

impl Lifecycle {
    /// Returns true while moves are accepted.
    pub fn is_playing(&self) -> bool {
        matches!(self, Lifecycle::Playing)
    }

    /// Short label for status lines and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Lifecycle::Playing => "Playing",
            Lifecycle::RoundEnded(_) => "Round ended",
            Lifecycle::MatchEnded(_) => "Match ended",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_winner() {
        assert_eq!(RoundOutcome::Win(Player::O).winner(), Some(Player::O));
        assert_eq!(RoundOutcome::Draw.winner(), None);
        assert!(!RoundOutcome::InProgress.is_finished());
        assert!(RoundOutcome::Draw.is_finished());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(RoundOutcome::Win(Player::X).to_string(), "Player X wins");
        assert_eq!(MatchResult::Tie.to_string(), "It's a tie");
    }

    #[test]
    fn test_summary_picks_leader() {
        let mut scores = Scoreboard::new();
        scores.record_win(Player::O);
        let summary = MatchSummary::from_scores(scores);
        assert_eq!(summary.result, MatchResult::Winner(Player::O));
        assert_eq!(summary.scores.wins(Player::O), 1);
    }
}
