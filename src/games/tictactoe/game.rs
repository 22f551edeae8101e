//! Game state machine for a match of tic-tac-toe rounds.
//!
//! `GameState` owns the snapshot history, the scoreboard and the
//! lifecycle. It is a plain value: callers invoke a mutator and then
//! redraw from the accessors. Every mutator is total; an input that does
//! not apply in the current state leaves the game untouched.

use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::action::{Move, MoveError};
use super::history::History;
use super::invariants::{GameInvariants, InvariantSet};
use super::phases::{Lifecycle, MatchSummary, RoundOutcome};
use super::rules::check_winner;
use super::scoreboard::Scoreboard;
use super::{Board, Player, Position};

/// Complete game state: history, scores and lifecycle.
///
/// Deserializing checks the game invariants and that the lifecycle
/// agrees with the newest board, so a restored state is as safe to drive
/// as one built by play.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "GameStateRecord")]
pub struct GameState {
    /// Board snapshots and the viewed position.
    pub(super) history: History,
    /// Round wins per player.
    pub(super) scoreboard: Scoreboard,
    /// Round/match phase.
    pub(super) lifecycle: Lifecycle,
}

impl GameState {
    /// Creates a new match: empty board, X to move, scores 0/0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            scoreboard: Scoreboard::new(),
            lifecycle: Lifecycle::Playing,
        }
    }

    /// Plays `indices` in order from a fresh game, skipping rejected moves.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Self {
        let mut game = Self::new();
        for &index in indices {
            game.apply_move(index);
        }
        game
    }

    /// The viewed board snapshot.
    pub fn board(&self) -> &Board {
        self.history.current()
    }

    /// Player to move on the viewed board.
    pub fn turn(&self) -> Player {
        self.board().turn()
    }

    /// Outcome of the viewed board.
    pub fn outcome(&self) -> RoundOutcome {
        check_winner(self.board())
    }

    /// Moves played, oldest first, including any ahead of the view.
    pub fn moves(&self) -> Vec<Move> {
        self.history.moves()
    }

    /// Empty positions on the viewed board.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(self.board())
    }

    /// Places the active player's mark at `index`.
    ///
    /// Returns the outcome of the new board, or the reason nothing
    /// changed.
    #[instrument(skip(self), fields(turn = %self.turn(), lifecycle = self.lifecycle.label()))]
    pub fn try_apply_move(&mut self, index: usize) -> Result<RoundOutcome, MoveError> {
        if !self.lifecycle.is_playing() {
            return Err(MoveError::RoundNotInPlay);
        }
        let position = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        if !self.board().is_empty(index) {
            return Err(MoveError::CellOccupied(position));
        }

        let player = self.turn();
        let next = self.board().with_mark(index, player);
        self.history.push(next);

        let outcome = check_winner(self.board());
        match outcome {
            RoundOutcome::Win(winner) => {
                self.scoreboard.record_win(winner);
                self.lifecycle = Lifecycle::RoundEnded(outcome);
                info!(%winner, x = self.scoreboard.wins(Player::X), o = self.scoreboard.wins(Player::O), "Round won");
            }
            RoundOutcome::Draw => {
                self.lifecycle = Lifecycle::RoundEnded(outcome);
                info!("Round drawn");
            }
            RoundOutcome::InProgress => {
                debug!(%player, %position, "Move applied");
            }
        }

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "game invariants violated after playing {index}"
        );

        Ok(outcome)
    }

    /// Places the active player's mark at `index`, ignoring invalid input.
    ///
    /// Out-of-range indices, occupied cells and moves outside `Playing`
    /// are no-ops. Returns whether the move was applied.
    pub fn apply_move(&mut self, index: usize) -> bool {
        match self.try_apply_move(index) {
            Ok(_) => true,
            Err(e) => {
                debug!(index, reason = %e, "Move ignored");
                false
            }
        }
    }

    /// Clears the board for a fresh round, keeping scores.
    ///
    /// No-op once the match has ended; use [`GameState::new_match`].
    #[instrument(skip(self))]
    pub fn restart_round(&mut self) -> bool {
        if matches!(self.lifecycle, Lifecycle::MatchEnded(_)) {
            debug!("Restart ignored after match end");
            return false;
        }
        self.history.reset();
        self.lifecycle = Lifecycle::Playing;
        debug!("Round restarted");
        true
    }

    /// Starts the next round after a decided one.
    #[instrument(skip(self))]
    pub fn continue_after_round(&mut self) -> bool {
        if !matches!(self.lifecycle, Lifecycle::RoundEnded(_)) {
            debug!(lifecycle = self.lifecycle.label(), "Continue ignored");
            return false;
        }
        self.restart_round()
    }

    /// Ends the match, freezing the scores into a summary.
    #[instrument(skip(self))]
    pub fn end_match(&mut self) -> bool {
        if !matches!(self.lifecycle, Lifecycle::RoundEnded(_)) {
            debug!(lifecycle = self.lifecycle.label(), "End match ignored");
            return false;
        }
        let summary = MatchSummary::from_scores(self.scoreboard);
        info!(result = %summary.result, "Match ended");
        self.lifecycle = Lifecycle::MatchEnded(summary);
        true
    }

    /// Starts a new match from a finished one: scores 0/0, empty board.
    #[instrument(skip(self))]
    pub fn new_match(&mut self) -> bool {
        if !matches!(self.lifecycle, Lifecycle::MatchEnded(_)) {
            debug!(lifecycle = self.lifecycle.label(), "New match ignored");
            return false;
        }
        self.scoreboard.reset();
        self.history.reset();
        self.lifecycle = Lifecycle::Playing;
        info!("New match started");
        true
    }

    /// Views snapshot `n` without changing history.
    ///
    /// Allowed while playing and after a round is decided, so the finished
    /// round can be reviewed; moves stay blocked until the next round. The
    /// next move made from an earlier snapshot discards the later ones.
    #[instrument(skip(self))]
    pub fn jump_to_move(&mut self, n: usize) -> bool {
        if matches!(self.lifecycle, Lifecycle::MatchEnded(_)) {
            debug!("Jump ignored after match end");
            return false;
        }
        let moved = self.history.jump_to(n);
        if moved {
            debug!(view = n, latest = self.history.latest_index(), "History view moved");
        }
        moved
    }
}

/// Why a serialized game state was rejected.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The snapshots break one or more game invariants.
    #[display("Invariant violated: {}", _0)]
    Invariants(String),
    /// A round was already decided before the newest snapshot.
    #[display("Snapshot {} ends the round but later moves follow", _0)]
    PlayedPastEnd(usize),
    /// The lifecycle disagrees with the newest board.
    #[display("Lifecycle '{}' does not fit a board that is {}", lifecycle, outcome)]
    LifecycleMismatch {
        /// Stored lifecycle label.
        lifecycle: &'static str,
        /// Outcome of the newest board.
        outcome: RoundOutcome,
    },
    /// The frozen match summary differs from the scoreboard.
    #[display("Match summary does not match the scoreboard")]
    SummaryMismatch,
}

impl std::error::Error for StateError {}

/// Wire form of [`GameState`], checked before use.
#[derive(Deserialize)]
struct GameStateRecord {
    history: History,
    scoreboard: Scoreboard,
    lifecycle: Lifecycle,
}

impl TryFrom<GameStateRecord> for GameState {
    type Error = StateError;

    fn try_from(record: GameStateRecord) -> Result<Self, Self::Error> {
        let game = Self {
            history: record.history,
            scoreboard: record.scoreboard,
            lifecycle: record.lifecycle,
        };

        GameInvariants::check_all(&game).map_err(|violations| {
            StateError::Invariants(
                violations
                    .iter()
                    .map(|violation| violation.description.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })?;

        // The consistency invariant guarantees at least the empty board.
        let Some((newest, earlier)) = game.history.snapshots().split_last() else {
            return Err(StateError::Invariants("History has no snapshots".to_string()));
        };
        if let Some(index) = earlier
            .iter()
            .position(|board| check_winner(board).is_finished())
        {
            return Err(StateError::PlayedPastEnd(index));
        }

        let outcome = check_winner(newest);
        let fits = match &game.lifecycle {
            Lifecycle::Playing => !outcome.is_finished(),
            Lifecycle::RoundEnded(ended) => outcome.is_finished() && *ended == outcome,
            Lifecycle::MatchEnded(_) => outcome.is_finished(),
        };
        if !fits {
            return Err(StateError::LifecycleMismatch {
                lifecycle: game.lifecycle.label(),
                outcome,
            });
        }
        let summary_fits = match &game.lifecycle {
            Lifecycle::MatchEnded(summary) => *summary == MatchSummary::from_scores(game.scoreboard),
            Lifecycle::Playing | Lifecycle::RoundEnded(_) => true,
        };
        if !summary_fits {
            return Err(StateError::SummaryMismatch);
        }

        Ok(game)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.turn(), Player::X);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.lifecycle(), &Lifecycle::Playing);
        assert_eq!(game.scoreboard(), &Scoreboard::new());
    }

    #[test]
    fn test_try_apply_move_reports_reason() {
        let mut game = GameState::new();
        assert_eq!(game.try_apply_move(9), Err(MoveError::OutOfRange(9)));
        assert_eq!(game.try_apply_move(0), Ok(RoundOutcome::InProgress));
        assert_eq!(
            game.try_apply_move(0),
            Err(MoveError::CellOccupied(Position::TopLeft))
        );
    }

    #[test]
    fn test_moves_rejected_after_round_ends() {
        let mut game = GameState::replay(&[0, 3, 1, 4, 2]);
        assert_eq!(game.lifecycle(), &Lifecycle::RoundEnded(RoundOutcome::Win(Player::X)));
        let before = game.clone();
        assert_eq!(game.try_apply_move(8), Err(MoveError::RoundNotInPlay));
        assert_eq!(game, before);
    }

    #[test]
    fn test_jump_then_play_truncates() {
        let mut game = GameState::replay(&[0, 4, 8, 2]);
        assert!(game.jump_to_move(1));
        assert_eq!(game.turn(), Player::O);
        assert!(game.apply_move(5));
        assert_eq!(game.history().len(), 3);
        assert_eq!(
            game.moves(),
            vec![
                Move::new(Player::X, Position::TopLeft),
                Move::new(Player::O, Position::MiddleRight),
            ]
        );
    }

    #[test]
    fn test_deserialize_rejects_moves_after_decided_round() {
        let mut game = GameState::replay(&[0, 4, 1, 7, 2]);
        let extra = game.board().with_mark(8, Player::O);
        game.history.push(extra);
        let json = serde_json::to_string(&game).expect("serializable");
        let err = serde_json::from_str::<GameState>(&json).unwrap_err();
        assert!(err.to_string().contains("later moves follow"), "{}", err);
    }

    #[test]
    fn test_deserialize_rejects_broken_invariants() {
        let mut game = GameState::replay(&[0]);
        let twice = game.board().with_mark(4, Player::X);
        game.history.push(twice);
        let json = serde_json::to_string(&game).expect("serializable");
        let err = serde_json::from_str::<GameState>(&json).unwrap_err();
        assert!(err.to_string().contains("Invariant violated"), "{}", err);
    }

    #[test]
    fn test_jump_out_of_range_is_noop() {
        let mut game = GameState::replay(&[0, 4]);
        let before = game.clone();
        assert!(!game.jump_to_move(5));
        assert_eq!(game, before);
    }
}
