//! Application state and key handling.

use std::time::Instant;

use crossterm::event::KeyCode;
use tracing::{debug, info};

use super::input::{digit_to_index, move_cursor};
use crate::config::MatchConfig;
use crate::games::tictactoe::{GameState, Lifecycle, Position, RoundOutcome};

/// Main application state.
///
/// Wraps the [`GameState`] with the cursor and the pending draw
/// auto-continue deadline. The event loop redraws after every call.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    config: MatchConfig,
    draw_deadline: Option<Instant>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: MatchConfig) -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            config,
            draw_deadline: None,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the active configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) {
        debug!(?key, "Handling key");

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index(), now),
            KeyCode::Char('[') => self.step_history(-1),
            KeyCode::Char(']') => self.step_history(1),
            KeyCode::Home => {
                self.game.jump_to_move(0);
            }
            KeyCode::End => {
                let latest = self.game.history().latest_index();
                self.game.jump_to_move(latest);
            }
            KeyCode::Char('r') => {
                self.draw_deadline = None;
                self.game.restart_round();
            }
            KeyCode::Char('c') => {
                self.draw_deadline = None;
                self.game.continue_after_round();
            }
            KeyCode::Char('e') => {
                self.draw_deadline = None;
                self.game.end_match();
            }
            KeyCode::Char('n') => {
                self.game.new_match();
            }
            other => {
                if let Some(index) = digit_to_index(other) {
                    self.cursor = Position::from_index(index).unwrap_or(self.cursor);
                    self.play(index, now);
                }
            }
        }
    }

    /// Advances timers; continues a drawn round once its delay has passed.
    pub fn tick(&mut self, now: Instant) {
        let Some(deadline) = self.draw_deadline else {
            return;
        };
        if now < deadline {
            return;
        }
        self.draw_deadline = None;
        if self.game.lifecycle() == &Lifecycle::RoundEnded(RoundOutcome::Draw) {
            info!("Auto-continuing after draw");
            self.game.continue_after_round();
        }
    }

    /// Status line for the current lifecycle.
    pub fn status_line(&self) -> String {
        match self.game.lifecycle() {
            Lifecycle::Playing => {
                let history = self.game.history();
                if history.is_at_latest() {
                    format!("Next player: {}", self.game.turn())
                } else {
                    format!(
                        "Viewing move {} of {}. Next player: {}",
                        history.current_index(),
                        history.latest_index(),
                        self.game.turn()
                    )
                }
            }
            Lifecycle::RoundEnded(RoundOutcome::Draw) if self.draw_deadline.is_some() => {
                "It's a draw! Next round starts shortly.".to_string()
            }
            Lifecycle::RoundEnded(outcome) => format!("{}!", outcome),
            Lifecycle::MatchEnded(summary) => format!("{}!", summary.result),
        }
    }

    fn play(&mut self, index: usize, now: Instant) {
        if !self.game.apply_move(index) {
            return;
        }
        if self.game.lifecycle() == &Lifecycle::RoundEnded(RoundOutcome::Draw) {
            self.draw_deadline = self.config.draw_auto_continue().map(|delay| now + delay);
        }
    }

    fn step_history(&mut self, delta: isize) {
        let current = self.game.history().current_index();
        if let Some(target) = current.checked_add_signed(delta) {
            self.game.jump_to_move(target);
        }
    }
}
