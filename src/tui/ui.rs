//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use super::app::App;
use crate::games::tictactoe::{
    BOARD_SIZE, Board, Cell, Lifecycle, MatchResult, MatchSummary, Player, Position, RoundOutcome,
};

const HELP: &str = "arrows/1-9 move  enter play  [ ] history  r restart  q quit";

/// Renders the whole screen for the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board and side panel
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    if *app.config().show_history() {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(42), Constraint::Length(30)])
            .split(chunks[1]);
        draw_board(frame, body[0], app.game().board(), app.cursor());
        draw_side_panel(frame, body[1], app);
    } else {
        draw_board(frame, chunks[1], app.game().board(), app.cursor());
    }

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    match app.game().lifecycle() {
        Lifecycle::Playing => {}
        Lifecycle::RoundEnded(outcome) => draw_round_popup(frame, *outcome),
        Lifecycle::MatchEnded(summary) => draw_match_popup(frame, summary),
    }
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..BOARD_SIZE {
        draw_row(frame, rows[row * 2], board, cursor, row);
        if row + 1 < BOARD_SIZE {
            let sep = Paragraph::new("─".repeat(board_area.width as usize))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..BOARD_SIZE {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], board, cursor, pos);
        }
        if col + 1 < BOARD_SIZE {
            let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, pos: Position) {
    let (symbol, base_style) = match board.cell(pos) {
        Cell::Empty => (" · ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(player) => (
            match player {
                Player::X => " X ",
                Player::O => " O ",
            },
            player_style(player),
        ),
    };

    let style = if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center the mark in the three-line cell.
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
        Line::from(""),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_side_panel(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    let scores = app.game().scoreboard();
    let score_lines = vec![
        Line::from(Span::styled(
            format!("Player X: {}", scores.wins(Player::X)),
            player_style(Player::X),
        )),
        Line::from(Span::styled(
            format!("Player O: {}", scores.wins(Player::O)),
            player_style(Player::O),
        )),
    ];
    let scoreboard = Paragraph::new(score_lines)
        .block(Block::default().title("Scores").borders(Borders::ALL));
    frame.render_widget(scoreboard, chunks[0]);

    let viewed = app.game().history().current_index();
    let start = ListItem::new("0. Game start");
    let items: Vec<ListItem> = std::iter::once(start)
        .chain(
            app.game()
                .moves()
                .iter()
                .enumerate()
                .map(|(i, action)| ListItem::new(format!("{}. {}", i + 1, action))),
        )
        .enumerate()
        .map(|(i, item)| {
            if i == viewed {
                item.style(Style::default().add_modifier(Modifier::REVERSED))
            } else {
                item
            }
        })
        .collect();
    let moves = List::new(items).block(Block::default().title("Moves").borders(Borders::ALL));
    frame.render_widget(moves, chunks[1]);
}

fn draw_round_popup(frame: &mut Frame, outcome: RoundOutcome) {
    let headline = match outcome {
        RoundOutcome::Win(player) => {
            Line::from(Span::styled(format!("Player {} Wins!", player), player_style(player)))
        }
        RoundOutcome::Draw | RoundOutcome::InProgress => Line::from("It's a Draw!"),
    };
    let lines = vec![
        headline,
        Line::from(""),
        Line::from("[c] Continue    [e] End Game"),
    ];
    draw_popup(frame, "Game Result", lines);
}

fn draw_match_popup(frame: &mut Frame, summary: &MatchSummary) {
    let announcement = match summary.result {
        MatchResult::Winner(player) => format!("Player {} Wins the Game!", player),
        MatchResult::Tie => "It's a Tie!".to_string(),
    };
    let lines = vec![
        Line::from(Span::styled(
            format!("Player X: {} wins", summary.scores.wins(Player::X)),
            player_style(Player::X),
        )),
        Line::from(Span::styled(
            format!("Player O: {} wins", summary.scores.wins(Player::O)),
            player_style(Player::O),
        )),
        Line::from(""),
        Line::from(Span::styled(announcement, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("[n] New Game    [q] Quit"),
    ];
    draw_popup(frame, "Final Results", lines);
}

fn draw_popup(frame: &mut Frame, title: &str, lines: Vec<Line>) {
    let height = lines.len() as u16 + 2;
    let area = center_rect(frame.area(), 36, height);
    frame.render_widget(Clear, area);
    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(title.to_string()).borders(Borders::ALL));
    frame.render_widget(popup, area);
}

fn player_style(player: Player) -> Style {
    let color = match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
