//! Stateless UI rendering for tic-tac-toe.

use crate::app::App;
use crate::config::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe::{GameView, Mark, Position};

const HELP: &str = "←↑↓→ move · Enter/Space or 1-9 play · r reset · q quit";

/// Renders the whole screen: title, board, status and key help.
pub fn draw(frame: &mut Frame, app: &App, palette: &Palette) {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Tic Tac Toe",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "A minimal game for two players",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], &view, app.cursor(), palette);

    let status_style = match view.status.next_mark() {
        Some(mark) => Style::default().fg(mark_color(mark, palette)),
        None => Style::default()
            .fg(palette.highlight)
            .add_modifier(Modifier::BOLD),
    };
    let status = Paragraph::new(view.status_message())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, cursor: Position, palette: &Palette) {
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

    for row in 0..3 {
        draw_row(frame, rows[row * 2], view, cursor, palette, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    view: &GameView,
    cursor: Position,
    palette: &Palette,
    row: usize,
) {
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

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], view, cursor, palette, pos);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    view: &GameView,
    cursor: Position,
    palette: &Palette,
    pos: Position,
) {
    let idx = pos.to_index();
    let (symbol, mut style) = match view.cells[idx] {
        None => (format!("{}", idx + 1), Style::default().fg(Color::DarkGray)),
        Some(mark) => (
            mark.to_string(),
            Style::default()
                .fg(mark_color(mark, palette))
                .add_modifier(Modifier::BOLD),
        ),
    };

    if view.is_highlighted(pos) {
        style = style.bg(palette.highlight).fg(Color::Black);
    } else if view.is_over() && view.cells[idx].is_none() {
        style = style.add_modifier(Modifier::DIM);
    }
    if pos == cursor && !view.is_over() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Pad to the cell height so the background fills the square.
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
        Line::from(""),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn mark_color(mark: Mark, palette: &Palette) -> Color {
    match mark {
        Mark::X => palette.x,
        Mark::O => palette.o,
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
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
