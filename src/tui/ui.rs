//! Stateless UI rendering for the tic-tac-toe grid.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use noughts::{Cell, Mark};

use super::app::App;

/// Renders the full frame: title, board grid, and status line.
pub fn draw(frame: &mut Frame, app: &App) {
    let (title_area, board_area, status_area) = screen_chunks(frame.area());

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    draw_board(frame, board_area, app);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, status_area);
}

/// Maps a terminal coordinate to a cell index, if it falls on the grid.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<usize> {
    cell_rects(area)
        .iter()
        .position(|rect| rect.contains(Position { x: column, y: row }))
}

fn screen_chunks(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Screen rectangles of the nine cells, row-major. Built from the same
/// layout splits as [`draw_board`] so hit-testing and rendering agree.
fn cell_rects(area: Rect) -> [Rect; 9] {
    let (_, board_chunk, _) = screen_chunks(area);
    let board_area = center_rect(board_chunk, 40, 11);
    let rows = row_areas(board_area);
    let mut rects = [Rect::default(); 9];
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = col_areas(row_area);
        for (col, col_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            rects[row * 3 + col] = col_area;
        }
    }
    rects
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);
    let rows = row_areas(board_area);

    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = col_areas(row_area);
        draw_separator_vertical(frame, cols[1]);
        draw_separator_vertical(frame, cols[3]);
        for (col, col_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            draw_cell(frame, col_area, app, row * 3 + col);
        }
    }
}

fn row_areas(board_area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area)
}

fn col_areas(row_area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(row_area)
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, index: usize) {
    // Empty cells hint at their digit key; X blue, O red, winning line green.
    let (symbol, style) = match app.cells()[index] {
        Cell::Empty => (
            format!(" {} ", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Marked(mark) => {
            let color = if app.is_winning(index) {
                Color::Green
            } else if mark == Mark::X {
                Color::Blue
            } else {
                Color::Red
            };
            (
                format!(" {mark} "),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
    };

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
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
