//! Terminal UI rendering with ratatui

use brickfall::{Board, Game, GameState, Piece, TetrominoType};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const BLOCK: &str = "██";
const EMPTY: &str = "  ";

/// Terminal colour for a board cell value
fn cell_color(value: u8) -> Option<Color> {
    TetrominoType::from_color(value).map(|t| match t {
        TetrominoType::I => Color::Cyan,
        TetrominoType::L => Color::Rgb(255, 165, 0), // Orange
        TetrominoType::J => Color::Blue,
        TetrominoType::O => Color::Yellow,
        TetrominoType::S => Color::Green,
        TetrominoType::Z => Color::Red,
        TetrominoType::T => Color::Magenta,
    })
}

fn cell_span(value: u8) -> Span<'static> {
    match cell_color(value) {
        Some(color) => Span::styled(BLOCK, Style::default().fg(color)),
        None => Span::raw(EMPTY),
    }
}

/// Render the board, next piece and status overlay
pub fn render_game(frame: &mut Frame, game: &Game) {
    let area = frame.area();
    let board = game.board();

    let board_width = board.width() as u16 * 2 + 2;
    let board_height = board.height() as u16 + 2;
    let side_width = 14;
    let game_area = center_rect(area, board_width + side_width, board_height);

    let main_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(board_width), Constraint::Length(side_width)])
        .split(game_area);

    render_board(frame, main_layout[0], board);

    let right_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(4)])
        .split(main_layout[1]);

    render_next(frame, right_layout[0], game.next_piece());
    render_help(frame, right_layout[1]);

    match game.state() {
        GameState::NoGame => render_overlay(frame, area, "BRICKFALL", "Press Enter to start"),
        GameState::Paused => render_overlay(frame, area, "PAUSED", "Press P to resume"),
        GameState::GameOver => render_overlay(frame, area, "GAME OVER", "Press Enter to retry"),
        GameState::InGame => {}
    }
}

/// Center a rect within another rect
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

fn render_board(frame: &mut Frame, area: Rect, board: &Board) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // the active piece is already part of the grid
    let lines: Vec<Line> = board
        .rows()
        .iter()
        .map(|row| Line::from(row.iter().map(|&c| cell_span(c)).collect::<Vec<_>>()))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_next(frame: &mut Frame, area: Rect, piece: &Piece) {
    let block = Block::default()
        .title(" NEXT ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // skip empty template rows so the preview sits snugly
    let lines: Vec<Line> = piece
        .cells()
        .iter()
        .filter(|row| row.iter().any(|&c| c > 0))
        .map(|row| Line::from(row.iter().map(|&c| cell_span(c)).collect::<Vec<_>>()))
        .collect();

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let dim = Style::default().fg(Color::DarkGray);
    let text = vec![
        Line::styled("←→ move", dim),
        Line::styled("↓  down", dim),
        Line::styled("↑  drop", dim),
        Line::styled("␣ x rotate", dim),
        Line::styled("p  pause", dim),
        Line::styled("q  quit", dim),
    ];
    frame.render_widget(Paragraph::new(text), area);
}

fn render_overlay(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let popup_width = 26u16;
    let popup_height = 5u16;
    let popup_area = center_rect(area, popup_width, popup_height);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let text = vec![
        Line::styled(title, Style::default().fg(Color::Yellow).bold()),
        Line::raw(""),
        Line::styled(subtitle, Style::default().fg(Color::Gray)),
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
