//! Stateless rendering of the game and the screen geometry shared with
//! mouse hit-testing.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line as TextLine,
    widgets::{Block, Borders, Paragraph},
};
use tictactoe::{Cell, Coord, GameState, GameStatus, Orientation};

/// Width of one board cell in terminal columns.
pub const CELL_WIDTH: u16 = 11;
/// Height of one board cell in terminal rows.
pub const CELL_HEIGHT: u16 = 5;
/// Thickness of the grid lines between cells.
const GRID: u16 = 1;
const BOARD_WIDTH: u16 = 3 * CELL_WIDTH + 2 * GRID;
const BOARD_HEIGHT: u16 = 3 * CELL_HEIGHT + 2 * GRID;

const X_GLYPH: [&str; 5] = [
    "\\     /",
    " \\   / ",
    "   X   ",
    " /   \\ ",
    "/     \\",
];
const O_GLYPH: [&str; 5] = [
    " .---. ",
    "/     \\",
    "|     |",
    "\\     /",
    " '---' ",
];

const GRID_STYLE: Style = Style::new().fg(Color::DarkGray);
const STRIKE_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// Where the board sits on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardGeometry {
    /// Top-left corner of the top-left cell.
    pub x: u16,
    /// Top-left corner of the top-left cell.
    pub y: u16,
}

impl BoardGeometry {
    /// Centers the board in `area`.
    pub fn centered(area: Rect) -> Self {
        Self {
            x: area.x + area.width.saturating_sub(BOARD_WIDTH) / 2,
            y: area.y + area.height.saturating_sub(BOARD_HEIGHT) / 2,
        }
    }

    /// Screen area of one cell.
    pub fn cell_rect(&self, coord: Coord) -> Rect {
        Rect::new(
            self.x + coord.col() as u16 * (CELL_WIDTH + GRID),
            self.y + coord.row() as u16 * (CELL_HEIGHT + GRID),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
    }

    /// The whole board including grid lines.
    pub fn outer(&self) -> Rect {
        Rect::new(self.x, self.y, BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Maps a terminal position to the cell under it.
    ///
    /// Grid lines and anything outside the board map to `None`.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Coord> {
        let dx = column.checked_sub(self.x)?;
        let dy = row.checked_sub(self.y)?;
        let (col, in_col) = (dx / (CELL_WIDTH + GRID), dx % (CELL_WIDTH + GRID));
        let (row, in_row) = (dy / (CELL_HEIGHT + GRID), dy % (CELL_HEIGHT + GRID));
        if in_col >= CELL_WIDTH || in_row >= CELL_HEIGHT {
            return None;
        }
        Coord::new(row as usize, col as usize)
    }
}

/// Screen regions produced by the last draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    /// Title line.
    pub title: Rect,
    /// The board.
    pub board: BoardGeometry,
    /// Status bar below the board.
    pub status: Rect,
}

impl ScreenLayout {
    /// Splits the terminal into title, board and status bar.
    pub fn new(area: Rect) -> Self {
        let [title, body, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(4),
        ])
        .areas(area);
        Self {
            title,
            board: BoardGeometry::centered(body),
            status,
        }
    }
}

/// Draws the whole screen and returns the layout used, for hit-testing.
pub fn draw(frame: &mut Frame, game: &GameState, cursor: Coord) -> ScreenLayout {
    let layout = ScreenLayout::new(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    draw_grid(frame, &layout.board);
    for coord in Coord::ALL {
        draw_cell(frame, &layout.board, game, coord, coord == cursor);
    }
    if let Some(line) = game.status().winning_line() {
        draw_strike(frame, &layout.board, line.orientation());
    }
    draw_status(frame, layout.status, game);

    layout
}

/// Renders `widget` clipped to the frame so small terminals never panic.
fn render_clipped(frame: &mut Frame, widget: Paragraph, area: Rect) {
    let area = area.intersection(frame.area());
    if !area.is_empty() {
        frame.render_widget(widget, area);
    }
}

fn draw_grid(frame: &mut Frame, board: &BoardGeometry) {
    let crossing: String = (0..BOARD_WIDTH)
        .map(|x| if x % (CELL_WIDTH + GRID) == CELL_WIDTH { '┼' } else { '─' })
        .collect();
    let outer = board.outer();

    for i in 1..3 {
        let y = outer.y + i * (CELL_HEIGHT + GRID) - GRID;
        let line = Paragraph::new(crossing.as_str()).style(GRID_STYLE);
        render_clipped(frame, line, Rect::new(outer.x, y, BOARD_WIDTH, GRID));
    }

    let bars: Vec<TextLine> = (0..CELL_HEIGHT).map(|_| TextLine::from("│")).collect();
    for row in 0..3 {
        for i in 1..3 {
            let x = outer.x + i * (CELL_WIDTH + GRID) - GRID;
            let y = outer.y + row * (CELL_HEIGHT + GRID);
            let bar = Paragraph::new(bars.clone()).style(GRID_STYLE);
            render_clipped(frame, bar, Rect::new(x, y, GRID, CELL_HEIGHT));
        }
    }
}

fn draw_cell(frame: &mut Frame, board: &BoardGeometry, game: &GameState, coord: Coord, cursor: bool) {
    let cell = game.board().get(coord);
    let on_winning_line = game
        .status()
        .winning_line()
        .is_some_and(|line| line.contains(coord));

    let (glyph, mut style) = match cell {
        Cell::Empty => (None, Style::default()),
        Cell::X => (Some(X_GLYPH), Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Cell::O => (Some(O_GLYPH), Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };
    if on_winning_line {
        style = style.fg(Color::Black).bg(Color::Green);
    } else if cursor && !game.status().is_over() {
        style = style.bg(Color::DarkGray);
    }

    let text: Vec<TextLine> = match glyph {
        Some(lines) => lines.iter().map(|l| TextLine::from(*l)).collect(),
        None => (0..CELL_HEIGHT).map(|_| TextLine::from("")).collect(),
    };
    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    render_clipped(frame, paragraph, board.cell_rect(coord));
}

/// Terminal positions crossed by the strike-through for a winning line, each
/// with the character drawn there. Runs edge to edge across the board.
fn strike_points(board: &BoardGeometry, orientation: Orientation) -> Vec<(u16, u16, char)> {
    let outer = board.outer();
    let (run, rise) = (BOARD_WIDTH - 1, BOARD_HEIGHT - 1);
    match orientation {
        Orientation::Horizontal(row) => {
            let y = outer.y + row as u16 * (CELL_HEIGHT + GRID) + CELL_HEIGHT / 2;
            (0..BOARD_WIDTH).map(|dx| (outer.x + dx, y, '━')).collect()
        }
        Orientation::Vertical(col) => {
            let x = outer.x + col as u16 * (CELL_WIDTH + GRID) + CELL_WIDTH / 2;
            (0..BOARD_HEIGHT).map(|dy| (x, outer.y + dy, '┃')).collect()
        }
        Orientation::Descending => (0..BOARD_HEIGHT)
            .map(|dy| (outer.x + dy * run / rise, outer.y + dy, '╲'))
            .collect(),
        Orientation::Ascending => (0..BOARD_HEIGHT)
            .map(|dy| (outer.x + (rise - dy) * run / rise, outer.y + dy, '╱'))
            .collect(),
    }
}

fn draw_strike(frame: &mut Frame, board: &BoardGeometry, orientation: Orientation) {
    let buffer = frame.buffer_mut();
    for (x, y, symbol) in strike_points(board, orientation) {
        // Off-screen points are skipped on small terminals.
        if let Some(cell) = buffer.cell_mut((x, y)) {
            cell.set_char(symbol).set_style(STRIKE_STYLE);
        }
    }
}

fn draw_status(frame: &mut Frame, area: Rect, game: &GameState) {
    let color = match game.status() {
        GameStatus::InProgress => Color::Yellow,
        GameStatus::Won { .. } => Color::Green,
        GameStatus::Drawn => Color::Magenta,
    };
    let text = vec![
        TextLine::from(game.status_message()).style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        TextLine::from("Click a cell or press 1-9 · arrows + Enter · R restart · Q quit")
            .style(GRID_STYLE),
    ];
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    render_clipped(frame, status, area);
}
