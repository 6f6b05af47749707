//! Translation of raw terminal events into game actions.

use crate::ui::ScreenLayout;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tictactoe::{Coord, GameEvent};

/// Something the loop should do in response to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forward an event to the game.
    Game(GameEvent),
    /// Move the keyboard cursor by the given row and column steps.
    MoveCursor(isize, isize),
    /// Leave the game.
    Quit,
}

fn click(coord: Coord) -> Action {
    Action::Game(GameEvent::CellClicked {
        row: coord.row(),
        col: coord.col(),
    })
}

/// Maps a terminal event to an action, or `None` if it means nothing here.
///
/// Mouse presses are hit-tested against the layout from the last draw;
/// presses outside a cell are dropped.
pub fn translate(event: &Event, layout: &ScreenLayout, cursor: Coord) -> Option<Action> {
    match event {
        Event::Mouse(mouse) => translate_mouse(mouse, layout),
        Event::Key(key) if key.kind == KeyEventKind::Press => translate_key(key, cursor),
        _ => None,
    }
}

fn translate_mouse(mouse: &MouseEvent, layout: &ScreenLayout) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            layout.board.cell_at(mouse.column, mouse.row).map(click)
        }
        _ => None,
    }
}

fn translate_key(key: &KeyEvent, cursor: Coord) -> Option<Action> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r' | 'R') => Some(Action::Game(GameEvent::ResetRequested)),
        KeyCode::Char(digit @ '1'..='9') => {
            let index = digit.to_digit(10)? as usize - 1;
            Coord::from_index(index).map(click)
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(click(cursor)),
        KeyCode::Up => Some(Action::MoveCursor(-1, 0)),
        KeyCode::Down => Some(Action::MoveCursor(1, 0)),
        KeyCode::Left => Some(Action::MoveCursor(0, -1)),
        KeyCode::Right => Some(Action::MoveCursor(0, 1)),
        _ => None,
    }
}
