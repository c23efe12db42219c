use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::{App, Hit};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Prev,
    Next,
    /// Jump to the n-th pagination dot (0-based)
    Page(usize),
    FocusLeft,
    FocusRight,
    /// Like the focused card
    Like,
    /// Like the card in a track slot
    LikeSlot(usize),
    /// Pointer moved to a cell
    Hover { column: u16, row: u16 },
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,

        // Paging
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::Prev,
        (KeyCode::Left, KeyModifiers::NONE) => Action::Prev,
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::Next,
        (KeyCode::Right, KeyModifiers::NONE) => Action::Next,

        // Pagination dots
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::Page(c as usize - '1' as usize)
        }

        // Focus within the visible window
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::FocusLeft,
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::FocusRight,
        (KeyCode::BackTab, _) => Action::FocusLeft,
        (KeyCode::Tab, KeyModifiers::NONE) => Action::FocusRight,

        // Like
        (KeyCode::Char(' '), KeyModifiers::NONE) => Action::Like,
        (KeyCode::Enter, KeyModifiers::NONE) => Action::Like,

        _ => Action::None,
    }
}

/// Handle a mouse event against the regions drawn last frame
pub fn handle_mouse_event(mouse: MouseEvent, app: &App) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match app.hit_test(mouse.column, mouse.row) {
            Some(Hit::Prev) => Action::Prev,
            Some(Hit::Next) => Action::Next,
            Some(Hit::Dot(page)) => Action::Page(page),
            Some(Hit::Card(slot)) => Action::LikeSlot(slot),
            _ => Action::None,
        },
        MouseEventKind::Moved => Action::Hover {
            column: mouse.column,
            row: mouse.row,
        },
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => Action::Next,
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => Action::Prev,
        _ => Action::None,
    }
}
