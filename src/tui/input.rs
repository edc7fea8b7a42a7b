//! Keyboard and mouse input mapping.
//!
//! Turns crossterm events into [`Action`]s. Mapping is pure so it can be
//! tested without a terminal; the app applies the actions.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Rows moved per mouse wheel notch.
pub const WHEEL_STEP: i64 = 3;

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollBy(i64),
    PageDown,
    PageUp,
    ScrollToTop,
    ScrollToBottom,
    /// Smooth scroll to the section at this navbar index
    JumpTo(usize),
    ToggleTheme,
    ToggleMenu,
    ToggleHelp,
    /// Start editing the contact form
    FocusForm,
    /// Stop editing the contact form
    Blur,
    NextField,
    PrevField,
    Type(char),
    Backspace,
    Submit,
    Click { column: u16, row: u16 },
    Hover { column: u16, row: u16 },
    Resize { width: u16, height: u16 },
    None,
}

/// Map any terminal event.
pub fn map_event(event: Event, editing: bool) -> Action {
    match event {
        Event::Key(key) => map_key(key, editing),
        Event::Mouse(mouse) => map_mouse(mouse),
        Event::Resize(width, height) => Action::Resize { width, height },
        _ => Action::None,
    }
}

/// Map a key press. While `editing`, printable keys go into the form.
pub fn map_key(key: KeyEvent, editing: bool) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }
    if editing {
        return map_editing_key(key);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Down | KeyCode::Char('j') => Action::ScrollBy(1),
        KeyCode::Up | KeyCode::Char('k') => Action::ScrollBy(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::Home | KeyCode::Char('g') => Action::ScrollToTop,
        KeyCode::End | KeyCode::Char('G') => Action::ScrollToBottom,
        KeyCode::Char(c @ '1'..='9') => Action::JumpTo((c as u8 - b'1') as usize),
        KeyCode::Char('t') => Action::ToggleTheme,
        KeyCode::Char('m') => Action::ToggleMenu,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Char('c') | KeyCode::Enter => Action::FocusForm,
        _ => Action::None,
    }
}

fn map_editing_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::Blur,
        KeyCode::Tab | KeyCode::Down => Action::NextField,
        KeyCode::BackTab | KeyCode::Up => Action::PrevField,
        KeyCode::Enter => Action::Submit,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Char(c) => Action::Type(c),
        _ => Action::None,
    }
}

/// Map a mouse event.
pub fn map_mouse(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollDown => Action::ScrollBy(WHEEL_STEP),
        MouseEventKind::ScrollUp => Action::ScrollBy(-WHEEL_STEP),
        MouseEventKind::Down(MouseButton::Left) => Action::Click {
            column: mouse.column,
            row: mouse.row,
        },
        MouseEventKind::Moved => Action::Hover {
            column: mouse.column,
            row: mouse.row,
        },
        _ => Action::None,
    }
}
