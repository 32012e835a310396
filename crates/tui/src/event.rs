//! Event polling and key mappings.
//!
//! Terminal events are turned into [`Message`]s here; nothing else in the
//! crate looks at crossterm input types.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use projhub_core::{Direction, Message, ViewKind};

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Ok(None)` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling or reading the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => key_to_message(*key),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Left-button presses become `ClickAt`; every other mouse event is dropped.
fn mouse_to_message(mouse: &MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::ClickAt {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// Converts a terminal key event to an application message.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `q`, `Ctrl+C` | Quit |
/// | `1` / `2` / `3` | Board / Table / Roadmap |
/// | `h`, `Left` | Move left |
/// | `j`, `Down` | Move down |
/// | `k`, `Up` | Move up |
/// | `l`, `Right` | Move right |
/// | `g`, `Home` | First item of the group |
/// | `G`, `End` | Last item of the group |
/// | `o`, `Enter` | Toggle item details |
/// | `?` | Toggle help |
/// | `Esc` | Escape (close an overlay) |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Message::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Message::Quit),
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Char('?') => Some(Message::ToggleHelp),
        KeyCode::Enter | KeyCode::Char('o') => Some(Message::ToggleDetail),

        KeyCode::Left | KeyCode::Char('h') => Some(Message::MoveCursor(Direction::Left)),
        KeyCode::Down | KeyCode::Char('j') => Some(Message::MoveCursor(Direction::Down)),
        KeyCode::Up | KeyCode::Char('k') => Some(Message::MoveCursor(Direction::Up)),
        KeyCode::Right | KeyCode::Char('l') => Some(Message::MoveCursor(Direction::Right)),
        KeyCode::Home | KeyCode::Char('g') => Some(Message::JumpToFirst),
        KeyCode::End | KeyCode::Char('G') => Some(Message::JumpToLast),

        KeyCode::Char(ch) => ViewKind::from_shortcut(ch).map(Message::SwitchView),
        _ => None,
    }
}
