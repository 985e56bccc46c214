//! UI-agnostic input events and the terminal key mapping.

use crate::geometry::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Discrete input events delivered to the session. The session never polls
/// raw devices; the driver maps keys here and forwards the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Direction(Direction),
    /// P or Esc: pause while playing, resume while paused.
    PauseToggle,
    /// Space or Enter: start from the menu, dismiss an end screen.
    Confirm,
    MuteToggle,
    /// Handled by the driver, not the session.
    Quit,
}

/// Map a terminal key event to an input event. Unbound keys yield `None`.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    // Crossterm on Windows reports both press and release.
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(InputEvent::Direction(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InputEvent::Direction(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(InputEvent::Direction(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(InputEvent::Direction(Direction::Right))
        }
        KeyCode::Char(' ') | KeyCode::Enter => Some(InputEvent::Confirm),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => Some(InputEvent::PauseToggle),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(InputEvent::MuteToggle),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),
        _ => None,
    }
}
