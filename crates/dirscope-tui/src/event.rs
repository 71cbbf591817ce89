//! Key events and the key source the session reads from.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Action requested by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // Selection
    MoveUp,
    MoveDown,
    JumpToTop,
    JumpToBottom,
    PageUp,
    PageDown,

    // Directory navigation
    Enter,
    GoToParent,
    Rescan,

    // Application
    Quit,

    /// Key without a binding, or a redraw request.
    None,
}

impl KeyAction {
    /// Convert a key event to an action.
    pub fn from_key_event(event: KeyEvent) -> Self {
        match (event.code, event.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => KeyAction::PageUp,
            (KeyCode::Char('d'), KeyModifiers::CONTROL) => KeyAction::PageDown,
            (_, m) if m.contains(KeyModifiers::CONTROL) => KeyAction::None,

            (KeyCode::Char('q' | 'Q'), _) => KeyAction::Quit,

            // Selection - arrows and vim style
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => KeyAction::MoveUp,
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => KeyAction::MoveDown,
            (KeyCode::Home, _) | (KeyCode::Char('g'), _) => KeyAction::JumpToTop,
            (KeyCode::End, _) | (KeyCode::Char('G'), _) => KeyAction::JumpToBottom,
            (KeyCode::PageUp, _) => KeyAction::PageUp,
            (KeyCode::PageDown, _) => KeyAction::PageDown,

            // Directory navigation
            (KeyCode::Enter, _) | (KeyCode::Right, _) | (KeyCode::Char('l'), _) => {
                KeyAction::Enter
            }
            (KeyCode::Backspace, _)
            | (KeyCode::Left, _)
            | (KeyCode::Char('h'), _)
            | (KeyCode::Char('-'), _) => KeyAction::GoToParent,
            (KeyCode::Char('r' | 'R'), _) => KeyAction::Rescan,

            _ => KeyAction::None,
        }
    }
}

/// Key binding for display in the header.
pub struct KeyBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

/// Bindings shown in the header hint line.
pub fn get_key_hints() -> Vec<KeyBinding> {
    vec![
        KeyBinding { keys: "q", description: "quit" },
        KeyBinding { keys: "↑/↓", description: "move" },
        KeyBinding { keys: "Enter", description: "enter dir" },
        KeyBinding { keys: "Backspace", description: "up" },
        KeyBinding { keys: "r", description: "rescan" },
    ]
}

/// Source of key actions for the session loop.
pub trait KeySource {
    /// Block until the next action. `Ok(None)` ends the session.
    fn next_action(&mut self) -> std::io::Result<Option<KeyAction>>;
}

/// Reads key presses from the terminal through crossterm.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_action(&mut self) -> std::io::Result<Option<KeyAction>> {
        loop {
            match crossterm::event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(Some(KeyAction::from_key_event(key)));
                }
                // The next frame picks up the new size
                Event::Resize(..) => return Ok(Some(KeyAction::None)),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(
            KeyAction::from_key_event(KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            KeyAction::Quit
        );
        assert_eq!(
            KeyAction::from_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Up)), KeyAction::MoveUp);
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char('j'))), KeyAction::MoveDown);
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Enter)), KeyAction::Enter);
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Backspace)), KeyAction::GoToParent);
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Left)), KeyAction::GoToParent);
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char('h'))), KeyAction::GoToParent);
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char('r'))), KeyAction::Rescan);
        assert_eq!(
            KeyAction::from_key_event(KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT)),
            KeyAction::Rescan
        );
    }

    #[test]
    fn test_paging_keys() {
        assert_eq!(KeyAction::from_key_event(key(KeyCode::PageDown)), KeyAction::PageDown);
        assert_eq!(
            KeyAction::from_key_event(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            KeyAction::PageUp
        );
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Home)), KeyAction::JumpToTop);
        assert_eq!(
            KeyAction::from_key_event(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            KeyAction::JumpToBottom
        );
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char('x'))), KeyAction::None);
        assert_eq!(
            KeyAction::from_key_event(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            KeyAction::None
        );
    }
}
