//! Key mapping from terminal events to inventory actions.

use crate::types::InventoryAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to inventory actions.
pub fn handle_key_event(key: KeyEvent) -> Option<InventoryAction> {
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(InventoryAction::CursorLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(InventoryAction::CursorRight)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(InventoryAction::CursorUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InventoryAction::CursorDown)
        }

        // Item handling
        KeyCode::Char(' ') | KeyCode::Enter => Some(InventoryAction::Interact),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InventoryAction::Rotate),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(InventoryAction::AutoInsert),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(InventoryAction::SpawnItem),
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => Some(InventoryAction::Discard),

        // Containers
        KeyCode::Tab => Some(InventoryAction::NextGrid),

        _ => None,
    }
}

/// Check if key should quit the playground.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_cursor_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(InventoryAction::CursorLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('d'))),
            Some(InventoryAction::CursorRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('K'))),
            Some(InventoryAction::CursorUp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(InventoryAction::CursorDown)
        );
    }

    #[test]
    fn test_item_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(InventoryAction::Interact)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(InventoryAction::Interact)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(InventoryAction::Rotate)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('f'))),
            Some(InventoryAction::AutoInsert)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('x'))),
            Some(InventoryAction::Discard)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Tab)),
            Some(InventoryAction::NextGrid)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
