//! Input mapping tests - key events to inventory actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use stash_grid::input::{handle_key_event, should_quit, InputHandler};
use stash_grid::types::InventoryAction;

#[test]
fn test_every_command_has_a_key() {
    let cases = [
        (KeyCode::Left, InventoryAction::CursorLeft),
        (KeyCode::Right, InventoryAction::CursorRight),
        (KeyCode::Up, InventoryAction::CursorUp),
        (KeyCode::Down, InventoryAction::CursorDown),
        (KeyCode::Char(' '), InventoryAction::Interact),
        (KeyCode::Enter, InventoryAction::Interact),
        (KeyCode::Char('r'), InventoryAction::Rotate),
        (KeyCode::Char('f'), InventoryAction::AutoInsert),
        (KeyCode::Char('n'), InventoryAction::SpawnItem),
        (KeyCode::Char('x'), InventoryAction::Discard),
        (KeyCode::Tab, InventoryAction::NextGrid),
    ];
    for (code, action) in cases {
        assert_eq!(handle_key_event(KeyEvent::from(code)), Some(action), "{code:?}");
    }
}

#[test]
fn test_quit_keys() {
    assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
    assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('q'))), None);
}

#[test]
fn test_handler_and_map_agree_on_cursor_keys() {
    for code in [KeyCode::Char('h'), KeyCode::Char('j'), KeyCode::Char('k'), KeyCode::Char('l')] {
        let mut ih = InputHandler::new();
        assert_eq!(ih.handle_key_press(code), handle_key_event(KeyEvent::from(code)));
    }
}

#[test]
fn test_held_key_drives_cursor_across_grid() {
    let mut ih = InputHandler::with_config(100, 20).with_key_release_timeout_ms(60_000);
    let mut moves = 0;

    if ih.handle_key_press(KeyCode::Right).is_some() {
        moves += 1;
    }
    // 100ms DAS, then 5 repeats over the next 100ms.
    for _ in 0..10 {
        moves += ih.update(20).len();
    }
    assert_eq!(moves, 1 + 5);

    ih.handle_key_release(KeyCode::Right);
    assert!(ih.update(100).is_empty());
}
