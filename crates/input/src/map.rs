//! Key mapping from raw key input to intents.

use crate::types::Intent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// DOM `keyCode` values for the arrow keys
pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;

/// Map a DOM key code to an intent.
///
/// Left/right move, up rotates, down soft-drops.
pub fn intent_from_key_code(code: u32) -> Option<Intent> {
    match code {
        KEY_LEFT => Some(Intent::MoveLeft),
        KEY_RIGHT => Some(Intent::MoveRight),
        KEY_UP => Some(Intent::RotateCw),
        KEY_DOWN => Some(Intent::SoftDrop),
        _ => None,
    }
}

/// Map a terminal key event to an intent.
pub fn handle_key_event(key: KeyEvent) -> Option<Intent> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some(Intent::MoveLeft),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some(Intent::MoveRight),
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Some(Intent::RotateCw),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some(Intent::SoftDrop),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key should start a new game. This is a runner concern, not an intent.
pub fn is_restart(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}
