//! Key mapping from terminal events to shop actions.

use crate::types::{Keybind, ShopAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const RESTART_KEY: char = 'R';

/// Map keyboard input to a shop action.
///
/// A character matching one of `keybinds` (either case) buys from that slot.
/// `R` restarts, unless a slot is bound to it.
pub fn action_for_key(key: KeyEvent, keybinds: &[Keybind]) -> Option<ShopAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    let KeyCode::Char(ch) = key.code else {
        return None;
    };

    if let Some(keybind) = keybinds.iter().find(|k| k.matches(ch)) {
        return Some(ShopAction::Buy(*keybind));
    }

    if ch.to_ascii_uppercase() == RESTART_KEY {
        return Some(ShopAction::Restart);
    }

    None
}

/// Check if key should quit the shop.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
