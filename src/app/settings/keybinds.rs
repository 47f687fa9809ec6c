// Keybind predicates so handlers refer to actions rather than raw key codes.

use crate::app::types::Action;
use crate::input::{KeyCode, KeyEvent, KeyModifiers};

pub fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

pub fn is_next_tab(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Tab | KeyCode::Right)
}

pub fn is_previous_tab(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::BackTab | KeyCode::Left)
}

pub fn is_next_theme(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char(']')
}

pub fn is_previous_theme(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('[')
}

pub fn is_cycle_marker(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('m')
}

pub fn is_toggle_plot_theme(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('t')
}

/// The action bound to `key`, if any.
pub fn action_for(key: &KeyEvent) -> Option<Action> {
    let action = if is_quit(key) {
        Action::Quit
    } else if is_next_tab(key) {
        Action::NextTab
    } else if is_previous_tab(key) {
        Action::PreviousTab
    } else if is_next_theme(key) {
        Action::NextTheme
    } else if is_previous_theme(key) {
        Action::PreviousTheme
    } else if is_cycle_marker(key) {
        Action::CycleMarker
    } else if is_toggle_plot_theme(key) {
        Action::TogglePlotTheme
    } else {
        return None;
    };
    Some(action)
}

/// Key help shown in the footer.
pub const HELP: &str = "[/]: theme  Tab/←/→: page  m: marker  t: plot theme  q: quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brackets_switch_theme() {
        let key = KeyEvent::new(KeyCode::Char(']'), KeyModifiers::NONE);
        assert_eq!(action_for(&key), Some(Action::NextTheme));
    }

    #[test]
    fn ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(&key), Some(Action::Quit));
        let plain = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(action_for(&plain), None);
    }
}
