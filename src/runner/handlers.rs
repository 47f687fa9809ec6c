use tracing::{error, trace};

use crate::app::settings::keybinds;
use crate::app::App;
use crate::input::KeyEvent;

/// Apply the action bound to `key`. Returns `true` when the demo should exit.
///
/// Plot errors are logged and shown as a notice instead of ending the demo.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let Some(action) = keybinds::action_for(&key) else {
        trace!("unbound key {:?}", key.code);
        return false;
    };
    match app.apply(action) {
        Ok(quit) => quit,
        Err(e) => {
            error!("{:?} failed: {}", action, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::settings::Settings;
    use crate::app::Tab;
    use crate::input::{KeyCode, KeyModifiers};

    #[test]
    fn tab_key_moves_to_next_page() {
        let mut app = App::new(&Settings::default()).unwrap();
        let quit = handle_key(&mut app, KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        assert!(!quit);
        assert_eq!(app.tab, Tab::Bars);
    }

    #[test]
    fn q_quits() {
        let mut app = App::new(&Settings::default()).unwrap();
        assert!(handle_key(&mut app, KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
    }
}
