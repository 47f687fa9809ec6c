// Keyboard types re-exported so the rest of the crate does not name crossterm.
pub use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
