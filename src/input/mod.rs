//! Terminal input, narrowed to the events the demo reacts to.

pub mod keyboard;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Other,
}

/// Wait up to `timeout` for an input event.
pub fn poll(timeout: Duration) -> io::Result<bool> {
    event::poll(timeout)
}

/// Read the next event. Key releases and repeats are reported as `Other`.
pub fn read_event() -> io::Result<InputEvent> {
    Ok(match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => InputEvent::Key(key),
        Event::Resize(w, h) => InputEvent::Resize(w, h),
        _ => InputEvent::Other,
    })
}
