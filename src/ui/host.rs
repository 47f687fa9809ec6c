//! The set of available UI themes and the current selection.
//!
//! Widgets that depend on the UI theme subscribe once and drain their
//! receiver when they render; a dropped receiver is pruned on the next
//! publish.

use std::sync::mpsc::{channel, Receiver, Sender};

use tracing::{info, warn};

use super::themes::{builtin_themes, UiTheme};

/// Sent to every subscriber after the current UI theme changes.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeChanged(pub UiTheme);

#[derive(Debug)]
pub struct ThemeHost {
    themes: Vec<UiTheme>,
    current: usize,
    subscribers: Vec<Sender<ThemeChanged>>,
}

impl Default for ThemeHost {
    fn default() -> Self {
        Self::new(builtin_themes())
    }
}

impl ThemeHost {
    /// A host over `themes`; falls back to the built-in themes when empty.
    pub fn new(themes: Vec<UiTheme>) -> Self {
        let themes = if themes.is_empty() { builtin_themes() } else { themes };
        Self {
            themes,
            current: 0,
            subscribers: Vec::new(),
        }
    }

    /// Add `theme`, replacing any theme with the same name.
    pub fn add_theme(&mut self, theme: UiTheme) {
        match self.themes.iter().position(|t| t.name == theme.name) {
            Some(i) => self.themes[i] = theme,
            None => self.themes.push(theme),
        }
    }

    pub fn themes(&self) -> &[UiTheme] {
        &self.themes
    }

    pub fn current(&self) -> &UiTheme {
        &self.themes[self.current]
    }

    /// Select the theme called `name`. Returns `false` if there is none.
    pub fn set_theme(&mut self, name: &str) -> bool {
        match self.themes.iter().position(|t| t.name == name) {
            Some(i) => {
                self.select(i);
                true
            }
            None => {
                warn!("unknown UI theme `{}`", name);
                false
            }
        }
    }

    pub fn next_theme(&mut self) -> &UiTheme {
        self.select((self.current + 1) % self.themes.len());
        self.current()
    }

    pub fn previous_theme(&mut self) -> &UiTheme {
        let len = self.themes.len();
        self.select((self.current + len - 1) % len);
        self.current()
    }

    pub fn subscribe(&mut self) -> Receiver<ThemeChanged> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn select(&mut self, index: usize) {
        self.current = index;
        info!("UI theme is now `{}`", self.themes[index].name);
        self.publish();
    }

    fn publish(&mut self) {
        let theme = self.themes[self.current].clone();
        self.subscribers
            .retain(|tx| tx.send(ThemeChanged(theme.clone())).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_wraps_both_ways() {
        let mut host = ThemeHost::default();
        let first = host.current().name.clone();
        let last = host.previous_theme().name.clone();
        assert_eq!(last, host.themes().last().unwrap().name);
        assert_eq!(host.next_theme().name, first);
    }

    #[test]
    fn subscribers_see_changes_and_dead_ones_are_dropped() {
        let mut host = ThemeHost::default();
        let rx = host.subscribe();
        let dropped = host.subscribe();
        drop(dropped);
        assert!(host.set_theme("nord"));
        assert_eq!(rx.try_recv().unwrap().0.name, "nord");
        assert_eq!(host.subscriber_count(), 1);
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let mut host = ThemeHost::default();
        assert!(!host.set_theme("missing"));
        assert_eq!(host.current().name, "dark");
    }
}
