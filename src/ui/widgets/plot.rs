//! Hosting widget for a recorded plot.
//!
//! On every render the view sizes the plot to its area, picks the engine
//! theme, replays the plot and turns the ANSI result back into styled text.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::mpsc::Receiver;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::Widget;
use tracing::error;

use crate::engine::{PlotError, SharedRegistry};
use crate::plot::Plot;
use crate::ui::ansi::text_from_ansi;
use crate::ui::host::{ThemeChanged, ThemeHost};
use crate::ui::synth::{auto_theme_name, ensure_registered, refresh_registered};
use crate::ui::themes::UiTheme;

/// Which engine theme a plot view uses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Follow the UI theme through its derived engine theme.
    #[default]
    Auto,
    /// A registered engine theme by name.
    Explicit(String),
}

impl FromStr for ThemeMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "auto" => ThemeMode::Auto,
            name => ThemeMode::Explicit(name.to_string()),
        })
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Auto => f.write_str("auto"),
            ThemeMode::Explicit(name) => f.write_str(name),
        }
    }
}

pub struct PlotView {
    plot: Plot,
    registry: SharedRegistry,
    theme: ThemeMode,
    changes: Option<Receiver<ThemeChanged>>,
}

impl PlotView {
    pub fn new(registry: SharedRegistry) -> Self {
        Self {
            plot: Plot::new(),
            registry,
            theme: ThemeMode::Auto,
            changes: None,
        }
    }

    /// Start following `host`: subscribe to theme changes and register the
    /// derived theme for the current UI theme.
    pub fn mount(&mut self, host: &mut ThemeHost) -> Result<(), PlotError> {
        self.changes = Some(host.subscribe());
        self.register_for(host.current())
    }

    pub fn plt(&mut self) -> &mut Plot {
        &mut self.plot
    }

    pub fn theme(&self) -> &ThemeMode {
        &self.theme
    }

    /// Switch theme mode. Entering auto re-derives the theme from `ui`, since
    /// changes published while the view was explicit were not applied.
    pub fn set_theme(&mut self, mode: ThemeMode, ui: &UiTheme) -> Result<(), PlotError> {
        let entering_auto = mode == ThemeMode::Auto && self.theme != ThemeMode::Auto;
        self.theme = mode;
        if entering_auto {
            refresh_registered(&mut self.registry.borrow_mut(), ui)?;
        }
        self.register_for(ui)
    }

    fn register_for(&self, ui: &UiTheme) -> Result<(), PlotError> {
        if self.theme == ThemeMode::Auto {
            ensure_registered(&mut self.registry.borrow_mut(), ui)?;
        }
        Ok(())
    }

    fn theme_name(&self, ui: &UiTheme) -> String {
        match &self.theme {
            ThemeMode::Auto => auto_theme_name(&ui.name),
            ThemeMode::Explicit(name) => name.clone(),
        }
    }

    fn drain_theme_changes(&self) -> Result<(), PlotError> {
        let Some(changes) = &self.changes else {
            return Ok(());
        };
        for ThemeChanged(ui) in changes.try_iter() {
            if self.theme == ThemeMode::Auto {
                refresh_registered(&mut self.registry.borrow_mut(), &ui)?;
            }
        }
        Ok(())
    }

    /// Render the plot at `width` x `height` for the UI theme `ui`.
    pub fn render_text(
        &mut self,
        width: u16,
        height: u16,
        ui: &UiTheme,
    ) -> Result<Text<'static>, PlotError> {
        self.plot.set_size(width, height);
        self.drain_theme_changes()?;
        self.register_for(ui)?;
        let name = self.theme_name(ui);
        self.plot.set_theme(&name);
        let ansi = self.plot.build(&self.registry.borrow())?;
        Ok(text_from_ansi(&ansi))
    }

    pub fn widget<'a>(&'a mut self, ui: &'a UiTheme) -> PlotWidget<'a> {
        PlotWidget { view: self, ui }
    }
}

/// A [`PlotView`] bound to the UI theme it renders under.
pub struct PlotWidget<'a> {
    view: &'a mut PlotView,
    ui: &'a UiTheme,
}

impl Widget for PlotWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.view.render_text(area.width, area.height, self.ui) {
            Ok(text) => text.render(area, buf),
            Err(e) => {
                error!("plot render failed: {}", e);
                let color = self.ui.variable("error").unwrap_or(Color::Red);
                Line::styled(e.to_string(), Style::default().fg(color)).render(area, buf);
            }
        }
    }
}
