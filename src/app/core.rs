use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use tracing::{debug, warn};

use super::gallery::{self, Panel, Stream, STREAM_PANEL};
use super::settings::Settings;
use super::types::{Action, Tab};
use crate::engine::{Args, PlotError, SharedRegistry, ThemeRegistry};
use crate::ui::host::ThemeHost;
use crate::ui::themes::{load_theme_dir, UiTheme};
use crate::ui::widgets::plot::ThemeMode;

/// Marker names cycled by [`Action::CycleMarker`].
pub const MARKERS: [&str; 4] = ["braille", "hd", "sd", "dot"];

/// How long a notice stays in the footer.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Engine theme used when the plot theme is toggled away from auto and no
/// explicit theme was configured.
const FALLBACK_PLOT_THEME: &str = "tui-default";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub shown_at: Instant,
}

pub struct App {
    pub host: ThemeHost,
    pub registry: SharedRegistry,
    pub tab: Tab,
    pages: Vec<Vec<Panel>>,
    marker: usize,
    plot_theme: ThemeMode,
    explicit_theme: String,
    stream: Stream,
    notice: Option<Notice>,
}

impl App {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let registry = ThemeRegistry::with_builtins().shared();

        let mut host = ThemeHost::default();
        for dir in settings.theme_dirs() {
            for theme in load_theme_dir(&dir) {
                debug!("loaded UI theme `{}` from {}", theme.name, dir.display());
                host.add_theme(theme);
            }
        }
        if let Some(name) = &settings.ui_theme {
            if !host.set_theme(name) {
                bail!("unknown UI theme `{name}` (see --list-themes)");
            }
        }

        let plot_theme: ThemeMode = settings.plot_theme.parse().unwrap_or_default();
        let explicit_theme = match &plot_theme {
            ThemeMode::Explicit(name) => {
                if !registry.borrow().contains(name) {
                    bail!("unknown plot theme `{name}` (see --list-themes)");
                }
                name.clone()
            }
            ThemeMode::Auto => FALLBACK_PLOT_THEME.to_string(),
        };

        let Some(marker) = MARKERS.iter().position(|m| *m == settings.marker) else {
            bail!("unknown marker `{}`; expected one of {}", settings.marker, MARKERS.join(", "));
        };

        let mut pages = Vec::with_capacity(Tab::ALL.len());
        for tab in Tab::ALL {
            let mut panels = gallery::build(tab, &registry)
                .with_context(|| format!("building the {tab} examples"))?;
            for panel in &mut panels {
                panel.view.mount(&mut host)?;
                panel.view.set_theme(plot_theme.clone(), host.current())?;
            }
            pages.push(panels);
        }

        let mut app = Self {
            host,
            registry,
            tab: Tab::default(),
            pages,
            marker,
            plot_theme,
            explicit_theme,
            stream: Stream::default(),
            notice: None,
        };
        app.apply_marker()?;
        Ok(app)
    }

    /// The current UI theme and the panels of the selected tab.
    pub fn page_mut(&mut self) -> (&UiTheme, &mut [Panel]) {
        let index = self.tab.index();
        (self.host.current(), &mut self.pages[index])
    }

    pub fn marker(&self) -> &'static str {
        MARKERS[self.marker]
    }

    pub fn plot_theme(&self) -> &ThemeMode {
        &self.plot_theme
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|n| n.text.as_str())
    }

    fn set_notice(&mut self, text: String) {
        self.notice = Some(Notice {
            text,
            shown_at: Instant::now(),
        });
    }

    fn panels_mut(&mut self) -> impl Iterator<Item = &mut Panel> {
        self.pages.iter_mut().flatten()
    }

    fn apply_marker(&mut self) -> Result<(), PlotError> {
        let marker = self.marker();
        for panel in self.panels_mut() {
            panel.view.plt().call("marker", Args::new().arg(marker))?;
        }
        Ok(())
    }

    fn apply_plot_theme(&mut self) -> Result<(), PlotError> {
        let mode = self.plot_theme.clone();
        for page in &mut self.pages {
            for panel in page.iter_mut() {
                panel.view.set_theme(mode.clone(), self.host.current())?;
            }
        }
        Ok(())
    }

    /// Handle `action`. Returns `true` when the demo should exit.
    pub fn apply(&mut self, action: Action) -> Result<bool, PlotError> {
        match action {
            Action::Quit => return Ok(true),
            Action::NextTab => self.tab = self.tab.next(),
            Action::PreviousTab => self.tab = self.tab.previous(),
            Action::NextTheme => {
                let name = self.host.next_theme().name.clone();
                self.set_notice(format!("Theme is {name}."));
            }
            Action::PreviousTheme => {
                let name = self.host.previous_theme().name.clone();
                self.set_notice(format!("Theme is {name}."));
            }
            Action::CycleMarker => {
                self.marker = (self.marker + 1) % MARKERS.len();
                self.apply_marker()?;
                self.set_notice(format!("Marker is {}.", self.marker()));
            }
            Action::TogglePlotTheme => {
                self.plot_theme = match self.plot_theme {
                    ThemeMode::Auto => ThemeMode::Explicit(self.explicit_theme.clone()),
                    ThemeMode::Explicit(_) => ThemeMode::Auto,
                };
                self.apply_plot_theme()?;
                self.set_notice(format!("Plot theme is {}.", self.plot_theme));
            }
        }
        Ok(false)
    }

    /// Advance the streaming example and expire a stale notice.
    pub fn on_tick(&mut self, now: Instant) {
        self.stream.advance();
        let stream = self.stream;
        if let Some(panel) = self.panels_mut().find(|p| p.title == STREAM_PANEL) {
            if let Err(e) = stream.plot(panel.view.plt()) {
                warn!("streaming example failed: {}", e);
            }
        }
        if self
            .notice
            .as_ref()
            .is_some_and(|n| now.duration_since(n.shown_at) >= NOTICE_TTL)
        {
            self.notice = None;
        }
    }
}
