//! Terminal plots as ratatui widgets.
//!
//! [`plot::Plot`] records engine operations by name and replays them on every
//! render; [`ui::widgets::plot::PlotView`] sizes the plot to its area, picks an
//! engine theme (derived from the UI theme in auto mode) and turns the
//! rendered ANSI text into ratatui `Text`.

pub mod app;
pub mod engine;
pub mod input;
pub mod logging;
pub mod plot;
#[path = "runner/mod.rs"]
pub mod runner;
#[path = "ui/mod.rs"]
pub mod ui;

pub use engine::{PlotError, SharedRegistry, ThemeRegistry};
pub use plot::Plot;
pub use ui::widgets::plot::{PlotView, ThemeMode};
