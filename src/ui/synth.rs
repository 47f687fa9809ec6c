//! Derive engine themes from UI themes.
//!
//! The derived theme for UI theme `x` is registered as `tui-auto-x`: the
//! surface becomes the canvas and axes, the foreground becomes the ticks, and
//! the `text-*` tokens become the data colours.

use ratatui::style::Color;
use tracing::debug;

use super::themes::UiTheme;
use crate::engine::{rgbify, PlotColor, PlotError, ThemeEntry, ThemeRegistry};

pub const AUTO_PREFIX: &str = "tui-auto-";

const DATA_TOKENS: [&str; 6] = [
    "text-accent",
    "text-primary",
    "text-secondary",
    "text-success",
    "text-warning",
    "text-error",
];

pub fn auto_theme_name(ui_name: &str) -> String {
    format!("{AUTO_PREFIX}{ui_name}")
}

/// Convert a UI colour to an RGB engine colour.
pub fn plot_color(color: Color) -> Result<PlotColor, PlotError> {
    let color = match color {
        Color::Reset => PlotColor::default_color(),
        Color::Rgb(r, g, b) => PlotColor::Rgb(r, g, b),
        Color::Indexed(i) => PlotColor::Index(i),
        Color::Black => PlotColor::Index(0),
        Color::Red => PlotColor::Index(1),
        Color::Green => PlotColor::Index(2),
        Color::Yellow => PlotColor::Index(3),
        Color::Blue => PlotColor::Index(4),
        Color::Magenta => PlotColor::Index(5),
        Color::Cyan => PlotColor::Index(6),
        Color::Gray => PlotColor::Index(7),
        Color::DarkGray => PlotColor::Index(8),
        Color::LightRed => PlotColor::Index(9),
        Color::LightGreen => PlotColor::Index(10),
        Color::LightYellow => PlotColor::Index(11),
        Color::LightBlue => PlotColor::Index(12),
        Color::LightMagenta => PlotColor::Index(13),
        Color::LightCyan => PlotColor::Index(14),
        Color::White => PlotColor::Index(15),
    };
    rgbify(&color)
}

fn token(ui: &UiTheme, name: &str) -> Result<PlotColor, PlotError> {
    let color = ui.variable(name).ok_or_else(|| PlotError::MissingToken {
        theme: ui.name.clone(),
        token: name.to_string(),
    })?;
    plot_color(color)
}

/// Build the engine theme that mirrors `ui`.
pub fn synthesize(ui: &UiTheme) -> Result<ThemeEntry, PlotError> {
    let surface = token(ui, "surface")?;
    let data = DATA_TOKENS
        .iter()
        .map(|name| token(ui, name))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ThemeEntry::new(
        surface.clone(),
        surface,
        token(ui, "foreground")?,
        "default",
        data,
    ))
}

/// Register the derived theme for `ui` unless one is registered already.
pub fn ensure_registered(registry: &mut ThemeRegistry, ui: &UiTheme) -> Result<String, PlotError> {
    let name = auto_theme_name(&ui.name);
    if !registry.contains(&name) {
        debug!("registering plot theme `{}`", name);
        registry.register(&name, synthesize(ui)?);
    }
    Ok(name)
}

/// Re-derive the theme for `ui`, overwriting any earlier registration.
pub fn refresh_registered(registry: &mut ThemeRegistry, ui: &UiTheme) -> Result<String, PlotError> {
    let name = auto_theme_name(&ui.name);
    debug!("refreshing plot theme `{}`", name);
    registry.register(&name, synthesize(ui)?);
    Ok(name)
}
