//! The engine's figure state.
//!
//! A `Figure` is the mutable state every engine operation writes into. The
//! recording facade resets it and replays its call script on each build, so
//! nothing here outlives a single render pass.

use ratatui::symbols::Marker;

use super::ansi;
use super::color::PlotColor;
use super::error::PlotError;
use super::render;
use super::themes::ThemeRegistry;

pub const DEFAULT_SIZE: (u16, u16) = (80, 24);
pub const DEFAULT_THEME: &str = "default";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scale {
    #[default]
    Linear,
    Log,
}

impl Scale {
    pub fn parse(op: &str, s: &str) -> Result<Self, PlotError> {
        match s {
            "linear" => Ok(Scale::Linear),
            "log" => Ok(Scale::Log),
            other => Err(PlotError::bad(op, format!("unknown scale `{other}`"))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    Line,
    Scatter,
    Histogram,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub kind: SeriesKind,
    pub points: Vec<(f64, f64)>,
    pub label: Option<String>,
    pub color: Option<PlotColor>,
    pub marker: Option<Marker>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn parse(op: &str, s: &str) -> Result<Self, PlotError> {
        match s {
            "vertical" | "v" => Ok(Orientation::Vertical),
            "horizontal" | "h" => Ok(Orientation::Horizontal),
            other => Err(PlotError::bad(op, format!("unknown orientation `{other}`"))),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarSeries {
    pub values: Vec<f64>,
    pub label: Option<String>,
    pub color: Option<PlotColor>,
}

/// Categorical bars; every series shares the categories of the first bar call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BarSet {
    pub categories: Vec<String>,
    pub series: Vec<BarSeries>,
    pub orientation: Orientation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefAxis {
    Horizontal,
    Vertical,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RefLine {
    pub axis: RefAxis,
    pub at: f64,
    pub color: Option<PlotColor>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub title: Option<String>,
    pub xlabel: Option<String>,
    pub ylabel: Option<String>,
    pub series: Vec<Series>,
    pub bars: Option<BarSet>,
    pub matrix: Option<Vec<Vec<f64>>>,
    pub ref_lines: Vec<RefLine>,
    pub xlim: Option<(f64, f64)>,
    pub ylim: Option<(f64, f64)>,
    pub xscale: Scale,
    pub yscale: Scale,
    pub grid: (bool, bool),
    pub marker: Marker,
    pub size: (u16, u16),
    pub theme: String,
}

impl Default for Figure {
    fn default() -> Self {
        Self {
            title: None,
            xlabel: None,
            ylabel: None,
            series: Vec::new(),
            bars: None,
            matrix: None,
            ref_lines: Vec::new(),
            xlim: None,
            ylim: None,
            xscale: Scale::Linear,
            yscale: Scale::Linear,
            grid: (false, false),
            marker: Marker::Braille,
            size: DEFAULT_SIZE,
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything, including size and theme.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Drop plotted data but keep labels, limits and styling.
    pub fn clear_data(&mut self) {
        self.series.clear();
        self.bars = None;
        self.matrix = None;
        self.ref_lines.clear();
    }

    pub fn has_data(&self) -> bool {
        !self.series.is_empty()
            || self.bars.is_some()
            || self.matrix.is_some()
            || !self.ref_lines.is_empty()
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn add_bars(
        &mut self,
        categories: Vec<String>,
        series: Vec<BarSeries>,
        orientation: Orientation,
    ) {
        let set = self.bars.get_or_insert_with(BarSet::default);
        if set.categories.is_empty() {
            set.categories = categories;
        }
        set.series.extend(series);
        set.orientation = orientation;
    }

    /// Rasterise the figure and encode it as ANSI text.
    pub fn build(&self, registry: &ThemeRegistry) -> Result<String, PlotError> {
        let buf = render::render(self, registry)?;
        Ok(ansi::encode(&buf))
    }
}

/// Parse a marker name as used by the `marker` option.
pub fn parse_marker(op: &str, name: &str) -> Result<Marker, PlotError> {
    match name {
        "braille" => Ok(Marker::Braille),
        "dot" => Ok(Marker::Dot),
        "sd" | "block" => Ok(Marker::Block),
        "hd" | "fhd" | "half" => Ok(Marker::HalfBlock),
        "bar" => Ok(Marker::Bar),
        other => Err(PlotError::bad(op, format!("unknown marker `{other}`"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_data_keeps_labels() {
        let mut fig = Figure::new();
        fig.title = Some("t".into());
        fig.add_series(Series {
            kind: SeriesKind::Line,
            points: vec![(0.0, 1.0)],
            label: None,
            color: None,
            marker: None,
        });
        fig.clear_data();
        assert!(!fig.has_data());
        assert_eq!(fig.title.as_deref(), Some("t"));
    }

    #[test]
    fn bar_series_share_first_categories() {
        let mut fig = Figure::new();
        let series = |v: f64| BarSeries {
            values: vec![v],
            label: None,
            color: None,
        };
        fig.add_bars(vec!["a".into()], vec![series(1.0)], Orientation::Vertical);
        fig.add_bars(vec!["b".into()], vec![series(2.0)], Orientation::Horizontal);
        let bars = fig.bars.unwrap();
        assert_eq!(bars.categories, vec!["a".to_string()]);
        assert_eq!(bars.series.len(), 2);
        assert_eq!(bars.orientation, Orientation::Horizontal);
    }
}
