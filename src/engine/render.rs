//! Rasterise a [`Figure`] into a ratatui buffer.
//!
//! Line, scatter and histogram series go through ratatui's `Chart`; bars go
//! through `BarChart`; a matrix is painted cell by cell as a grey ramp.
//! Layout precedence is matrix, then bars, then the chart.

use ratatui::buffer::Buffer;
use ratatui::layout::{Direction, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Chart, Dataset, GraphType, LegendPosition, Widget,
};
use tracing::debug;

use super::color::{to_ratatui, PlotColor};
use super::error::PlotError;
use super::figure::{BarSet, Figure, Orientation, RefAxis, Scale, SeriesKind};
use super::themes::ThemeRegistry;

/// Theme colours resolved to terminal colours for one render pass.
struct Palette {
    canvas: Color,
    axes: Color,
    ticks: Color,
    tick_modifier: Modifier,
    data: Vec<Color>,
}

impl Palette {
    fn resolve(registry: &ThemeRegistry, name: &str) -> Result<Self, PlotError> {
        let entry = registry
            .get(name)
            .ok_or_else(|| PlotError::UnknownTheme(name.to_string()))?;
        Ok(Self {
            canvas: to_ratatui(&entry.canvas)?,
            axes: to_ratatui(&entry.axes)?,
            ticks: to_ratatui(&entry.ticks)?,
            tick_modifier: tick_modifier(&entry.tick_style),
            data: entry.data.iter().map(to_ratatui).collect::<Result<_, _>>()?,
        })
    }

    fn series(&self, index: usize, explicit: Option<&PlotColor>) -> Result<Color, PlotError> {
        if let Some(color) = explicit {
            return to_ratatui(color);
        }
        if self.data.is_empty() {
            return Ok(self.ticks);
        }
        Ok(self.data[index % self.data.len()])
    }

    fn tick_style(&self) -> Style {
        Style::default().fg(self.ticks).add_modifier(self.tick_modifier)
    }
}

fn tick_modifier(style: &str) -> Modifier {
    style
        .split_whitespace()
        .fold(Modifier::empty(), |acc, word| match word {
            "bold" => acc | Modifier::BOLD,
            "dim" => acc | Modifier::DIM,
            "italic" => acc | Modifier::ITALIC,
            "underline" => acc | Modifier::UNDERLINED,
            "inverted" | "reverse" => acc | Modifier::REVERSED,
            "default" => acc,
            other => {
                debug!("ignoring unknown tick style `{}`", other);
                acc
            }
        })
}

pub(crate) fn render(fig: &Figure, registry: &ThemeRegistry) -> Result<Buffer, PlotError> {
    let area = Rect::new(0, 0, fig.size.0, fig.size.1);
    let mut buf = Buffer::empty(area);
    if area.is_empty() {
        return Ok(buf);
    }
    let palette = Palette::resolve(registry, &fig.theme)?;

    let mut block = Block::default().style(Style::default().bg(palette.axes).fg(palette.ticks));
    if let Some(title) = &fig.title {
        block = block.title(Line::styled(title.clone(), palette.tick_style()).centered());
    }
    let inner = block.inner(area);
    block.render(area, &mut buf);
    if inner.is_empty() {
        return Ok(buf);
    }

    if let Some(matrix) = &fig.matrix {
        render_matrix(matrix, inner, &mut buf);
    } else if let Some(bars) = &fig.bars {
        render_bars(bars, inner, &palette, &mut buf)?;
    } else {
        render_chart(fig, inner, &palette, &mut buf)?;
    }
    Ok(buf)
}

fn project(value: f64, scale: Scale) -> Option<f64> {
    match scale {
        Scale::Linear => value.is_finite().then_some(value),
        Scale::Log => (value > 0.0 && value.is_finite()).then(|| value.log10()),
    }
}

fn span_of(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

fn widen((lo, hi): (f64, f64)) -> [f64; 2] {
    if (hi - lo).abs() < f64::EPSILON {
        [lo - 1.0, hi + 1.0]
    } else {
        [lo, hi]
    }
}

fn limit_bounds(limit: Option<(f64, f64)>, scale: Scale) -> Option<(f64, f64)> {
    let (lo, hi) = limit?;
    Some((project(lo, scale)?, project(hi, scale)?))
}

/// Compact tick text; log axes show the unprojected value.
pub(crate) fn format_tick(value: f64, scale: Scale) -> String {
    let v = match scale {
        Scale::Linear => value,
        Scale::Log => 10f64.powf(value),
    };
    let magnitude = v.abs();
    if magnitude != 0.0 && !(1e-2..1e4).contains(&magnitude) {
        return format!("{v:.1e}");
    }
    let text = format!("{v:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

fn ticks([lo, hi]: [f64; 2]) -> [f64; 3] {
    [lo, (lo + hi) / 2.0, hi]
}

fn ref_positions(fig: &Figure, axis: RefAxis, scale: Scale) -> impl Iterator<Item = f64> + '_ {
    fig.ref_lines
        .iter()
        .filter(move |r| r.axis == axis)
        .filter_map(move |r| project(r.at, scale))
}

struct Layer {
    points: Vec<(f64, f64)>,
    name: Option<String>,
    style: Style,
    graph: GraphType,
    marker: Marker,
}

fn render_chart(
    fig: &Figure,
    area: Rect,
    palette: &Palette,
    buf: &mut Buffer,
) -> Result<(), PlotError> {
    let mut layers = Vec::new();
    for (i, series) in fig.series.iter().enumerate() {
        let color = palette.series(i, series.color.as_ref())?;
        let points: Vec<(f64, f64)> = series
            .points
            .iter()
            .filter_map(|&(x, y)| Some((project(x, fig.xscale)?, project(y, fig.yscale)?)))
            .collect();
        let graph = match series.kind {
            SeriesKind::Line => GraphType::Line,
            SeriesKind::Scatter => GraphType::Scatter,
            SeriesKind::Histogram => GraphType::Bar,
        };
        layers.push(Layer {
            points,
            name: series.label.clone(),
            style: Style::default().fg(color),
            graph,
            marker: series.marker.unwrap_or(fig.marker),
        });
    }

    let has_histogram = fig.series.iter().any(|s| s.kind == SeriesKind::Histogram);
    let x_bounds = widen(
        limit_bounds(fig.xlim, fig.xscale)
            .or_else(|| {
                span_of(
                    layers
                        .iter()
                        .flat_map(|l| l.points.iter().map(|p| p.0))
                        .chain(ref_positions(fig, RefAxis::Vertical, fig.xscale)),
                )
            })
            .unwrap_or((0.0, 1.0)),
    );
    let y_bounds = widen(
        limit_bounds(fig.ylim, fig.yscale)
            .or_else(|| {
                let zero = (has_histogram && fig.yscale == Scale::Linear).then_some(0.0);
                span_of(
                    layers
                        .iter()
                        .flat_map(|l| l.points.iter().map(|p| p.1))
                        .chain(ref_positions(fig, RefAxis::Horizontal, fig.yscale))
                        .chain(zero),
                )
            })
            .unwrap_or((0.0, 1.0)),
    );

    for line in &fig.ref_lines {
        let color = match &line.color {
            Some(c) => to_ratatui(c)?,
            None => palette.ticks,
        };
        let points = match line.axis {
            RefAxis::Horizontal => project(line.at, fig.yscale)
                .map(|y| vec![(x_bounds[0], y), (x_bounds[1], y)]),
            RefAxis::Vertical => project(line.at, fig.xscale)
                .map(|x| vec![(x, y_bounds[0]), (x, y_bounds[1])]),
        };
        if let Some(points) = points {
            layers.push(Layer {
                points,
                name: None,
                style: Style::default().fg(color),
                graph: GraphType::Line,
                marker: fig.marker,
            });
        }
    }

    // Grid lines sit on the middle tick of each axis.
    let grid_style = Style::default().fg(palette.ticks).add_modifier(Modifier::DIM);
    let grid_line = |points: Vec<(f64, f64)>| Layer {
        points,
        name: None,
        style: grid_style,
        graph: GraphType::Line,
        marker: Marker::Dot,
    };
    let mut grid = Vec::new();
    if fig.grid.0 {
        let y = ticks(y_bounds)[1];
        grid.push(grid_line(vec![(x_bounds[0], y), (x_bounds[1], y)]));
    }
    if fig.grid.1 {
        let x = ticks(x_bounds)[1];
        grid.push(grid_line(vec![(x, y_bounds[0]), (x, y_bounds[1])]));
    }

    let datasets: Vec<Dataset> = grid
        .iter()
        .chain(layers.iter())
        .map(|layer| {
            let mut dataset = Dataset::default()
                .marker(layer.marker)
                .graph_type(layer.graph)
                .style(layer.style)
                .data(&layer.points);
            if let Some(name) = &layer.name {
                dataset = dataset.name(name.clone());
            }
            dataset
        })
        .collect();

    let axis = |bounds: [f64; 2], scale: Scale, title: Option<&String>| {
        let labels: Vec<Span> = ticks(bounds)
            .iter()
            .map(|v| Span::styled(format_tick(*v, scale), palette.tick_style()))
            .collect();
        let mut axis = Axis::default()
            .style(Style::default().fg(palette.ticks))
            .bounds(bounds)
            .labels(labels);
        if let Some(title) = title {
            axis = axis.title(Span::styled(title.clone(), palette.tick_style()));
        }
        axis
    };

    Chart::new(datasets)
        .style(Style::default().bg(palette.canvas))
        .x_axis(axis(x_bounds, fig.xscale, fig.xlabel.as_ref()))
        .y_axis(axis(y_bounds, fig.yscale, fig.ylabel.as_ref()))
        .legend_position(Some(LegendPosition::TopRight))
        .render(area, buf);
    Ok(())
}

const BAR_GAP: u16 = 1;
const GROUP_GAP: u16 = 2;

fn bar_width(extent: u16, categories: usize, per_group: usize) -> u16 {
    let categories = categories.max(1);
    let per_group = per_group.max(1);
    let gaps = categories
        .saturating_mul(usize::from(GROUP_GAP))
        .saturating_add(
            categories
                .saturating_mul(per_group - 1)
                .saturating_mul(usize::from(BAR_GAP)),
        );
    let bars = categories.saturating_mul(per_group).max(1);
    let width = (usize::from(extent).saturating_sub(gaps) / bars).clamp(1, 12);
    u16::try_from(width).unwrap_or(1)
}

fn render_bars(
    bars: &BarSet,
    area: Rect,
    palette: &Palette,
    buf: &mut Buffer,
) -> Result<(), PlotError> {
    buf.set_style(area, Style::default().bg(palette.canvas));
    let colors = bars
        .series
        .iter()
        .enumerate()
        .map(|(i, s)| palette.series(i, s.color.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    let peak = bars
        .series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .filter(|v| v.is_finite())
        .fold(0.0f64, f64::max);
    // Bar heights are integers, so values are scaled onto a fixed resolution.
    let resolution = if peak > 0.0 { 1000.0 / peak } else { 1.0 };

    let labelled: Vec<(&str, Color)> = bars
        .series
        .iter()
        .zip(&colors)
        .filter_map(|(s, c)| s.label.as_deref().map(|l| (l, *c)))
        .collect();
    let mut chart_area = area;
    if !labelled.is_empty() && area.height > 1 {
        let legend: Vec<Span> = labelled
            .iter()
            .flat_map(|(label, color)| {
                [
                    Span::styled("■ ", Style::default().fg(*color)),
                    Span::styled(format!("{label}  "), palette.tick_style()),
                ]
            })
            .collect();
        let legend_row = Rect::new(area.x, area.bottom() - 1, area.width, 1);
        Line::from(legend).right_aligned().render(legend_row, buf);
        chart_area.height -= 1;
    }

    let extent = match bars.orientation {
        Orientation::Vertical => chart_area.width,
        Orientation::Horizontal => chart_area.height,
    };
    let mut chart = BarChart::default()
        .bar_width(bar_width(extent, bars.categories.len(), bars.series.len()))
        .bar_gap(BAR_GAP)
        .group_gap(GROUP_GAP)
        .label_style(palette.tick_style())
        .value_style(Style::default().fg(palette.ticks).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(palette.canvas))
        .max(1000);
    if bars.orientation == Orientation::Horizontal {
        chart = chart.direction(Direction::Horizontal);
    }

    for (c, category) in bars.categories.iter().enumerate() {
        let group: Vec<Bar> = bars
            .series
            .iter()
            .zip(&colors)
            .map(|(series, color)| {
                let value = series.values.get(c).copied().unwrap_or(0.0);
                Bar::default()
                    .value((value.max(0.0) * resolution).round() as u64)
                    .text_value(format_tick(value, Scale::Linear))
                    .style(Style::default().fg(*color))
            })
            .collect();
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(category.clone()))
                .bars(&group),
        );
    }
    chart.render(chart_area, buf);
    Ok(())
}

fn render_matrix(matrix: &[Vec<f64>], area: Rect, buf: &mut Buffer) {
    let rows = matrix.len();
    let cols = matrix.first().map(Vec::len).unwrap_or(0);
    if rows == 0 || cols == 0 {
        return;
    }
    let (lo, hi) = span_of(matrix.iter().flatten().copied().filter(|v| v.is_finite()))
        .unwrap_or((0.0, 0.0));
    for dy in 0..area.height {
        let r = dy as usize * rows / area.height as usize;
        for dx in 0..area.width {
            let c = dx as usize * cols / area.width as usize;
            let value = matrix[r][c];
            let t = if hi > lo && value.is_finite() {
                (value - lo) / (hi - lo)
            } else {
                0.5
            };
            let level = (t.clamp(0.0, 1.0) * 255.0).round() as u8;
            if let Some(cell) = buf.cell_mut((area.x + dx, area.y + dy)) {
                cell.set_symbol(" ").set_bg(Color::Rgb(level, level, level));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_text() {
        assert_eq!(format_tick(0.5, Scale::Linear), "0.5");
        assert_eq!(format_tick(2.0, Scale::Linear), "2");
        assert_eq!(format_tick(-0.001, Scale::Linear), "-1.0e-3");
        assert_eq!(format_tick(2.0, Scale::Log), "100");
    }

    #[test]
    fn tick_modifiers_combine() {
        assert_eq!(tick_modifier("bold italic"), Modifier::BOLD | Modifier::ITALIC);
        assert_eq!(tick_modifier("default"), Modifier::empty());
    }

    #[test]
    fn bar_width_is_never_zero() {
        assert_eq!(bar_width(0, 10, 3), 1);
        assert!(bar_width(80, 2, 1) > 1);
    }

    #[test]
    fn bar_width_survives_huge_category_counts() {
        assert_eq!(bar_width(80, 40_000, 1), 1);
        assert_eq!(bar_width(80, 65_536, 1), 1);
        assert_eq!(bar_width(u16::MAX, usize::MAX, usize::MAX), 1);
    }

    #[test]
    fn unknown_theme_is_reported() {
        let mut fig = Figure::new();
        fig.theme = "nope".into();
        let err = render(&fig, &ThemeRegistry::with_builtins()).unwrap_err();
        assert_eq!(err, PlotError::UnknownTheme("nope".into()));
    }

    #[test]
    fn zero_size_renders_nothing() {
        let mut fig = Figure::new();
        fig.size = (0, 10);
        let buf = render(&fig, &ThemeRegistry::new()).unwrap();
        assert!(buf.area.is_empty());
    }

    #[test]
    fn matrix_paints_grey_ramp() {
        let mut fig = Figure::new();
        fig.size = (2, 1);
        fig.matrix = Some(vec![vec![0.0, 1.0]]);
        let buf = render(&fig, &ThemeRegistry::with_builtins()).unwrap();
        assert_eq!(buf.cell((0, 0)).unwrap().bg, Color::Rgb(0, 0, 0));
        assert_eq!(buf.cell((1, 0)).unwrap().bg, Color::Rgb(255, 255, 255));
    }
}
