//! Name-to-handler table of engine operations.
//!
//! The table is built once and never changes. Draw operations write into a
//! [`Figure`]; the safe functions return a value straight away and never
//! touch figure state.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::Value;

use super::args::{as_labels, as_rows, as_series, Args};
use super::color::PlotColor;
use super::error::PlotError;
use super::figure::{
    parse_marker, BarSeries, Figure, Orientation, RefAxis, RefLine, Scale, Series, SeriesKind,
};
use super::utility;

/// Whether an operation configures the figure or adds data to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpKind {
    Setting,
    Data,
}

pub type Handler = fn(&mut Figure, &Args) -> Result<(), PlotError>;
pub type SafeFn = fn(&Args) -> Result<Value, PlotError>;

#[derive(Debug)]
pub struct Operation {
    pub name: &'static str,
    pub kind: OpKind,
    handler: Handler,
}

impl Operation {
    pub fn apply(&self, figure: &mut Figure, args: &Args) -> Result<(), PlotError> {
        (self.handler)(figure, args)
    }
}

static OPERATIONS: Lazy<HashMap<&'static str, Operation>> = Lazy::new(|| {
    use OpKind::{Data, Setting};
    let table: [(&'static str, OpKind, Handler); 20] = [
        ("title", Setting, title),
        ("xlabel", Setting, xlabel),
        ("ylabel", Setting, ylabel),
        ("xlim", Setting, xlim),
        ("ylim", Setting, ylim),
        ("xscale", Setting, xscale),
        ("yscale", Setting, yscale),
        ("grid", Setting, grid),
        ("plotsize", Setting, plotsize),
        ("theme", Setting, theme),
        ("marker", Setting, marker),
        ("plot", Data, plot),
        ("scatter", Data, scatter),
        ("bar", Data, bar),
        ("multiple_bar", Data, multiple_bar),
        ("hist", Data, hist),
        ("matrix_plot", Data, matrix_plot),
        ("hline", Data, hline),
        ("vline", Data, vline),
        ("clear_data", Data, clear_data),
    ];
    table
        .into_iter()
        .map(|(name, kind, handler)| (name, Operation { name, kind, handler }))
        .collect()
});

static SAFE_FUNCTIONS: Lazy<HashMap<&'static str, SafeFn>> = Lazy::new(|| {
    let table: [(&'static str, SafeFn); 5] = [
        ("sin", safe_sin),
        ("square", safe_square),
        ("colorize", safe_colorize),
        ("uncolorize", safe_uncolorize),
        ("transpose", safe_transpose),
    ];
    table.into_iter().collect()
});

/// Resolve a draw operation by name.
pub fn lookup(name: &str) -> Result<&'static Operation, PlotError> {
    OPERATIONS
        .get(name)
        .ok_or_else(|| PlotError::NoSuchOperation(name.to_string()))
}

/// Resolve a function from the safe set, if `name` belongs to it.
pub fn safe_function(name: &str) -> Option<SafeFn> {
    SAFE_FUNCTIONS.get(name).copied()
}

pub fn is_safe(name: &str) -> bool {
    SAFE_FUNCTIONS.contains_key(name)
}

/// Every operation name the engine understands, sorted.
pub fn operation_names() -> Vec<&'static str> {
    let mut names: Vec<_> = OPERATIONS.keys().copied().collect();
    names.sort_unstable();
    names
}

fn title(fig: &mut Figure, args: &Args) -> Result<(), PlotError> {
    fig.title = Some(args.str_at("title", "label", 0)?);
    Ok(())
}

fn xlabel(fig: &mut Figure, args: &Args) -> Result<(), PlotError> {
    fig.xlabel = Some(args.str_at("xlabel", "label", 0)?);
    Ok(())
}

fn ylabel(fig: &mut Figure, args: &Args) -> Result<(), PlotError> {
    fig.ylabel = Some(args.str_at("ylabel", "label", 0)?);
    Ok(())
}

fn limits(op: &str, args: &Args) -> Result<(f64, f64), PlotError> {
    let lo = args.f64_at(op, "lower", 0)?;
    let hi = args.f64_at(op, "upper", 1)?;
    if lo >= hi {
        return Err(PlotError::bad(op, format!("lower limit {lo} is not below {hi}")));
    }
    Ok((lo, hi))
}

fn xlim(fig: &mut Figure, args: &Args) -> Result<(), PlotError> {
    fig.xlim = Some(limits("xlim", args)?);
    Ok(())
}

fn ylim(fig: &mut Figure, args: &Args) -> Result<(), PlotError> {
    fig.ylim = Some(limits("ylim", args)?);
    Ok(())
}

fn xscale(fig: &mut Figure, args: &Args) -> Result<(), PlotError> {
    fig.xscale = Scale::parse("xscale", &args.str_at("xscale", "scale", 0)?)?;
    Ok(())
}

fn yscale(fig: &mut Figure, args: &Args) -> Result<(), PlotError> {
    fig.yscale = Scale::parse("yscale", &args.str_at("yscale", "scale", 0)?)?;
    Ok(())
}

fn grid(fig: &mut Figure, args: &Args) -> Result<(), PlotError> {
    let horizontal = args.bool_or("grid", "horizontal", 0, true)?;
    let vertical = args.bool_or("grid", "vertical", 1, horizontal)?;
    fig.grid = (horizontal, vertical);
    Ok(())
}

fn plotsize(fig: &mut Figure, args: &Args) -> Result<(), PlotError> {
    let width = args.f64_at("plotsize", "width", 0)?;
    let height = args.f64_at("plotsize", "height", 1)?;
    if width < 0.0 || height < 0.0 {
        return Err(PlotError::bad("plotsize", "size must not be negative"));
    }
    fig.size = (width.min(u16::MAX as f64) as u16, height.min(u16::MAX as f64) as u16);
    Ok(())
}

fn theme(fig: &mut Figure, args: &Args) -> Result<(), PlotError> {
    fig.theme = args.str_at("theme", "theme", 0)?;
    Ok(())
}

fn marker(fig: &mut Figure, args: &Args) -> Result<(), PlotError> {
    fig.marker = parse_marker("marker", &args.str_at("marker", "marker", 0)?)?;
    Ok(())
}

fn color_kw(op: &str, args: &Args) -> Result<Option<PlotColor>, PlotError> {
    let color = match args.keyword.get("color") {
        None | Some(Value::Null) => return Ok(None),
        Some(v) => PlotColor::from_value(v),
    };
    color.map(Some).map_err(|e| match e {
        PlotError::UnsupportedColor(c) => PlotError::bad(op, format!("unsupported color {c}")),
        other => other,
    })
}

/// `([x,] y)`: with one sequence, x runs 1..=len.
fn xy_points(op: &str, args: &Args) -> Result<Vec<(f64, f64)>, PlotError> {
    match args.positional.as_slice() {
        [y] => Ok(as_series(op, y)?
            .into_iter()
            .enumerate()
            .map(|(i, v)| ((i + 1) as f64, v))
            .collect()),
        [x, y, ..] => {
            let xs = as_series(op, x)?;
            let ys = as_series(op, y)?;
            if xs.len() != ys.len() {
                return Err(PlotError::bad(
                    op,
                    format!("x has {} values but y has {}", xs.len(), ys.len()),
                ));
            }
            Ok(xs.into_iter().zip(ys).collect())
        }
        [] => Err(PlotError::bad(op, "missing data")),
    }
}

fn series(op: &str, kind: SeriesKind, fig: &mut Figure, args: &Args) -> Result<(), PlotError> {
    let points = xy_points(op, args)?;
    let marker = args
        .str_kw(op, "marker")?
        .map(|m| parse_marker(op, &m))
        .transpose()?;
    fig.add_series(Series {
        kind,
        points,
        label: args.str_kw(op, "label")?,
        color: color_kw(op, args)?,
        marker,
    });
    Ok(())
}

fn plot(fig: &mut Figure, args: &Args) -> Result<(), PlotError> {
    series("plot", SeriesKind::Line, fig, args)
}

fn scatter(fig: &mut Figure, args: &Args) -> Result<(), PlotError> {
    series("scatter", SeriesKind::Scatter, fig, args)
}

fn orientation_kw(op: &str, args: &Args) -> Result<Orientation, PlotError> {
    match args.str_kw(op, "orientation")? {
        Some(o) => Orientation::parse(op, &o),
        None => Ok(Orientation::Vertical),
    }
}

fn bar(fig: &mut Figure, args: &Args) -> Result<(), PlotError> {
    let (categories, values) = match args.positional.as_slice() {
        [values] => {
            let values = as_series("bar", values)?;
            let categories = (1..=values.len()).map(|i| i.to_string()).collect();
            (categories, values)
        }
        [labels, values, ..] => (as_labels("bar", labels)?, as_series("bar", values)?),
        [] => return Err(PlotError::bad("bar", "missing data")),
    };
    if categories.len() != values.len() {
        return Err(PlotError::bad(
            "bar",
            format!("{} labels for {} values", categories.len(), values.len()),
        ));
    }
    let series = BarSeries {
        values,
        label: args.str_kw("bar", "label")?,
        color: color_kw("bar", args)?,
    };
    fig.add_bars(categories, vec![series], orientation_kw("bar", args)?);
    Ok(())
}

fn multiple_bar(fig: &mut Figure, args: &Args) -> Result<(), PlotError> {
    let op = "multiple_bar";
    let labels_arg = args.get(0).ok_or_else(|| PlotError::bad(op, "missing labels"))?;
    let categories = as_labels(op, labels_arg)?;
    let rows = as_rows(op, args.get(1).ok_or_else(|| PlotError::bad(op, "missing data"))?)?;
    let labels = match args.keyword.get("labels") {
        Some(v) => as_labels(op, v)?,
        None => Vec::new(),
    };
    let mut series = Vec::with_capacity(rows.len());
    for (i, values) in rows.into_iter().enumerate() {
        if values.len() != categories.len() {
            return Err(PlotError::bad(
                op,
                format!("row {i} has {} values for {} labels", values.len(), categories.len()),
            ));
        }
        series.push(BarSeries {
            values,
            label: labels.get(i).cloned(),
            color: None,
        });
    }
    fig.add_bars(categories, series, orientation_kw(op, args)?);
    Ok(())
}

fn hist(fig: &mut Figure, args: &Args) -> Result<(), PlotError> {
    let op = "hist";
    let data = as_series(op, args.get(0).ok_or_else(|| PlotError::bad(op, "missing data"))?)?;
    let bins = args.f64_or(op, "bins", 1, 10.0)?;
    if bins < 1.0 {
        return Err(PlotError::bad(op, "bins must be at least 1"));
    }
    fig.add_series(Series {
        kind: SeriesKind::Histogram,
        points: histogram(&data, bins as usize),
        label: args.str_kw(op, "label")?,
        color: color_kw(op, args)?,
        marker: None,
    });
    Ok(())
}

/// Bin centres paired with counts.
pub(crate) fn histogram(data: &[f64], bins: usize) -> Vec<(f64, f64)> {
    let finite: Vec<f64> = data.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 {
        return Vec::new();
    }
    let lo = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = if hi > lo { (hi - lo) / bins as f64 } else { 1.0 };
    let mut counts = vec![0usize; bins];
    for v in finite {
        let i = (((v - lo) / width) as usize).min(bins - 1);
        counts[i] += 1;
    }
    counts
        .into_iter()
        .enumerate()
        .map(|(i, c)| (lo + width * (i as f64 + 0.5), c as f64))
        .collect()
}

fn matrix_plot(fig: &mut Figure, args: &Args) -> Result<(), PlotError> {
    let op = "matrix_plot";
    let rows = as_rows(op, args.get(0).ok_or_else(|| PlotError::bad(op, "missing matrix"))?)?;
    let width = rows.first().map(Vec::len).unwrap_or(0);
    if rows.iter().any(|r| r.len() != width) {
        return Err(PlotError::bad(op, "matrix rows must have equal length"));
    }
    fig.matrix = Some(rows);
    Ok(())
}

fn ref_line(op: &str, axis: RefAxis, fig: &mut Figure, args: &Args) -> Result<(), PlotError> {
    let at = args.f64_at(op, "coordinate", 0)?;
    let color = match args.lookup("color", 1) {
        None | Some(Value::Null) => None,
        Some(v) => Some(PlotColor::from_value(v)?),
    };
    fig.ref_lines.push(RefLine { axis, at, color });
    Ok(())
}

fn hline(fig: &mut Figure, args: &Args) -> Result<(), PlotError> {
    ref_line("hline", RefAxis::Horizontal, fig, args)
}

fn vline(fig: &mut Figure, args: &Args) -> Result<(), PlotError> {
    ref_line("vline", RefAxis::Vertical, fig, args)
}

fn clear_data(fig: &mut Figure, _args: &Args) -> Result<(), PlotError> {
    fig.clear_data();
    Ok(())
}

fn usize_or(
    op: &str,
    args: &Args,
    key: &str,
    index: usize,
    fallback: usize,
) -> Result<usize, PlotError> {
    let v = args.f64_or(op, key, index, fallback as f64)?;
    if v < 0.0 {
        return Err(PlotError::bad(op, format!("`{key}` must not be negative")));
    }
    Ok(v as usize)
}

fn safe_sin(args: &Args) -> Result<Value, PlotError> {
    let op = "sin";
    let wave = utility::sin(
        args.f64_or(op, "periods", 0, 2.0)?,
        usize_or(op, args, "length", 1, 200)?,
        args.f64_or(op, "amplitude", 2, 1.0)?,
        args.f64_or(op, "phase", 3, 0.0)?,
        args.f64_or(op, "decay", 4, 0.0)?,
    );
    Ok(Value::from(wave))
}

fn safe_square(args: &Args) -> Result<Value, PlotError> {
    let op = "square";
    let wave = utility::square(
        args.f64_or(op, "periods", 0, 2.0)?,
        usize_or(op, args, "length", 1, 200)?,
        args.f64_or(op, "amplitude", 2, 1.0)?,
    );
    Ok(Value::from(wave))
}

fn optional_color(args: &Args, key: &str, index: usize) -> Result<Option<PlotColor>, PlotError> {
    match args.lookup(key, index) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => PlotColor::from_value(v).map(Some),
    }
}

fn safe_colorize(args: &Args) -> Result<Value, PlotError> {
    let op = "colorize";
    let text = args.str_at(op, "string", 0)?;
    let fg = optional_color(args, "fullground", 1)?;
    let style = match args.lookup("style", 2) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            return Err(PlotError::bad(op, format!("`style` must be a string, got {other}")))
        }
    };
    let bg = optional_color(args, "background", 3)?;
    utility::colorize(&text, fg.as_ref(), style.as_deref(), bg.as_ref()).map(Value::from)
}

fn safe_uncolorize(args: &Args) -> Result<Value, PlotError> {
    let text = args.str_at("uncolorize", "string", 0)?;
    Ok(Value::from(utility::uncolorize(&text)))
}

fn safe_transpose(args: &Args) -> Result<Value, PlotError> {
    let op = "transpose";
    let rows = match args.get(0) {
        Some(Value::Array(rows)) => rows
            .iter()
            .map(|row| match row {
                Value::Array(cells) => Ok(cells.clone()),
                other => Err(PlotError::bad(op, format!("expected a row, got {other}"))),
            })
            .collect::<Result<Vec<_>, _>>()?,
        Some(other) => return Err(PlotError::bad(op, format!("expected rows, got {other}"))),
        None => return Err(PlotError::bad(op, "missing data")),
    };
    Ok(Value::Array(
        utility::transpose(&rows).into_iter().map(Value::Array).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_name_fails_fast() {
        assert_eq!(
            lookup("pie").unwrap_err(),
            PlotError::NoSuchOperation("pie".to_string())
        );
    }

    #[test]
    fn safe_set_is_disjoint_from_operations() {
        for name in ["sin", "square", "colorize", "uncolorize", "transpose"] {
            assert!(is_safe(name));
            assert!(lookup(name).is_err());
        }
    }

    #[test]
    fn plot_with_single_sequence_numbers_from_one() {
        let mut fig = Figure::new();
        lookup("plot")
            .unwrap()
            .apply(&mut fig, &Args::new().arg(vec![5.0, 6.0]))
            .unwrap();
        assert_eq!(fig.series[0].points, vec![(1.0, 5.0), (2.0, 6.0)]);
    }

    #[test]
    fn plot_rejects_mismatched_lengths() {
        let mut fig = Figure::new();
        let args = Args::new().arg(vec![1.0, 2.0]).arg(vec![1.0]);
        assert!(matches!(
            lookup("plot").unwrap().apply(&mut fig, &args),
            Err(PlotError::BadArgument { .. })
        ));
    }

    #[test]
    fn histogram_counts_every_finite_value() {
        let bins = histogram(&[0.0, 0.5, 1.0, 1.0, f64::NAN], 2);
        assert_eq!(bins, vec![(0.25, 1.0), (0.75, 3.0)]);
    }

    #[test]
    fn sin_by_keyword() {
        let f = safe_function("sin").unwrap();
        let v = f(&Args::new().kw("length", 5)).unwrap();
        assert_eq!(v.as_array().map(Vec::len), Some(5));
    }

    #[test]
    fn transpose_through_table() {
        let f = safe_function("transpose").unwrap();
        let v = f(&Args::new().arg(json!([[1, 2], [3, 4]]))).unwrap();
        assert_eq!(v, json!([[1, 3], [2, 4]]));
    }

    #[test]
    fn grid_with_one_flag_applies_to_both() {
        let mut fig = Figure::new();
        lookup("grid").unwrap().apply(&mut fig, &Args::new().arg(true)).unwrap();
        assert_eq!(fig.grid, (true, true));
    }
}
