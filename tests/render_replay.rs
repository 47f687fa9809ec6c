use ratatui::text::Line;
use serde_json::json;
use termPlot::engine::utility::uncolorize;
use termPlot::engine::{Args, PlotError, ThemeRegistry};
use termPlot::plot::Plot;

fn sine_plot() -> Plot {
    let mut plt = Plot::new();
    plt.call("plot", Args::new().arg(Plot::sin(2.0, 200, 1.0, 0.0, 0.0)))
        .unwrap()
        .call("title", Args::new().arg("Line Plot"))
        .unwrap();
    plt
}

#[test]
fn replay_is_deterministic() {
    let registry = ThemeRegistry::with_builtins();
    let mut plt = sine_plot();
    let first = plt.build(&registry).unwrap();
    let second = plt.build(&registry).unwrap();
    assert_eq!(first, second);
}

#[test]
fn plot_with_title_differs_from_empty_plot() {
    let registry = ThemeRegistry::with_builtins();
    let mut plt = sine_plot();
    plt.set_size(80, 24);
    let drawn = plt.build(&registry).unwrap();

    let mut empty = Plot::new();
    empty.set_size(80, 24);
    let blank = empty.build(&registry).unwrap();

    assert!(!drawn.is_empty());
    assert_ne!(drawn, blank);
    let plain = uncolorize(&drawn);
    assert_eq!(plain.lines().count(), 24);
    assert!(plain.lines().next().unwrap().contains("Line Plot"));
}

#[test]
fn zero_sized_figure_renders_nothing() {
    let registry = ThemeRegistry::with_builtins();
    let mut plt = sine_plot();
    plt.set_size(0, 0);
    assert_eq!(plt.build(&registry).unwrap(), "");
}

#[test]
fn facade_size_wins_over_recorded_plotsize() {
    let registry = ThemeRegistry::with_builtins();
    let mut plt = sine_plot();
    plt.call("plotsize", Args::new().arg(100).arg(30)).unwrap();
    plt.set_size(30, 6);
    let plain = uncolorize(&plt.build(&registry).unwrap());
    assert_eq!(plain.lines().count(), 6);
}

#[test]
fn unknown_theme_is_reported() {
    let registry = ThemeRegistry::with_builtins();
    let mut plt = sine_plot();
    plt.set_theme("no-such-theme");
    assert_eq!(
        plt.build(&registry).unwrap_err(),
        PlotError::UnknownTheme("no-such-theme".into())
    );
}

#[test]
fn bars_show_their_categories() {
    let registry = ThemeRegistry::with_builtins();
    let mut plt = Plot::new();
    plt.call(
        "bar",
        Args::new()
            .arg(json!(["ab", "cd"]))
            .arg(json!([3, 5]))
            .kw("label", "count"),
    )
    .unwrap();
    plt.set_size(40, 12);
    let plain = uncolorize(&plt.build(&registry).unwrap());
    assert!(plain.contains("ab"));
    assert!(plain.contains("cd"));
    assert!(plain.contains("count"));
}

#[test]
fn clear_data_keeps_the_title() {
    let registry = ThemeRegistry::with_builtins();
    let mut plt = sine_plot();
    plt.clear_data();
    plt.set_size(40, 10);
    let plain = uncolorize(&plt.build(&registry).unwrap());
    assert!(plain.contains("Line Plot"));
}

#[test]
fn every_operation_builds() {
    let registry = ThemeRegistry::with_builtins();
    let mut plt = Plot::new();
    plt.call("scatter", Args::new().arg(vec![1.0, 2.0, 3.0]).arg(vec![1.0, 10.0, 100.0]))
        .unwrap()
        .call("yscale", Args::new().arg("log"))
        .unwrap()
        .call("hist", Args::new().arg(vec![1.0, 2.0, 2.0, 3.0]).kw("bins", 3))
        .unwrap()
        .call("hline", Args::new().arg(1.5).arg("red"))
        .unwrap()
        .call("vline", Args::new().arg(2))
        .unwrap()
        .call("grid", Args::new().arg(true))
        .unwrap()
        .call("marker", Args::new().arg("dot"))
        .unwrap()
        .call("theme", Args::new().arg("tui-matrix"))
        .unwrap()
        .call("xlabel", Args::new().arg("x"))
        .unwrap()
        .call("ylabel", Args::new().arg("y"))
        .unwrap();
    plt.set_size(60, 20);
    assert!(!plt.build(&registry).unwrap().is_empty());
}

#[test]
fn huge_bar_counts_still_render() {
    let registry = ThemeRegistry::with_builtins();
    for count in [40_000, 65_536] {
        let mut plt = Plot::new();
        plt.call("bar", Args::new().arg(vec![1.0; count])).unwrap();
        plt.set_size(80, 24);
        let plain = uncolorize(&plt.build(&registry).unwrap());
        assert_eq!(plain.lines().count(), 24);
    }
}

#[test]
fn wide_title_keeps_the_figure_width() {
    let registry = ThemeRegistry::with_builtins();
    let mut plt = Plot::new();
    plt.call("title", Args::new().arg("日本語タイトル")).unwrap();
    plt.set_size(40, 5);
    let plain = uncolorize(&plt.build(&registry).unwrap());
    for line in plain.lines() {
        assert_eq!(Line::from(line).width(), 40, "{line:?}");
    }
}

#[test]
fn gaps_in_a_series_are_skipped() {
    let registry = ThemeRegistry::with_builtins();
    let mut plt = Plot::new();
    plt.call("plot", Args::new().arg(vec![1.0, f64::NAN, 3.0]))
        .unwrap()
        .call("hist", Args::new().arg(vec![1.0, f64::INFINITY, 2.0]))
        .unwrap();
    plt.set_size(40, 10);
    assert!(plt.build(&registry).is_ok());
}
