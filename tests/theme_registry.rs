use ratatui::style::Color;
use termPlot::engine::{Args, PlotColor, ThemeEntry, ThemeRegistry};
use termPlot::plot::Plot;
use termPlot::ui::host::ThemeHost;
use termPlot::ui::synth::{auto_theme_name, ensure_registered};
use termPlot::ui::widgets::plot::PlotView;

fn entry(canvas: (u8, u8, u8)) -> ThemeEntry {
    ThemeEntry::new(
        PlotColor::Rgb(canvas.0, canvas.1, canvas.2),
        PlotColor::Rgb(0, 0, 0),
        PlotColor::name("default"),
        "bold",
        vec![PlotColor::Rgb(10, 20, 30), PlotColor::Rgb(40, 50, 60)],
    )
}

#[test]
fn registered_theme_reads_back_exactly() {
    let mut registry = ThemeRegistry::with_builtins();
    registry.register("t1", entry((1, 2, 3)));
    assert_eq!(registry.get("t1"), Some(&entry((1, 2, 3))));

    let mut plt = Plot::new();
    plt.call("plot", Args::new().arg(vec![1.0, 2.0, 3.0])).unwrap();
    plt.set_theme("t1");
    let ansi = plt.build(&registry).unwrap();
    assert!(ansi.contains("\u{1b}[48;2;1;2;3m"), "canvas colour of t1 not used");
}

#[test]
fn register_if_absent_keeps_existing_entry() {
    let mut registry = ThemeRegistry::new();
    assert!(registry.register_if_absent("t1", entry((1, 2, 3))));
    assert!(!registry.register_if_absent("t1", entry((9, 9, 9))));
    assert_eq!(registry.get("t1"), Some(&entry((1, 2, 3))));
}

#[test]
fn full_colour_variants_exist_for_every_builtin() {
    let registry = ThemeRegistry::with_builtins();
    let names: Vec<&str> = registry.names().collect();
    for name in ["default", "dark", "matrix", "windows"] {
        assert!(names.contains(&name));
        assert!(names.contains(&format!("tui-{name}").as_str()));
    }
}

#[test]
fn explicit_registration_does_not_overwrite() {
    let mut registry = ThemeRegistry::with_builtins();
    let host = ThemeHost::default();
    let name = ensure_registered(&mut registry, host.current()).unwrap();
    let before = registry.get(&name).cloned();

    let mut changed = host.current().clone();
    changed.set_variable("surface", Color::Rgb(1, 2, 3));
    ensure_registered(&mut registry, &changed).unwrap();
    assert_eq!(registry.get(&name).cloned(), before);
}

#[test]
fn ui_theme_change_overwrites_derived_theme() {
    let registry = ThemeRegistry::with_builtins().shared();
    let mut host = ThemeHost::default();
    let mut view = PlotView::new(registry.clone());
    view.mount(&mut host).unwrap();

    let name = auto_theme_name(&host.current().name);
    let before = registry.borrow().get(&name).cloned().unwrap();

    let mut changed = host.current().clone();
    changed.set_variable("surface", Color::Rgb(1, 2, 3));
    let ui_name = changed.name.clone();
    host.add_theme(changed);
    assert!(host.set_theme(&ui_name));

    view.render_text(30, 8, host.current()).unwrap();
    let after = registry.borrow().get(&name).cloned().unwrap();
    assert_ne!(before, after);
    assert_eq!(after.canvas, PlotColor::Rgb(1, 2, 3));
}
