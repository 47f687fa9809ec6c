use termPlot::engine::color::{palette_rgb, rgbify};
use termPlot::engine::{PlotColor, PlotError};

#[test]
fn rgb_is_left_alone() {
    let c = PlotColor::Rgb(12, 34, 56);
    assert_eq!(rgbify(&c).unwrap(), c);
}

#[test]
fn default_stays_default() {
    assert_eq!(
        rgbify(&PlotColor::name("default")).unwrap(),
        PlotColor::name("default")
    );
}

#[test]
fn every_index_maps_through_the_palette() {
    for i in 0..=255u8 {
        let (r, g, b) = palette_rgb(i);
        assert_eq!(rgbify(&PlotColor::Index(i)).unwrap(), PlotColor::Rgb(r, g, b));
    }
}

#[test]
fn yellow_is_orange() {
    assert_eq!(
        rgbify(&PlotColor::name("yellow")).unwrap(),
        rgbify(&PlotColor::name("orange")).unwrap()
    );
}

#[test]
fn unknown_name_is_unsupported() {
    assert_eq!(
        rgbify(&PlotColor::name("chartreuse")).unwrap_err(),
        PlotError::UnsupportedColor("chartreuse".into())
    );
}

#[test]
fn full_colour_registry_entries_are_rgb() {
    let registry = termPlot::ThemeRegistry::with_builtins();
    let is_rgb = |c: &PlotColor| matches!(c, PlotColor::Rgb(..)) || c.is_default();
    for name in registry.names().filter(|n| n.starts_with("tui-")) {
        let entry = registry.get(name).unwrap();
        assert!(is_rgb(&entry.canvas), "{name} canvas");
        assert!(is_rgb(&entry.axes), "{name} axes");
        assert!(is_rgb(&entry.ticks), "{name} ticks");
        assert!(entry.data.iter().all(is_rgb), "{name} data");
    }
}
