use std::fs;
use std::path::PathBuf;

use ratatui::style::Color;
use termPlot::ui::themes::{load_theme_dir, load_theme_file, ThemeFileError, UiTheme};

fn resource(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("resources/themes")
        .join(name)
}

#[test]
fn load_ocean_theme_from_file() {
    let t = load_theme_file(&resource("ocean.toml")).expect("parse");
    assert_eq!(t.name, "ocean");
    assert!(t.dark);
    assert_eq!(t.variable("surface"), Some(Color::Rgb(0x1b, 0x2b, 0x34)));
    assert!(t.variable("text-primary").is_some());
}

#[test]
fn variables_override_derived_tokens() {
    let t = load_theme_file(&resource("paper.toml")).expect("parse");
    assert!(!t.dark);
    assert_eq!(t.variable("text-accent"), Some(Color::Rgb(0x8a, 0x3a, 0x0c)));
}

#[test]
fn missing_palette_color_is_named() {
    let s = "name = \"x\"\n[palette]\nsurface = \"#000000\"\n";
    match UiTheme::from_toml(s) {
        Err(ThemeFileError::MissingColor(token)) => assert_eq!(token, "foreground"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn theme_dir_skips_invalid_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::copy(resource("ocean.toml"), dir.path().join("ocean.toml")).unwrap();
    fs::write(dir.path().join("broken.toml"), "name = ").unwrap();
    fs::write(dir.path().join("notes.txt"), "not a theme").unwrap();

    let themes = load_theme_dir(dir.path());
    let names: Vec<_> = themes.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["ocean"]);
}

#[test]
fn missing_dir_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_theme_dir(&dir.path().join("absent")).is_empty());
}
