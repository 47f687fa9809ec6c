//! UI themes: named colour variables the widgets style themselves with.
//!
//! A theme is built from nine base tokens. The `text-*` tokens are derived by
//! pulling each accent colour towards the foreground so it stays readable on
//! the surface; a theme file may override any variable afterwards.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Tokens every theme must define.
pub const BASE_TOKENS: [&str; 9] = [
    "surface",
    "foreground",
    "background",
    "primary",
    "secondary",
    "accent",
    "success",
    "warning",
    "error",
];

/// Tokens that get a derived `text-<token>` counterpart.
const TEXT_SOURCES: [&str; 6] = ["primary", "secondary", "accent", "success", "warning", "error"];

const TEXT_BLEND: f32 = 0.25;

#[derive(Debug, Error)]
pub enum ThemeFileError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid theme file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("missing palette color `{0}`")]
    MissingColor(String),
    #[error("`{token}` is not a hex color: {value}")]
    InvalidColor { token: String, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct UiTheme {
    pub name: String,
    pub dark: bool,
    variables: BTreeMap<String, Color>,
}

#[derive(Deserialize)]
struct ThemeFile {
    name: String,
    #[serde(default = "default_dark")]
    dark: bool,
    palette: BTreeMap<String, String>,
    #[serde(default)]
    variables: BTreeMap<String, String>,
}

fn default_dark() -> bool {
    true
}

impl UiTheme {
    /// Build a theme from base colours and derive the `text-*` tokens.
    pub fn from_palette<'a>(
        name: &str,
        dark: bool,
        palette: impl IntoIterator<Item = (&'a str, Color)>,
    ) -> Self {
        let mut theme = Self {
            name: name.to_string(),
            dark,
            variables: palette
                .into_iter()
                .map(|(token, color)| (token.to_string(), color))
                .collect(),
        };
        theme.derive_text_tokens();
        theme
    }

    fn derive_text_tokens(&mut self) {
        let Some(foreground) = self.variable("foreground") else {
            return;
        };
        for token in TEXT_SOURCES {
            let key = format!("text-{token}");
            if self.variables.contains_key(&key) {
                continue;
            }
            if let Some(color) = self.variable(token) {
                self.variables.insert(key, blend(color, foreground, TEXT_BLEND));
            }
        }
    }

    /// Parse a theme file: `name`, optional `dark`, a `[palette]` of hex
    /// base tokens and optional `[variables]` overrides.
    pub fn from_toml(s: &str) -> Result<Self, ThemeFileError> {
        let file: ThemeFile = toml::from_str(s)?;
        let mut base = Vec::with_capacity(BASE_TOKENS.len());
        for token in BASE_TOKENS {
            let value = file
                .palette
                .get(token)
                .ok_or_else(|| ThemeFileError::MissingColor(token.to_string()))?;
            base.push((token, parse_token(token, value)?));
        }
        let mut theme = Self::from_palette(&file.name, file.dark, base);
        for (token, value) in &file.variables {
            let color = parse_token(token, value)?;
            theme.set_variable(token, color);
        }
        Ok(theme)
    }

    pub fn variable(&self, name: &str) -> Option<Color> {
        self.variables.get(name).copied()
    }

    pub fn set_variable(&mut self, name: &str, color: Color) {
        self.variables.insert(name.to_string(), color);
    }

    pub fn variables(&self) -> impl Iterator<Item = (&str, Color)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// The UI themes shipped with the crate.
pub fn builtin_themes() -> Vec<UiTheme> {
    let table: [(&str, bool, [&str; 9]); 5] = [
        (
            "dark",
            true,
            [
                "#1e1e1e", "#e0e0e0", "#121212", "#0178d4", "#004578",
                "#ffa62b", "#4ebf71", "#ffa62b", "#ba3c5b",
            ],
        ),
        (
            "light",
            false,
            [
                "#d8d8d8", "#1f1f1f", "#e0e0e0", "#004578", "#0178d4",
                "#cc6f00", "#2e7d32", "#b26a00", "#ba3c5b",
            ],
        ),
        (
            "nord",
            true,
            [
                "#3b4252", "#d8dee9", "#2e3440", "#88c0d0", "#81a1c1",
                "#b48ead", "#a3be8c", "#ebcb8b", "#bf616a",
            ],
        ),
        (
            "gruvbox",
            true,
            [
                "#3c3836", "#fbf1c7", "#282828", "#85a598", "#fabd2f",
                "#fabd2f", "#b8bb26", "#fe8019", "#fb4934",
            ],
        ),
        (
            "dracula",
            true,
            [
                "#2b2e3b", "#f8f8f2", "#282a36", "#bd93f9", "#6272a4",
                "#ff79c6", "#50fa7b", "#ffb86c", "#ff5555",
            ],
        ),
    ];
    table
        .iter()
        .map(|(name, dark, hexes)| {
            let palette = BASE_TOKENS
                .iter()
                .zip(hexes.iter())
                .map(|(token, hex)| (*token, parse_hex(hex).unwrap_or(Color::Reset)));
            UiTheme::from_palette(name, *dark, palette)
        })
        .collect()
}

pub fn load_theme_file(path: &Path) -> Result<UiTheme, ThemeFileError> {
    let s = fs::read_to_string(path).map_err(|source| ThemeFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    UiTheme::from_toml(&s)
}

/// Load every `*.toml` theme in `dir`, sorted by file name. Unreadable or
/// invalid files are logged and skipped.
pub fn load_theme_dir(dir: &Path) -> Vec<UiTheme> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("no theme directory at {}: {}", dir.display(), e);
            return Vec::new();
        }
    };
    let mut paths: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    paths.sort();
    paths
        .iter()
        .filter_map(|path| match load_theme_file(path) {
            Ok(theme) => Some(theme),
            Err(e) => {
                warn!("skipping theme {}: {}", path.display(), e);
                None
            }
        })
        .collect()
}

fn parse_token(token: &str, value: &str) -> Result<Color, ThemeFileError> {
    parse_hex(value).ok_or_else(|| ThemeFileError::InvalidColor {
        token: token.to_string(),
        value: value.to_string(),
    })
}

pub fn parse_hex(s: &str) -> Option<Color> {
    let s = s.trim_start_matches('#');
    if s.len() != 6 || !s.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Mix `amount` of `toward` into `color`; non-RGB colours are returned as is.
pub fn blend(color: Color, toward: Color, amount: f32) -> Color {
    match (color, toward) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * amount).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => color,
    }
}
