//! Engine colours and their coercion to RGB.
//!
//! An engine colour is a name (`"red"`, `"blue+"`, `"default"`), an index
//! into the 256-colour palette, or an RGB triple. Themes stored in the
//! registry are normally coerced to RGB so they render identically on any
//! truecolour terminal.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::PlotError;

/// Marker meaning "use the terminal default".
pub const DEFAULT: &str = "default";

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlotColor {
    Index(u8),
    Rgb(u8, u8, u8),
    Name(String),
}

impl PlotColor {
    pub fn default_color() -> Self {
        PlotColor::Name(DEFAULT.to_string())
    }

    pub fn name(name: &str) -> Self {
        PlotColor::Name(name.to_string())
    }

    pub fn is_default(&self) -> bool {
        matches!(self, PlotColor::Name(n) if n == DEFAULT)
    }

    /// Read a colour from an operation argument: a name, an index or `[r, g, b]`.
    pub fn from_value(v: &Value) -> Result<Self, PlotError> {
        match v {
            Value::String(s) => Ok(PlotColor::Name(s.clone())),
            Value::Number(n) => n
                .as_u64()
                .and_then(|i| u8::try_from(i).ok())
                .map(PlotColor::Index)
                .ok_or_else(|| PlotError::UnsupportedColor(n.to_string())),
            Value::Array(parts) if parts.len() == 3 => {
                let mut rgb = [0u8; 3];
                for (slot, part) in rgb.iter_mut().zip(parts) {
                    *slot = part
                        .as_u64()
                        .and_then(|c| u8::try_from(c).ok())
                        .ok_or_else(|| PlotError::UnsupportedColor(v.to_string()))?;
                }
                Ok(PlotColor::Rgb(rgb[0], rgb[1], rgb[2]))
            }
            other => Err(PlotError::UnsupportedColor(other.to_string())),
        }
    }
}

impl std::fmt::Display for PlotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlotColor::Index(i) => write!(f, "{i}"),
            PlotColor::Rgb(r, g, b) => write!(f, "({r}, {g}, {b})"),
            PlotColor::Name(n) => f.write_str(n),
        }
    }
}

const COLOR_NAMES: [&str; 8] = [
    "black", "red", "green", "orange", "blue", "magenta", "cyan", "white",
];

const SYSTEM_COLORS: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (128, 0, 0),
    (0, 128, 0),
    (128, 128, 0),
    (0, 0, 128),
    (128, 0, 128),
    (0, 128, 128),
    (192, 192, 192),
    (128, 128, 128),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (0, 0, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

const CUBE_STEPS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// RGB value of a 256-colour palette index.
pub fn palette_rgb(index: u8) -> (u8, u8, u8) {
    match index {
        0..=15 => SYSTEM_COLORS[index as usize],
        16..=231 => {
            let i = index - 16;
            (
                CUBE_STEPS[(i / 36) as usize],
                CUBE_STEPS[((i / 6) % 6) as usize],
                CUBE_STEPS[(i % 6) as usize],
            )
        }
        _ => {
            let level = 8 + 10 * (index - 232);
            (level, level, level)
        }
    }
}

/// Palette code for an engine colour name; `+` selects the bright variant.
pub fn color_code(name: &str) -> Option<u8> {
    let (base, bright) = match name.strip_suffix('+') {
        Some(base) => (base, 8),
        None => (name, 0),
    };
    COLOR_NAMES
        .iter()
        .position(|n| *n == base)
        .map(|i| i as u8 + bright)
}

// The engine never defines these two, so they map onto the nearest palette name.
fn substitute(name: &str) -> &str {
    match name {
        "yellow" => "orange",
        "gold" => "orange+",
        other => other,
    }
}

/// Coerce any engine colour into an RGB triple, leaving `"default"` alone.
pub fn rgbify(color: &PlotColor) -> Result<PlotColor, PlotError> {
    match color {
        PlotColor::Rgb(..) => Ok(color.clone()),
        PlotColor::Name(name) if name == DEFAULT => Ok(color.clone()),
        PlotColor::Name(name) => {
            let code = color_code(substitute(name))
                .ok_or_else(|| PlotError::UnsupportedColor(name.clone()))?;
            rgbify(&PlotColor::Index(code))
        }
        PlotColor::Index(i) => {
            let (r, g, b) = palette_rgb(*i);
            Ok(PlotColor::Rgb(r, g, b))
        }
    }
}

/// Map an engine colour onto the terminal colour ratatui draws with.
pub fn to_ratatui(color: &PlotColor) -> Result<Color, PlotError> {
    match color {
        PlotColor::Rgb(r, g, b) => Ok(Color::Rgb(*r, *g, *b)),
        PlotColor::Index(i) => Ok(Color::Indexed(*i)),
        PlotColor::Name(name) if name == DEFAULT => Ok(Color::Reset),
        PlotColor::Name(name) => color_code(substitute(name))
            .map(Color::Indexed)
            .ok_or_else(|| PlotError::UnsupportedColor(name.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn palette_edges() {
        assert_eq!(palette_rgb(0), (0, 0, 0));
        assert_eq!(palette_rgb(16), (0, 0, 0));
        assert_eq!(palette_rgb(21), (0, 0, 255));
        assert_eq!(palette_rgb(231), (255, 255, 255));
        assert_eq!(palette_rgb(232), (8, 8, 8));
        assert_eq!(palette_rgb(255), (238, 238, 238));
    }

    #[test]
    fn bright_names() {
        assert_eq!(color_code("red"), Some(1));
        assert_eq!(color_code("red+"), Some(9));
        assert_eq!(color_code("white+"), Some(15));
        assert_eq!(color_code("purple"), None);
    }

    #[test]
    fn gold_is_bright_orange() {
        assert_eq!(
            rgbify(&PlotColor::name("gold")).unwrap(),
            PlotColor::Rgb(255, 255, 0)
        );
    }

    #[test]
    fn from_value_shapes() {
        assert_eq!(PlotColor::from_value(&json!("red")).unwrap(), PlotColor::name("red"));
        assert_eq!(PlotColor::from_value(&json!(42)).unwrap(), PlotColor::Index(42));
        assert_eq!(
            PlotColor::from_value(&json!([1, 2, 3])).unwrap(),
            PlotColor::Rgb(1, 2, 3)
        );
        assert!(PlotColor::from_value(&json!(300)).is_err());
        assert!(PlotColor::from_value(&json!([1, 2])).is_err());
    }

    #[test]
    fn default_draws_as_reset() {
        assert_eq!(to_ratatui(&PlotColor::default_color()).unwrap(), Color::Reset);
    }
}
