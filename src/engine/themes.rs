//! Engine themes and the registry that resolves them by name.
//!
//! A theme is `(canvas, axes, ticks, tick style, data colours)`. The data
//! colours are handed out in order to series that do not name a colour.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::color::{rgbify, PlotColor};
use super::error::PlotError;

/// Prefix of the full-colour counterparts of the built-in themes.
pub const FULL_COLOR_PREFIX: &str = "tui-";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeEntry {
    pub canvas: PlotColor,
    pub axes: PlotColor,
    pub ticks: PlotColor,
    pub tick_style: String,
    pub data: Vec<PlotColor>,
}

impl ThemeEntry {
    pub fn new(
        canvas: PlotColor,
        axes: PlotColor,
        ticks: PlotColor,
        tick_style: &str,
        data: Vec<PlotColor>,
    ) -> Self {
        Self {
            canvas,
            axes,
            ticks,
            tick_style: tick_style.to_string(),
            data,
        }
    }

    /// The same theme with every colour coerced to RGB.
    pub fn rgbify(&self) -> Result<Self, PlotError> {
        Ok(Self {
            canvas: rgbify(&self.canvas)?,
            axes: rgbify(&self.axes)?,
            ticks: rgbify(&self.ticks)?,
            tick_style: self.tick_style.clone(),
            data: self.data.iter().map(rgbify).collect::<Result<_, _>>()?,
        })
    }
}

/// Process-wide theme table shared by every plot widget.
pub type SharedRegistry = Rc<RefCell<ThemeRegistry>>;

#[derive(Clone, Debug, Default)]
pub struct ThemeRegistry {
    entries: BTreeMap<String, ThemeEntry>,
}

impl ThemeRegistry {
    /// An empty registry; most callers want [`ThemeRegistry::with_builtins`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in themes and their full-colour variants.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (name, entry) in builtin_themes() {
            registry.register(name, entry);
        }

        let rgb_default = ThemeEntry::new(
            PlotColor::default_color(),
            PlotColor::default_color(),
            PlotColor::default_color(),
            "default",
            FULL_COLOR_SEQUENCE
                .iter()
                .map(|&(r, g, b)| PlotColor::Rgb(r, g, b))
                .collect(),
        );
        let rgb_clear = ThemeEntry::new(
            PlotColor::default_color(),
            PlotColor::default_color(),
            PlotColor::default_color(),
            "default",
            vec![PlotColor::default_color()],
        );

        for (name, entry) in builtin_themes() {
            let derived = match name {
                "default" | "pro" => Ok(rgb_default.clone()),
                "clear" => Ok(rgb_clear.clone()),
                _ => entry.rgbify(),
            };
            match derived {
                Ok(derived) => registry.register(&format!("{FULL_COLOR_PREFIX}{name}"), derived),
                Err(e) => warn!("skipping full-colour variant of `{}`: {}", name, e),
            }
        }
        registry
    }

    /// Wrap the registry for sharing between widgets on the UI thread.
    pub fn shared(self) -> SharedRegistry {
        Rc::new(RefCell::new(self))
    }

    pub fn get(&self, name: &str) -> Option<&ThemeEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Insert or overwrite `name`.
    pub fn register(&mut self, name: &str, entry: ThemeEntry) {
        self.entries.insert(name.to_string(), entry);
    }

    /// Insert `name` only when it is not registered yet. Returns whether it was inserted.
    pub fn register_if_absent(&mut self, name: &str, entry: ThemeEntry) -> bool {
        if self.entries.contains_key(name) {
            return false;
        }
        self.entries.insert(name.to_string(), entry);
        true
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Curated data colours that read well on both light and dark surfaces.
pub const FULL_COLOR_SEQUENCE: [(u8, u8, u8); 20] = [
    (0, 130, 200),
    (60, 180, 75),
    (230, 25, 75),
    (255, 225, 25),
    (245, 130, 48),
    (145, 30, 180),
    (70, 240, 240),
    (240, 50, 230),
    (180, 225, 40),
    (250, 190, 212),
    (0, 128, 128),
    (220, 190, 255),
    (170, 110, 40),
    (235, 230, 180),
    (128, 0, 0),
    (170, 255, 195),
    (128, 128, 0),
    (255, 215, 180),
    (0, 0, 245),
    (128, 128, 128),
];

/// Names of the engine's built-in themes, in registration order.
pub const BUILTIN_THEME_NAMES: [&str; 16] = [
    "clear", "dark", "default", "dreamland", "elegant", "girly", "grandpa", "matrix", "mature",
    "pro", "retro", "sahara", "salad", "scream", "serious", "windows",
];

fn n(name: &str) -> PlotColor {
    PlotColor::name(name)
}

fn names(list: &[&str]) -> Vec<PlotColor> {
    list.iter().map(|c| n(c)).collect()
}

fn indexes(list: &[u8]) -> Vec<PlotColor> {
    list.iter().map(|&i| PlotColor::Index(i)).collect()
}

fn standard_sequence() -> Vec<PlotColor> {
    names(&["blue+", "green+", "red+", "cyan+", "magenta+", "yellow", "white"])
}

/// Canvas and axes share one colour in every built-in theme.
fn theme(
    surface: PlotColor,
    ticks: PlotColor,
    tick_style: &str,
    data: Vec<PlotColor>,
) -> ThemeEntry {
    ThemeEntry::new(surface.clone(), surface, ticks, tick_style, data)
}

fn builtin_themes() -> Vec<(&'static str, ThemeEntry)> {
    use PlotColor::{Index, Rgb};
    vec![
        ("clear", theme(n("default"), n("default"), "default", names(&["default"]))),
        (
            "dark",
            theme(
                n("black"),
                n("white"),
                "default",
                names(&["cyan+", "orange+", "magenta+", "green+", "red+", "blue+"]),
            ),
        ),
        ("default", theme(n("white"), n("black"), "default", standard_sequence())),
        (
            "dreamland",
            theme(Index(105), n("black"), "bold", indexes(&[162, 81, 228, 214, 155])),
        ),
        (
            "elegant",
            theme(
                n("white+"),
                n("black"),
                "default",
                vec![Rgb(34, 60, 94), Rgb(150, 42, 49), Rgb(48, 110, 74), Index(244)],
            ),
        ),
        (
            "girly",
            theme(Index(255), n("magenta"), "bold", indexes(&[201, 205, 219, 213, 207])),
        ),
        (
            "grandpa",
            theme(Index(58), Index(186), "default", indexes(&[172, 179, 137, 144, 230])),
        ),
        ("matrix", theme(n("black"), n("green+"), "bold", names(&["green+"]))),
        (
            "mature",
            theme(Index(236), Index(250), "default", indexes(&[109, 144, 174, 146, 108])),
        ),
        ("pro", theme(n("default"), n("default"), "default", standard_sequence())),
        (
            "retro",
            theme(n("black"), n("green"), "default", names(&["green", "green+", "white"])),
        ),
        (
            "sahara",
            theme(
                n("orange"),
                n("black"),
                "default",
                names(&["yellow", "gold", "red", "black"]),
            ),
        ),
        (
            "salad",
            theme(n("green"), n("black"), "bold", names(&["yellow", "white+", "blue+", "red+"])),
        ),
        (
            "scream",
            theme(n("red+"), n("white+"), "bold", names(&["gold", "black", "blue+", "white+"])),
        ),
        (
            "serious",
            theme(n("white+"), n("black"), "bold", names(&["blue", "red", "green", "black"])),
        ),
        (
            "windows",
            theme(
                n("blue"),
                n("white+"),
                "bold",
                names(&["white+", "red+", "green+", "orange+", "cyan+"]),
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_has_a_full_colour_variant() {
        let registry = ThemeRegistry::with_builtins();
        for name in BUILTIN_THEME_NAMES {
            assert!(registry.contains(name), "missing {name}");
            assert!(
                registry.contains(&format!("{FULL_COLOR_PREFIX}{name}")),
                "missing full-colour {name}"
            );
        }
        assert_eq!(registry.len(), 32);
    }

    #[test]
    fn full_colour_variants_hold_only_rgb_or_default() {
        let registry = ThemeRegistry::with_builtins();
        for name in BUILTIN_THEME_NAMES {
            let entry = registry.get(&format!("{FULL_COLOR_PREFIX}{name}")).unwrap();
            let colours = [&entry.canvas, &entry.axes, &entry.ticks]
                .into_iter()
                .chain(entry.data.iter());
            for c in colours {
                assert!(
                    matches!(c, PlotColor::Rgb(..)) || c.is_default(),
                    "{name}: {c} was not coerced"
                );
            }
        }
    }

    #[test]
    fn pro_shares_the_curated_sequence() {
        let registry = ThemeRegistry::with_builtins();
        assert_eq!(registry.get("tui-pro"), registry.get("tui-default"));
        assert_eq!(registry.get("tui-default").unwrap().data.len(), 20);
    }

    #[test]
    fn register_if_absent_keeps_existing() {
        let mut registry = ThemeRegistry::with_builtins();
        let before = registry.get("dark").cloned();
        let clear = registry.get("clear").cloned().unwrap();
        assert!(!registry.register_if_absent("dark", clear));
        assert_eq!(registry.get("dark").cloned(), before);
    }
}
