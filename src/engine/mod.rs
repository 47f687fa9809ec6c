//! In-crate plotting engine.
//!
//! Operations are looked up by name in a fixed table and applied to a
//! [`Figure`]; building a figure rasterises it with ratatui's chart widgets
//! and encodes the resulting buffer as ANSI text.

pub mod ansi;
pub mod args;
pub mod color;
pub mod error;
pub mod figure;
pub mod ops;
mod render;
pub mod themes;
pub mod utility;

pub use args::Args;
pub use color::{rgbify, PlotColor};
pub use error::PlotError;
pub use figure::{Figure, DEFAULT_SIZE, DEFAULT_THEME};
pub use ops::{OpKind, Operation, SafeFn};
pub use themes::{SharedRegistry, ThemeEntry, ThemeRegistry, FULL_COLOR_PREFIX};
