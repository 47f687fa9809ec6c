pub mod footer;
pub mod header;
pub mod plot;
pub mod tabs;

pub use plot::{PlotView, PlotWidget, ThemeMode};
