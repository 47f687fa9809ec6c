//! Terminal UI side: UI themes, the theme synthesizer and the widgets that
//! host plots inside a ratatui layout.

pub mod ansi;
pub mod colors;
pub mod host;
pub mod synth;
pub mod themes;
pub mod widgets;

mod ui_main;

pub use host::{ThemeChanged, ThemeHost};
pub use themes::UiTheme;
pub use ui_main::draw;
