pub mod core;
pub mod gallery;
pub mod settings;
pub mod types;

pub use self::core::App;
pub use types::{Action, Tab};
