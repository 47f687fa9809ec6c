pub mod config_dirs;
pub mod keybinds;
pub mod read_settings;

pub use config_dirs::{project_config_dir, settings_path, user_theme_dir};
pub use read_settings::{load_settings, load_settings_from, Settings, SettingsError};
