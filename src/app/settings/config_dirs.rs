use std::path::PathBuf;

use directories_next::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "termPlot")
}

/// Per-user configuration directory, if the platform has one.
pub fn project_config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

pub fn settings_path() -> Option<PathBuf> {
    project_config_dir().map(|d| d.join("settings.toml"))
}

/// Directory scanned for user UI theme files.
pub fn user_theme_dir() -> Option<PathBuf> {
    project_config_dir().map(|d| d.join("themes"))
}
