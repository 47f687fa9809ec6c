use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use termPlot::app::settings::{load_settings, load_settings_from, Settings};
use termPlot::engine::ThemeRegistry;
use termPlot::logging::init_logging;
use termPlot::runner::run_app;
use termPlot::ui::host::ThemeHost;
use termPlot::ui::themes::load_theme_dir;

/// Gallery of terminal plots hosted in ratatui widgets.
#[derive(Parser, Debug)]
#[command(name = "termplot", version, about)]
struct Cli {
    /// Print the available UI and plot themes, then exit.
    #[arg(long)]
    list_themes: bool,

    /// UI theme to start with.
    #[arg(long)]
    ui_theme: Option<String>,

    /// Plot theme: `auto` or a registered engine theme name.
    #[arg(long)]
    plot_theme: Option<String>,

    /// Write logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Settings file to use instead of the per-user one.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn apply(self, settings: &mut Settings) {
        if let Some(theme) = self.ui_theme {
            settings.ui_theme = Some(theme);
        }
        if let Some(theme) = self.plot_theme {
            settings.plot_theme = theme;
        }
        if let Some(path) = self.log_file {
            settings.log_file = Some(path);
        }
    }
}

fn list_themes(settings: &Settings) {
    let mut host = ThemeHost::default();
    for dir in settings.theme_dirs() {
        for theme in load_theme_dir(&dir) {
            host.add_theme(theme);
        }
    }
    println!("UI themes:");
    for theme in host.themes() {
        println!("  {}", theme.name);
    }
    println!("Plot themes:");
    println!("  auto");
    for name in ThemeRegistry::with_builtins().names() {
        println!("  {name}");
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut settings = match &cli.config {
        Some(path) => load_settings_from(path),
        None => load_settings(),
    }
    .context("loading settings")?;
    let list = cli.list_themes;
    cli.apply(&mut settings);

    if list {
        list_themes(&settings);
        return Ok(());
    }

    let _guard = init_logging(settings.log_file.as_deref(), &settings.log_filter)?;
    run_app(&settings)
}
