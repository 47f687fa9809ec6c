use ratatui::style::{Color, Modifier, Style};

use crate::ui::themes::UiTheme;

/// Concrete styles for the demo chrome, derived from the current UI theme.
#[derive(Clone, Debug, PartialEq)]
pub struct Colors {
    pub header_style: Style,
    pub tab_style: Style,
    pub tab_selected_style: Style,
    pub panel_block_style: Style,
    pub panel_title_style: Style,
    pub footer_style: Style,
    pub notice_style: Style,
}

impl Colors {
    pub fn from_theme(theme: &UiTheme) -> Self {
        let color = |name: &str| theme.variable(name).unwrap_or(Color::Reset);
        let fg = color("foreground");
        let bg = color("background");
        let surface = color("surface");

        Self {
            header_style: Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
            tab_style: Style::default().fg(fg).bg(bg),
            tab_selected_style: Style::default()
                .fg(bg)
                .bg(color("accent"))
                .add_modifier(Modifier::BOLD),
            panel_block_style: Style::default().fg(color("primary")).bg(surface),
            panel_title_style: Style::default()
                .fg(color("text-accent"))
                .add_modifier(Modifier::BOLD),
            footer_style: Style::default().fg(fg).bg(bg),
            notice_style: Style::default()
                .fg(color("warning"))
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        }
    }
}
