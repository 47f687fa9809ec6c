use ratatui::{layout::Rect, widgets::Paragraph, Frame};

use crate::app::settings::keybinds::HELP;
use crate::ui::colors::Colors;

/// Key help, or the latest notice while one is showing.
pub fn render(f: &mut Frame, area: Rect, notice: Option<&str>, marker: &str, colors: &Colors) {
    let p = match notice {
        Some(text) => Paragraph::new(format!(" {text}")).style(colors.notice_style),
        None => Paragraph::new(format!(" {HELP}  | marker: {marker}")).style(colors.footer_style),
    };
    f.render_widget(p, area);
}
