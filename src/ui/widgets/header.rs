use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

use crate::ui::colors::Colors;

/// One-line title bar naming the demo, the UI theme and the plot theme.
pub fn render(f: &mut Frame, area: Rect, ui_theme: &str, plot_theme: &str, colors: &Colors) {
    let content =
        format!(" termPlot demonstration | UI theme: {ui_theme} | plot theme: {plot_theme} ");
    let p = Paragraph::new(Line::from(content).centered()).style(colors.header_style);
    f.render_widget(p, area);
}
