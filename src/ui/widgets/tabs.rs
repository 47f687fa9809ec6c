use ratatui::{layout::Rect, widgets::Tabs, Frame};

use crate::app::Tab;
use crate::ui::colors::Colors;

pub fn render(f: &mut Frame, area: Rect, selected: Tab, colors: &Colors) {
    let titles = Tab::ALL.iter().map(|t| format!(" {t} Plots "));
    let tabs = Tabs::new(titles)
        .select(selected.index())
        .style(colors.tab_style)
        .highlight_style(colors.tab_selected_style)
        .divider("|");
    f.render_widget(tabs, area);
}
