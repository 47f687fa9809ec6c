use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::App;
use crate::ui::colors::Colors;
use crate::ui::widgets::{footer, header, tabs};

/// Plots per gallery row.
const COLUMNS: usize = 2;

/// Draw one frame of the demo.
pub fn draw(f: &mut Frame, app: &mut App) {
    // header (1), tabs (1), plots (min), footer (1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    let colors = Colors::from_theme(app.host.current());
    let ui_name = app.host.current().name.clone();
    let plot_theme = app.plot_theme().to_string();
    header::render(f, chunks[0], &ui_name, &plot_theme, &colors);
    tabs::render(f, chunks[1], app.tab, &colors);
    footer::render(f, chunks[3], app.notice(), app.marker(), &colors);
    draw_panels(f, chunks[2], app, &colors);
}

fn draw_panels(f: &mut Frame, area: Rect, app: &mut App, colors: &Colors) {
    let (ui, panels) = app.page_mut();
    if panels.is_empty() {
        return;
    }
    let rows = panels.len().div_ceil(COLUMNS);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    for (r, row_area) in row_areas.iter().enumerate() {
        let start = r * COLUMNS;
        let in_row = COLUMNS.min(panels.len() - start);
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, in_row as u32); in_row])
            .split(*row_area);

        for (c, cell) in cells.iter().enumerate() {
            let panel = &mut panels[start + c];
            let block = Block::default()
                .borders(Borders::ALL)
                .style(colors.panel_block_style)
                .title(Span::styled(format!(" {} ", panel.title), colors.panel_title_style));
            let inner = block.inner(*cell);
            f.render_widget(block, *cell);
            f.render_widget(panel.view.widget(ui), inner);
        }
    }
}
