use std::time::{Duration, Instant};

use ratatui::backend::Backend;
use ratatui::Terminal;
use tracing::info;

use crate::app::settings::Settings;
use crate::app::App;
use crate::input::{poll, read_event, InputEvent};
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, restore_terminal};
use crate::ui;

pub fn run_app(settings: &Settings) -> anyhow::Result<()> {
    // Build the app first so configuration errors print on a normal screen.
    let mut app = App::new(settings)?;
    let tick = Duration::from_millis(settings.tick_ms.max(1));

    let mut terminal = init_terminal()?;
    info!("demo started");
    let result = event_loop(&mut terminal, &mut app, tick);
    restore_terminal(terminal)?;
    info!("demo stopped");
    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick: Duration,
) -> anyhow::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if poll(timeout)? {
            match read_event()? {
                InputEvent::Key(key) => {
                    if handlers::handle_key(app, key) {
                        return Ok(());
                    }
                }
                InputEvent::Resize(_, _) | InputEvent::Other => {}
            }
        }
        if last_tick.elapsed() >= tick {
            let now = Instant::now();
            app.on_tick(now);
            last_tick = now;
        }
    }
}
