use std::io;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: &Config, shutdown: ShutdownHandle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_ms);
    let mut app = App::new(config);
    let events = EventHandler::new(tick_rate, shutdown.clone());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!(
        digits = app.passcode().digit_length(),
        tick_ms = config.ui.tick_ms,
        "passcode UI started"
    );

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() || shutdown.is_shutting_down() {
            break;
        }

        // Wake early when a mask or shake reset is due before the next tick.
        let timeout = app
            .next_deadline()
            .map(|due| due.saturating_duration_since(Instant::now()).min(tick_rate))
            .unwrap_or(tick_rate);
        match events.next(timeout) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => app.on_mouse(mouse),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Tick) | Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
        app.on_tick();
    }

    shutdown.signal();
    drop(guard);
    tracing::info!("passcode UI stopped");
    Ok(())
}
