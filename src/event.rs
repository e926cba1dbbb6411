use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::app::{App, AppEvent};
use crate::clipboard::Clipboard;
use crate::db::Storage;

/// Short enough that the copy confirmation reverts close to on time.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Polls for crossterm events and maps them to `AppEvent`s.
pub fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
    if event::poll(timeout)? {
        return match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(Some(AppEvent::KeyPress(key.code)))
            }
            Event::Resize(..) => Ok(Some(AppEvent::Tick)),
            _ => Ok(None),
        };
    }
    Ok(Some(AppEvent::Tick))
}

/// Runs the main event loop.
pub fn run<S: Storage, C: Clipboard>(
    app: &mut App<S, C>,
    terminal: &mut crate::tui::Terminal,
) -> Result<()> {
    while app.running {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;

        if let Some(event) = poll(TICK_RATE)? {
            app.update(event);
        }
    }
    Ok(())
}
