mod state;

use std::time::Duration;

use crossterm::event::KeyCode;

pub use state::App;

/// How long a swatch shows "Copied!" after a successful copy.
pub const COPY_FLASH: Duration = Duration::from_millis(800);

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Palette,
    Saved,
    Help,
}
