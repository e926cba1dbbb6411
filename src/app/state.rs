use std::time::Instant;

use crossterm::event::KeyCode;

use crate::clipboard::Clipboard;
use crate::db::{self, Storage};
use crate::palette::{PALETTE_SIZE, Palette};
use crate::types::{SaveOutcome, Theme};

use super::{AppEvent, AppView, COPY_FLASH};

/// The top-level application state.
pub struct App<S: Storage, C: Clipboard> {
    pub running: bool,
    pub view: AppView,
    previous_view: AppView,
    /// Palette currently on display, if any.
    pub palette: Option<Palette>,
    pub selected_swatch: usize,
    pub copied: Option<CopiedFlash>,
    pub saved: Vec<Palette>,
    pub selected_saved_index: usize,
    pub theme: Theme,
    pub status: Option<String>,
    storage: S,
    clipboard: C,
}

/// A swatch showing the copy confirmation until `until`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopiedFlash {
    pub index: usize,
    pub until: Instant,
}

impl<S: Storage, C: Clipboard> App<S, C> {
    /// Builds the initial state: a fresh palette, the saved list, and the stored
    /// theme (or `fallback_theme` when none was stored).
    pub fn new(storage: S, clipboard: C, fallback_theme: Theme) -> Self {
        let mut app = Self {
            running: true,
            view: AppView::Palette,
            previous_view: AppView::Palette,
            palette: None,
            selected_swatch: 0,
            copied: None,
            saved: Vec::new(),
            selected_saved_index: 0,
            theme: fallback_theme,
            status: None,
            storage,
            clipboard,
        };

        match db::get_theme(&app.storage) {
            Ok(Some(theme)) => app.theme = theme,
            Ok(None) => {}
            Err(err) => {
                tracing::warn!("ignoring stored theme: {err}");
                app.status = Some(format!("Failed to load theme: {err}"));
            }
        }
        app.generate_palette();
        app.load_saved();

        app
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.expire_copy_flash(Instant::now()),
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        self.status = None;

        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('?') => {
                if self.view == AppView::Help {
                    self.go_back();
                } else {
                    self.previous_view = self.view;
                    self.view = AppView::Help;
                }
            }
            KeyCode::Esc => self.go_back(),
            KeyCode::Tab => {
                self.view = match self.view {
                    AppView::Palette => AppView::Saved,
                    _ => AppView::Palette,
                };
            }
            KeyCode::Char('m') => self.toggle_theme(),
            KeyCode::Char('g') | KeyCode::Char(' ') => self.generate_palette(),
            KeyCode::Char('s') => self.save_current(),
            _ => match self.view {
                AppView::Palette => self.handle_palette_key(key),
                AppView::Saved => self.handle_saved_key(key),
                AppView::Help => {}
            },
        }
    }

    fn handle_palette_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Left => {
                self.selected_swatch = self.selected_swatch.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_swatch + 1 < PALETTE_SIZE {
                    self.selected_swatch += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char('c') => self.copy_selected(),
            _ => {}
        }
    }

    fn handle_saved_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => {
                self.selected_saved_index = self.selected_saved_index.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected_saved_index + 1 < self.saved.len() {
                    self.selected_saved_index += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char('l') => self.load_selected_saved(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected_saved(),
            _ => {}
        }
    }

    fn go_back(&mut self) {
        self.view = match self.view {
            AppView::Help => self.previous_view,
            _ => AppView::Palette,
        };
    }

    pub fn generate_palette(&mut self) {
        self.display_palette(Palette::generate());
    }

    /// Replaces the palette on display.
    pub fn display_palette(&mut self, palette: Palette) {
        tracing::debug!(?palette, "displaying palette");
        self.palette = Some(palette);
        self.selected_swatch = 0;
        self.copied = None;
    }

    /// Text under a swatch: its color code, or the copy confirmation.
    pub fn swatch_label(&self, index: usize) -> Option<&str> {
        if self.copied.is_some_and(|flash| flash.index == index) {
            return Some("Copied!");
        }
        self.palette
            .as_ref()
            .and_then(|palette| palette.get(index))
            .map(|color| color.as_str())
    }

    pub fn copy_selected(&mut self) {
        let index = self.selected_swatch;
        let Some(color) = self.palette.as_ref().and_then(|p| p.get(index)).cloned() else {
            return;
        };
        match self.clipboard.set_text(color.as_str()) {
            Ok(()) => {
                tracing::debug!(%color, "copied to clipboard");
                self.copied = Some(CopiedFlash {
                    index,
                    until: Instant::now() + COPY_FLASH,
                });
            }
            Err(err) => tracing::error!(%color, "failed to copy: {err:#}"),
        }
    }

    pub fn expire_copy_flash(&mut self, now: Instant) {
        if self.copied.is_some_and(|flash| now >= flash.until) {
            self.copied = None;
        }
    }

    pub fn save_current(&mut self) {
        let message = match db::save_palette(self.palette.as_ref(), &mut self.storage) {
            Ok(SaveOutcome::Saved) => {
                self.load_saved();
                "Palette saved!".to_string()
            }
            Ok(SaveOutcome::Duplicate) => "This palette is already saved!".to_string(),
            Ok(SaveOutcome::Empty) => "Generate a palette before saving!".to_string(),
            Err(err) => {
                tracing::error!("failed to save palette: {err}");
                format!("Failed to save palette: {err}")
            }
        };
        self.status = Some(message);
    }

    fn load_saved(&mut self) {
        match db::load_palettes(&self.storage) {
            Ok(saved) => self.saved = saved,
            Err(err) => {
                tracing::error!("failed to load saved palettes: {err}");
                self.saved.clear();
                self.status = Some(format!("Failed to load saved palettes: {err}"));
            }
        }
        if self.selected_saved_index >= self.saved.len() {
            self.selected_saved_index = self.saved.len().saturating_sub(1);
        }
    }

    fn load_selected_saved(&mut self) {
        let Some(palette) = self.saved.get(self.selected_saved_index).cloned() else {
            self.status = Some("No saved palette selected.".to_string());
            return;
        };
        self.display_palette(palette);
        self.view = AppView::Palette;
    }

    fn delete_selected_saved(&mut self) {
        if self.saved.is_empty() {
            self.status = Some("No saved palette selected.".to_string());
            return;
        }
        match db::delete_palette(self.selected_saved_index, &mut self.storage) {
            Ok(_) => self.status = Some("Palette deleted.".to_string()),
            Err(err) => {
                tracing::error!("failed to delete palette: {err}");
                self.status = Some(format!("Failed to delete palette: {err}"));
            }
        }
        self.load_saved();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        if let Err(err) = db::set_theme(self.theme, &mut self.storage) {
            tracing::error!("failed to store theme: {err}");
            self.status = Some(format!("Failed to store theme: {err}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::clipboard::MockClipboard;
    use crate::db::MemoryStorage;
    use crate::palette::sample;

    fn example() -> Palette {
        sample(["#a1b2c3", "#000000", "#ffffff", "#123abc", "#fedcba"])
    }

    fn app_with(clipboard: MockClipboard) -> App<MemoryStorage, MockClipboard> {
        App::new(MemoryStorage::default(), clipboard, Theme::Light)
    }

    fn press(app: &mut App<MemoryStorage, MockClipboard>, key: KeyCode) {
        app.update(AppEvent::KeyPress(key));
    }

    #[test]
    fn starts_with_a_generated_palette_and_fallback_theme() {
        let app = App::new(MemoryStorage::default(), MockClipboard::new(), Theme::Dark);
        assert!(app.palette.is_some());
        assert!(app.saved.is_empty());
        assert_eq!(app.theme, Theme::Dark);
        assert_eq!(app.view, AppView::Palette);
    }

    #[test]
    fn stored_theme_wins_over_fallback() {
        let mut storage = MemoryStorage::default();
        db::set_theme(Theme::Dark, &mut storage).unwrap();
        let app = App::new(storage, MockClipboard::new(), Theme::Light);
        assert_eq!(app.theme, Theme::Dark);
    }

    #[test]
    fn generate_replaces_palette_and_resets_selection() {
        let mut app = app_with(MockClipboard::new());
        app.display_palette(example());
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.selected_swatch, 2);

        press(&mut app, KeyCode::Char('g'));
        assert_ne!(app.palette, Some(example()));
        assert_eq!(app.selected_swatch, 0);
    }

    #[test]
    fn swatch_selection_stays_in_bounds() {
        let mut app = app_with(MockClipboard::new());
        press(&mut app, KeyCode::Left);
        assert_eq!(app.selected_swatch, 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_swatch, PALETTE_SIZE - 1);
    }

    #[test]
    fn copy_shows_confirmation_until_it_expires() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_set_text()
            .withf(|text| text == "#000000")
            .times(1)
            .returning(|_| Ok(()));
        let mut app = app_with(clipboard);
        app.display_palette(example());

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        let flash = app.copied.expect("copy confirmation");
        assert_eq!(flash.index, 1);
        assert_eq!(app.swatch_label(1), Some("Copied!"));
        assert_eq!(app.swatch_label(0), Some("#a1b2c3"));

        app.expire_copy_flash(flash.until - Duration::from_millis(1));
        assert_eq!(app.swatch_label(1), Some("Copied!"));
        app.expire_copy_flash(flash.until);
        assert_eq!(app.swatch_label(1), Some("#000000"));
    }

    #[test]
    fn clipboard_failure_is_not_surfaced() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_set_text()
            .returning(|_| Err(anyhow::anyhow!("no display")));
        let mut app = app_with(clipboard);
        app.display_palette(example());

        press(&mut app, KeyCode::Char('c'));

        assert_eq!(app.copied, None);
        assert_eq!(app.status, None);
        assert_eq!(app.swatch_label(0), Some("#a1b2c3"));
    }

    #[test]
    fn save_reports_each_outcome() {
        let mut app = app_with(MockClipboard::new());
        app.display_palette(example());

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.status.as_deref(), Some("Palette saved!"));
        assert_eq!(app.saved, vec![example()]);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.status.as_deref(), Some("This palette is already saved!"));
        assert_eq!(app.saved.len(), 1);

        app.palette = None;
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(
            app.status.as_deref(),
            Some("Generate a palette before saving!")
        );
        assert_eq!(db::load_palettes(&app.storage).unwrap().len(), 1);
    }

    #[test]
    fn saved_view_loads_and_deletes() {
        let mut app = app_with(MockClipboard::new());
        let other = sample(["#111111", "#222222", "#333333", "#444444", "#555555"]);
        app.display_palette(example());
        app.save_current();
        app.display_palette(other.clone());
        app.save_current();

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view, AppView::Saved);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view, AppView::Palette);
        assert_eq!(app.palette, Some(example()));

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.saved, vec![example()]);
        assert_eq!(app.selected_saved_index, 0);

        press(&mut app, KeyCode::Char('d'));
        assert!(app.saved.is_empty());
        assert!(db::load_palettes(&app.storage).unwrap().is_empty());

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.status.as_deref(), Some("No saved palette selected."));
    }

    #[test]
    fn theme_toggle_flips_and_persists() {
        let mut app = app_with(MockClipboard::new());
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.theme, Theme::Dark);
        assert_eq!(db::get_theme(&app.storage).unwrap(), Some(Theme::Dark));

        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(db::get_theme(&app.storage).unwrap(), Some(Theme::Light));
    }

    #[test]
    fn help_returns_to_previous_view() {
        let mut app = app_with(MockClipboard::new());
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.view, AppView::Help);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view, AppView::Saved);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }
}
