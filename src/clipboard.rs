/// System clipboard access.
use anyhow::Result;

#[cfg_attr(test, mockall::automock)]
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Clipboard backed by `arboard`. The handle is opened per copy, so a missing
/// display only fails the copy itself.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text.to_string())?;
        Ok(())
    }
}
