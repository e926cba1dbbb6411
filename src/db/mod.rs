/// Persistence: a small key-value store plus palette and theme queries on top of it.
#[cfg(test)]
mod memory;
mod migrations;
mod palettes;
mod storage;
mod theme;

use std::path::{Path, PathBuf};

use anyhow::Result;
use rusqlite::Connection;
use thiserror::Error;

#[cfg(test)]
pub use memory::MemoryStorage;
pub use palettes::{delete_palette, load_palettes, save_palette};
pub use storage::{SqliteStorage, Storage};
pub use theme::{get_theme, set_theme};

/// Key holding the JSON list of saved palettes.
pub const SAVED_PALETTES_KEY: &str = "savedPalettes";
/// Key holding the JSON-encoded active theme.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("stored value for '{key}' is unreadable: {source}")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("no saved palette at index {index} ({len} saved)")]
    NoSuchPalette { index: usize, len: usize },
}

/// Opens (or creates) the SQLite database and runs migrations.
pub fn init(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    migrations::run_migrations(&conn)?;
    tracing::debug!(path = %db_path.display(), "database ready");
    Ok(conn)
}

/// Returns the default database path inside the user's data directory.
/// Falls back to `./swatchr.db` when no data dir is found.
pub fn default_db_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let swatchr_dir = data_dir.join("swatchr");
        std::fs::create_dir_all(&swatchr_dir).ok();
        swatchr_dir.join("swatchr.db")
    } else {
        PathBuf::from("swatchr.db")
    }
}
