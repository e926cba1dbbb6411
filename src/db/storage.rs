use rusqlite::{Connection, OptionalExtension};

use super::StoreError;

/// String-keyed, string-valued storage the palette and theme queries run against.
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// `Storage` backed by the `kv` table of a SQLite database.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl Storage for SqliteStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let value = stmt.query_row([key], |row| row.get(0)).optional()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            (key, value),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    #[test]
    fn set_item_overwrites() {
        let conn = Connection::open_in_memory().unwrap();
        db::migrations::run_migrations(&conn).unwrap();
        let mut storage = SqliteStorage::new(conn);

        assert_eq!(storage.get_item("theme").unwrap(), None);
        storage.set_item("theme", "\"light-mode\"").unwrap();
        storage.set_item("theme", "\"dark-mode\"").unwrap();
        assert_eq!(
            storage.get_item("theme").unwrap().as_deref(),
            Some("\"dark-mode\"")
        );
    }

    #[test]
    fn values_survive_reopening_the_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swatchr.db");

        let mut storage = SqliteStorage::new(db::init(&path).unwrap());
        storage.set_item("savedPalettes", "[]").unwrap();
        drop(storage);

        let storage = SqliteStorage::new(db::init(&path).unwrap());
        assert_eq!(storage.get_item("savedPalettes").unwrap().as_deref(), Some("[]"));
    }
}
