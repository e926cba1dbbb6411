/// Database migrations and schema management.
use anyhow::Result;
use rusqlite::Connection;

/// Creates the schema if it doesn't exist yet.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS kv (
            key    TEXT PRIMARY KEY,
            value  TEXT NOT NULL
        );
        ",
    )?;
    migrate_drop_empty_values(conn)?;
    Ok(())
}

/// An empty value is never valid JSON, so such rows are treated as absent keys.
fn migrate_drop_empty_values(conn: &Connection) -> Result<()> {
    let removed = conn.execute("DELETE FROM kv WHERE value = ''", [])?;
    if removed > 0 {
        tracing::info!(removed, "dropped empty kv rows");
    }
    Ok(())
}
