//! Connection handling for the externally owned reports database.
//!
//! This tool never creates the database or its schema. The file must already
//! exist and contain a `reports` table written by the producing system.

use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::time::Duration;

use crate::error::ReportError;

const BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

/// Open the existing reports database read-write.
///
/// Fails if the file is missing or has no `reports` table. The returned
/// connection is closed when dropped.
pub fn open_database(path: impl AsRef<Path>) -> Result<Connection> {
    let path = path.as_ref();

    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = Connection::open_with_flags(path, flags)
        .with_context(|| format!("failed to open database at {}", path.display()))?;

    conn.busy_timeout(BUSY_TIMEOUT)?;

    if !has_reports_table(&conn)? {
        return Err(ReportError::MissingTable(path.to_path_buf()).into());
    }

    tracing::debug!(path = %path.display(), "database opened");
    Ok(conn)
}

/// Whether the connected database contains a `reports` table.
pub fn has_reports_table(conn: &Connection) -> Result<bool> {
    let exists: bool = conn
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type = 'table' AND name = 'reports'",
            [],
            |row| row.get(0),
        )
        .context("failed to inspect database schema")?;
    Ok(exists)
}

/// Reports table as written by the producing system.
#[cfg(test)]
pub(crate) const FIXTURE_SCHEMA_SQL: &str = r#"
CREATE TABLE reports (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    damage_type TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT '접수',
    urgency_level INTEGER NOT NULL DEFAULT 1,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
"#;

/// Open an in-memory database carrying the fixture schema, for testing.
#[cfg(test)]
pub(crate) fn open_memory_database() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
    conn.execute_batch(FIXTURE_SCHEMA_SQL)?;
    Ok(conn)
}
