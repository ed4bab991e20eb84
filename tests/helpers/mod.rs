#![allow(dead_code)]

use report_purge::config::ToolConfig;
use rusqlite::{params, Connection};
use std::path::PathBuf;
use tempfile::TempDir;

/// Reports table as the intake system creates it.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE reports (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    damage_type TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT '접수',
    urgency_level INTEGER NOT NULL DEFAULT 1,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
"#;

/// A reports database on disk, removed when dropped.
pub struct Fixture {
    _dir: TempDir,
    pub path: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports.db");
        Connection::open(&path).unwrap().execute_batch(SCHEMA_SQL).unwrap();
        Self { _dir: dir, path }
    }

    /// The two-row table used throughout the tests:
    /// `(1, 수도파열, 접수, 3, t1)` and `(2, 누수, 완료, 1, t2)`.
    pub fn scenario() -> Self {
        let fixture = Self::new();
        fixture.insert(1, "수도파열", "접수", 3, "2024-05-01 09:00:00");
        fixture.insert(2, "누수", "완료", 1, "2024-05-02 14:30:00");
        fixture
    }

    pub fn conn(&self) -> Connection {
        Connection::open(&self.path).unwrap()
    }

    pub fn config(&self) -> ToolConfig {
        let mut config = ToolConfig::default();
        config.storage.db_path = self.path.to_string_lossy().into_owned();
        config
    }

    pub fn insert(&self, id: i64, damage_type: &str, status: &str, urgency: i64, created_at: &str) {
        self.conn()
            .execute(
                "INSERT INTO reports (id, damage_type, status, urgency_level, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![id, damage_type, status, urgency, created_at],
            )
            .unwrap();
    }

    pub fn count(&self) -> i64 {
        self.conn()
            .query_row("SELECT COUNT(*) FROM reports", [], |row| row.get(0))
            .unwrap()
    }

    pub fn ids(&self) -> Vec<i64> {
        let conn = self.conn();
        let mut stmt = conn.prepare("SELECT id FROM reports ORDER BY id").unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<Vec<i64>>>()
            .unwrap()
    }
}

/// Run `f` with `answer` as stdin, returning its result and everything printed.
pub fn with_answer<T>(
    answer: &str,
    f: impl FnOnce(&mut &[u8], &mut Vec<u8>) -> T,
) -> (T, String) {
    let mut input = answer.as_bytes();
    let mut out = Vec::new();
    let result = f(&mut input, &mut out);
    (result, String::from_utf8(out).unwrap())
}
