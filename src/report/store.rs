//! Queries against the `reports` table.
//!
//! Reads are plain queries. Each delete is a single parameterized statement in
//! its own transaction, committed before returning, so a delete either removes
//! every targeted row or none.

use anyhow::{Context, Result};
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::types::{Report, ReportSummary, Status};

/// All reports, newest `created_at` first.
pub fn list_reports(conn: &Connection) -> Result<Vec<Report>> {
    let mut stmt = conn.prepare(
        "SELECT id, damage_type, status, urgency_level, created_at
         FROM reports
         ORDER BY created_at DESC",
    )?;

    let reports = stmt
        .query_map([], row_to_report)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("failed to read reports")?;

    tracing::debug!(count = reports.len(), "listed reports");
    Ok(reports)
}

pub fn count_reports(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM reports", [], |row| row.get(0))?;
    Ok(count as usize)
}

pub fn count_by_status(conn: &Connection, status: Status) -> Result<usize> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM reports WHERE status = ?1",
        params![status.as_str()],
        |row| row.get(0),
    )?;
    Ok(count as usize)
}

/// Look up one report, `None` if the id is absent.
pub fn find_report(conn: &Connection, id: i64) -> Result<Option<ReportSummary>> {
    conn.query_row(
        "SELECT id, damage_type, status FROM reports WHERE id = ?1",
        params![id],
        |row| {
            Ok(ReportSummary {
                id: row.get(0)?,
                damage_type: text_column(row, 1)?,
                status: text_column(row, 2)?,
            })
        },
    )
    .optional()
    .with_context(|| format!("failed to look up report #{id}"))
}

/// Delete every report. Returns the number of rows removed.
pub fn delete_all(conn: &mut Connection) -> Result<usize> {
    let tx = conn.transaction()?;
    let deleted = tx.execute("DELETE FROM reports", [])?;
    tx.commit().context("failed to commit delete")?;

    tracing::info!(deleted, "deleted all reports");
    Ok(deleted)
}

/// Delete one report. Returns `false` if no row had this id.
pub fn delete_by_id(conn: &mut Connection, id: i64) -> Result<bool> {
    let tx = conn.transaction()?;
    let deleted = tx.execute("DELETE FROM reports WHERE id = ?1", params![id])?;
    tx.commit().context("failed to commit delete")?;

    tracing::info!(id, deleted, "deleted report by id");
    Ok(deleted > 0)
}

/// Delete every report in `status`. Returns the number of rows removed.
pub fn delete_by_status(conn: &mut Connection, status: Status) -> Result<usize> {
    let tx = conn.transaction()?;
    let deleted = tx.execute(
        "DELETE FROM reports WHERE status = ?1",
        params![status.as_str()],
    )?;
    tx.commit().context("failed to commit delete")?;

    tracing::info!(status = %status, deleted, "deleted reports by status");
    Ok(deleted)
}

fn row_to_report(row: &Row<'_>) -> rusqlite::Result<Report> {
    Ok(Report {
        id: row.get(0)?,
        damage_type: text_column(row, 1)?,
        status: text_column(row, 2)?,
        urgency_level: row.get(3)?,
        created_at: text_column(row, 4)?,
    })
}

/// Render any SQLite storage class as display text. NULL becomes empty.
fn text_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<String> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        ValueRef::Blob(bytes) => format!("<{} bytes>", bytes.len()),
    })
}
