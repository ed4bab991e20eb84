//! `--list` — print every report, newest first.

use anyhow::Result;
use std::io::Write;
use std::path::Path;

use super::Outcome;
use crate::report::{store, Report};

/// Print all reports as a fixed-width table. Read-only.
pub fn list<W: Write>(db_path: &Path, out: &mut W) -> Result<Outcome> {
    let reports = {
        let conn = crate::db::open_database(db_path)?;
        store::list_reports(&conn)?
    };

    if reports.is_empty() {
        writeln!(out, "현재 신고가 없습니다.")?;
        return Ok(Outcome::NothingToDo);
    }

    render_table(&reports, out)?;
    Ok(Outcome::Listed(reports.len()))
}

/// Write the report table. Fails before writing anything if a row carries an
/// urgency level with no label.
pub fn render_table<W: Write>(reports: &[Report], out: &mut W) -> Result<()> {
    let labels = reports
        .iter()
        .map(Report::urgency_label)
        .collect::<Result<Vec<_>, _>>()?;

    writeln!(out, "\n📋 현재 신고 목록 ({}개):", reports.len())?;
    writeln!(out, "{}", "-".repeat(80))?;
    writeln!(
        out,
        "{:<5} {:<10} {:<8} {:<6} {:<20}",
        "ID", "손상유형", "상태", "긴급도", "접수일"
    )?;
    writeln!(out, "{}", "-".repeat(80))?;

    for (report, urgency) in reports.iter().zip(labels) {
        writeln!(
            out,
            "{:<5} {:<10} {:<8} {:<6} {:<20}",
            report.id, report.damage_type, report.status, urgency, report.created_at
        )?;
    }

    Ok(())
}
