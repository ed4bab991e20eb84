//! `--all`, `--id` and `--status` — confirmed deletion of reports.
//!
//! Each operation counts or looks up its targets, asks once, then issues a
//! single delete. The count in the prompt is read before the user answers, so
//! a concurrent writer can change what the delete actually removes; the
//! message after deletion always reports the rows really removed.

use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::Path;

use super::{confirm, Outcome};
use crate::report::{store, Status};

const CANCELLED: &str = "삭제가 취소되었습니다.";

/// Delete every report after confirmation.
pub fn delete_all<R: BufRead, W: Write>(
    db_path: &Path,
    input: &mut R,
    out: &mut W,
) -> Result<Outcome> {
    let mut conn = crate::db::open_database(db_path)?;

    let count = store::count_reports(&conn)?;
    if count == 0 {
        writeln!(out, "삭제할 신고가 없습니다.")?;
        return Ok(Outcome::NothingToDo);
    }

    let prompt = format!("정말로 {count}개의 신고를 모두 삭제하시겠습니까? (y/N): ");
    if !confirm(&prompt, input, out)? {
        writeln!(out, "{CANCELLED}")?;
        return Ok(Outcome::Cancelled);
    }

    let deleted = store::delete_all(&mut conn)?;
    warn_if_stale(count, deleted);

    writeln!(out, "✅ 총 {deleted}개의 신고가 삭제되었습니다.")?;
    Ok(Outcome::Deleted(deleted))
}

/// Delete one report after showing it and asking for confirmation.
pub fn delete_by_id<R: BufRead, W: Write>(
    db_path: &Path,
    id: i64,
    input: &mut R,
    out: &mut W,
) -> Result<Outcome> {
    let mut conn = crate::db::open_database(db_path)?;

    let Some(report) = store::find_report(&conn, id)? else {
        writeln!(out, "❌ 신고 #{id}를 찾을 수 없습니다.")?;
        return Ok(Outcome::NotFound);
    };

    writeln!(out, "신고 #{id} 정보:")?;
    writeln!(out, "  - 손상유형: {}", report.damage_type)?;
    writeln!(out, "  - 상태: {}", report.status)?;

    if !confirm("이 신고를 삭제하시겠습니까? (y/N): ", input, out)? {
        writeln!(out, "{CANCELLED}")?;
        return Ok(Outcome::Cancelled);
    }

    if !store::delete_by_id(&mut conn, id)? {
        tracing::warn!(id, "report vanished between lookup and delete");
        writeln!(out, "❌ 신고 #{id}를 찾을 수 없습니다.")?;
        return Ok(Outcome::NotFound);
    }

    writeln!(out, "✅ 신고 #{id}가 삭제되었습니다.")?;
    Ok(Outcome::Deleted(1))
}

/// Delete every report in `status` after confirmation.
///
/// An unknown status is reported with the accepted values before the
/// database is opened.
pub fn delete_by_status<R: BufRead, W: Write>(
    db_path: &Path,
    status: &str,
    input: &mut R,
    out: &mut W,
) -> Result<Outcome> {
    let Ok(status) = status.parse::<Status>() else {
        writeln!(
            out,
            "❌ 유효하지 않은 상태입니다. 가능한 상태: {}",
            Status::allowed_list()
        )?;
        return Ok(Outcome::InvalidStatus);
    };

    let mut conn = crate::db::open_database(db_path)?;

    let count = store::count_by_status(&conn, status)?;
    if count == 0 {
        writeln!(out, "'{status}' 상태의 신고가 없습니다.")?;
        return Ok(Outcome::NothingToDo);
    }

    let prompt = format!("'{status}' 상태의 {count}개 신고를 삭제하시겠습니까? (y/N): ");
    if !confirm(&prompt, input, out)? {
        writeln!(out, "{CANCELLED}")?;
        return Ok(Outcome::Cancelled);
    }

    let deleted = store::delete_by_status(&mut conn, status)?;
    warn_if_stale(count, deleted);

    writeln!(out, "✅ '{status}' 상태의 {deleted}개 신고가 삭제되었습니다.")?;
    Ok(Outcome::Deleted(deleted))
}

fn warn_if_stale(confirmed: usize, deleted: usize) {
    if confirmed != deleted {
        tracing::warn!(confirmed, deleted, "row count changed after confirmation");
    }
}
