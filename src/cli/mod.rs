//! Terminal operations: one mode per invocation, each opening its own
//! connection and closing it on return.

pub mod list;
pub mod purge;

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::config::ToolConfig;

/// What a single invocation does. Chosen by [`Mode::select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    List,
    DeleteAll,
    DeleteById(i64),
    DeleteByStatus(String),
    Usage,
}

impl Mode {
    /// Pick the mode from the parsed flags. The first set flag wins, in the
    /// order list, all, id, status. An id of 0 or an empty status counts as
    /// unset.
    pub fn select(list: bool, all: bool, id: Option<i64>, status: Option<String>) -> Self {
        let id = id.filter(|&id| id != 0);
        let status = status.filter(|s| !s.is_empty());

        if list {
            Self::List
        } else if all {
            Self::DeleteAll
        } else if let Some(id) = id {
            Self::DeleteById(id)
        } else if let Some(status) = status {
            Self::DeleteByStatus(status)
        } else {
            Self::Usage
        }
    }
}

/// How an operation ended. Every variant is a normal, successful exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Listing printed this many rows.
    Listed(usize),
    NothingToDo,
    NotFound,
    InvalidStatus,
    Cancelled,
    /// Rows actually removed.
    Deleted(usize),
    Usage,
}

/// Run one mode against the configured database.
pub fn run<R: BufRead, W: Write>(
    mode: Mode,
    config: &ToolConfig,
    input: &mut R,
    out: &mut W,
) -> Result<Outcome> {
    let db_path = config.resolved_db_path();
    tracing::debug!(?mode, db = %db_path.display(), "running");

    match mode {
        Mode::List => list::list(&db_path, out),
        Mode::DeleteAll => purge::delete_all(&db_path, input, out),
        Mode::DeleteById(id) => purge::delete_by_id(&db_path, id, input, out),
        Mode::DeleteByStatus(status) => purge::delete_by_status(&db_path, &status, input, out),
        Mode::Usage => {
            usage(out)?;
            Ok(Outcome::Usage)
        }
    }
}

/// Print the four invocation forms.
pub fn usage<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "사용법:")?;
    writeln!(out, "  report-purge --list          # 신고 목록 보기")?;
    writeln!(out, "  report-purge --all           # 모든 신고 삭제")?;
    writeln!(out, "  report-purge --id 1          # 특정 신고 삭제")?;
    writeln!(out, "  report-purge --status 완료    # 완료된 신고만 삭제")?;
    Ok(())
}

/// Show `prompt` and read one line of confirmation.
///
/// Only `y` or `Y` proceeds. Line terminators are stripped, nothing else.
/// End of input counts as a refusal and returns `Ok(false)`, so a closed stdin
/// ends the operation as a cancellation with a successful exit.
pub fn confirm<R: BufRead, W: Write>(prompt: &str, input: &mut R, out: &mut W) -> Result<bool> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        writeln!(out)?;
        return Ok(false);
    }

    let answer = answer.trim_end_matches(['\n', '\r']);
    Ok(answer.eq_ignore_ascii_case("y"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(line: &str) -> bool {
        let mut out = Vec::new();
        confirm("? ", &mut line.as_bytes(), &mut out).unwrap()
    }

    #[test]
    fn only_y_confirms() {
        assert!(answer("y\n"));
        assert!(answer("Y\n"));
        assert!(answer("y\r\n"));
        assert!(answer("y"));

        assert!(!answer("\n"));
        assert!(!answer("n\n"));
        assert!(!answer("yes\n"));
        assert!(!answer(" y\n"));
        assert!(!answer("y \n"));
    }

    #[test]
    fn end_of_input_refuses() {
        assert!(!answer(""));
    }

    #[test]
    fn prompt_is_written_before_reading() {
        let mut out = Vec::new();
        confirm("삭제하시겠습니까? (y/N): ", &mut "n\n".as_bytes(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "삭제하시겠습니까? (y/N): ");
    }

    #[test]
    fn first_present_flag_wins() {
        let status = || Some("완료".to_string());
        assert_eq!(Mode::select(true, true, Some(1), status()), Mode::List);
        assert_eq!(Mode::select(false, true, Some(1), status()), Mode::DeleteAll);
        assert_eq!(Mode::select(false, false, Some(1), status()), Mode::DeleteById(1));
        assert_eq!(
            Mode::select(false, false, None, status()),
            Mode::DeleteByStatus("완료".into())
        );
        assert_eq!(Mode::select(false, false, None, None), Mode::Usage);
    }

    #[test]
    fn zero_id_and_empty_status_count_as_unset() {
        assert_eq!(
            Mode::select(false, false, Some(0), Some("완료".into())),
            Mode::DeleteByStatus("완료".into())
        );
        assert_eq!(Mode::select(false, false, Some(0), None), Mode::Usage);
        assert_eq!(Mode::select(false, false, None, Some(String::new())), Mode::Usage);
        assert_eq!(Mode::select(false, false, Some(-1), None), Mode::DeleteById(-1));
    }

    #[test]
    fn usage_touches_no_database() {
        let mut config = ToolConfig::default();
        config.storage.db_path = "/nonexistent/dir/reports.db".into();

        let mut out = Vec::new();
        let outcome = run(Mode::Usage, &config, &mut "".as_bytes(), &mut out).unwrap();

        assert_eq!(outcome, Outcome::Usage);
        let text = String::from_utf8(out).unwrap();
        for flag in ["--list", "--all", "--id", "--status"] {
            assert!(text.contains(flag), "usage should mention {flag}");
        }
    }
}
