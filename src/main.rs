use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use report_purge::cli::{self, Mode};
use report_purge::config::ToolConfig;

#[derive(Parser, Debug)]
#[command(name = "report-purge", version, about = "신고내역 삭제 도구")]
struct Cli {
    /// 현재 신고 목록 표시
    #[arg(long)]
    list: bool,

    /// 모든 신고 삭제
    #[arg(long)]
    all: bool,

    /// 특정 신고 ID 삭제
    #[arg(long, value_name = "ID", allow_negative_numbers = true)]
    id: Option<i64>,

    /// 특정 상태의 신고 삭제 (접수, 검토중, 처리중, 완료)
    #[arg(long, value_name = "STATUS")]
    status: Option<String>,

    /// Database file (overrides config and REPORTS_DB)
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Config file to load instead of ~/.report-purge/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let mut config = match &args.config {
        Some(path) => ToolConfig::load_from(path)?,
        None => ToolConfig::load()?,
    };
    if let Some(db) = &args.db {
        config.storage.db_path = db.to_string_lossy().into_owned();
    }

    // Log to stderr so stdout stays the human-readable report output.
    let filter = EnvFilter::try_new(&config.logging.log_level)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mode = Mode::select(args.list, args.all, args.id, args.status);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    cli::run(mode, &config, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
