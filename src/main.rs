use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use gin_tracker::{args::Args, db, stats::MatchStatistics, ui};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let db_path = match args.db.clone() {
        Some(path) => path,
        None => db::default_db_path()?,
    };

    // Log to a file next to the database; the terminal belongs to the UI.
    let log_dir = db_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_appender = tracing_appender::rolling::never(&log_dir, "gin-tracker.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    tracing::info!("using database at {}", db_path.display());
    let pool = db::create_pool(&db_path).await?;

    if args.report || args.json {
        let records =
            db::matches::all_matches(&pool, db::matches::SortOrder::OldestFirst).await?;
        let stats = MatchStatistics::from_records(&records);
        if args.json {
            let json =
                serde_json::to_string_pretty(&stats).context("Failed to serialize report")?;
            println!("{json}");
        } else {
            print!("{}", stats.render());
        }
        return Ok(());
    }

    ui::run_ui(pool)
}
