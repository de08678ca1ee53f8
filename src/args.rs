use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gin-tracker", about = "Two-player Gin Rummy scorekeeper")]
pub struct Args {
    /// Override the database file location
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Print the statistics report to stdout and exit
    #[arg(long)]
    pub report: bool,

    /// Emit the report as JSON (implies --report)
    #[arg(long)]
    pub json: bool,
}
