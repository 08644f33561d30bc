//! quizclock CLI — a timed quiz over a comma-separated problem file.

use std::path::PathBuf;
use std::process;

use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(name = "quizclock", version, about = "Timed quiz over a CSV problem set")]
struct Cli {
    /// The set of problems in CSV format (question,answer) [default: problems.csv]
    #[arg(short = 'p', long)]
    problems: Option<PathBuf>,

    /// The time limit for completing the problem set, in seconds [default: 30]
    #[arg(short = 't', long = "time_limit", alias = "time-limit")]
    time_limit: Option<u64>,

    /// Config file path (defaults to ./quizclock.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    quizclock_cli::logging::init();

    let cli = Cli::parse();

    let result = commands::quiz::execute(cli.problems, cli.time_limit, cli.config).await;

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
