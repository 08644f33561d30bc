//! The quiz command: load problems, wait for ENTER, race the clock.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

use quizclock_core::config::load_config_from;
use quizclock_core::input::spawn_stdin_reader;
use quizclock_core::loader;
use quizclock_core::QuizRunner;

pub async fn execute(
    problems_path: Option<PathBuf>,
    time_limit_secs: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?
        .with_overrides(problems_path, time_limit_secs);
    tracing::debug!(?config, "resolved quiz config");

    // A bad problem file ends the run here, before the quiz starts.
    let problems = match loader::load_problems(&config.problems) {
        Ok(set) => set,
        Err(e) => {
            println!("Error loading problem set: {e}");
            return Ok(());
        }
    };

    let mut answers = spawn_stdin_reader().context("failed to start input reader")?;
    let mut runner = QuizRunner::new(io::stdout(), config.time_limit());
    let outcome = runner
        .run(&problems, &mut answers)
        .await
        .context("failed to write to stdout")?;

    println!("\n{outcome}");

    Ok(())
}
