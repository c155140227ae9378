use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use workout_calc::config::Config;
use workout_calc::{WorkoutFile, driver};

fn init_logging(log_level: &str) {
    // Logs go to stderr so stdout only carries workout summaries.
    let env_filter = tracing_subscriber::EnvFilter::try_new(log_level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(path) = std::env::args_os().nth(1) {
        config.packages_path = Some(PathBuf::from(path));
    }

    init_logging(&config.log_level);
    tracing::info!(log_level = %config.log_level, "workout-calc: log filter");

    let workouts = match &config.packages_path {
        Some(path) => WorkoutFile::load(path)
            .with_context(|| format!("failed to load workouts from {}", path.display()))?,
        None => WorkoutFile {
            packages: driver::sample_packages(),
            ..WorkoutFile::default()
        },
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    driver::run(
        &workouts.packages,
        &workouts.coefficients,
        config.output,
        &mut out,
    )?;
    out.flush()?;

    Ok(())
}
