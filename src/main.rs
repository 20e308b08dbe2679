use std::path::Path;

use anyhow::Context;
use clap::Parser;
use kruskal_maze::{
    app::App,
    config::{Args, GameConfig},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Send tracing output to `log_file`, since the terminal is taken by the maze.
/// The returned guard flushes pending lines when dropped.
fn init_tracing(log_file: &Path) -> anyhow::Result<WorkerGuard> {
    let directory = log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = log_file
        .file_name()
        .with_context(|| format!("log file path {} has no file name", log_file.display()))?;
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = init_tracing(&args.log_file)?;

    // Dimensions are checked before the terminal is touched
    let config = GameConfig::from_args(&args)?;
    tracing::info!(
        "Starting {}x{} game (seed: {:?})",
        config.width,
        config.height,
        config.seed
    );

    let mut stdout = std::io::stdout();
    App::setup_terminal(&mut stdout)?;
    let result = App::new(config).run();
    App::restore_terminal(&mut stdout)?;
    if let Err(e) = &result {
        tracing::error!("Game aborted: {:#}", e);
    }
    result
}
