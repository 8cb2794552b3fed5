use clap::Parser;
use color_eyre::eyre::Result;
use docdex_tui::Cli;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let _log_guard = init_logging(cli.log_file.clone())?;
    docdex_tui::run_main(cli).await
}

/// The UI owns the terminal, so logs go to a file. The returned guard
/// flushes the writer on drop and must outlive the app.
fn init_logging(log_file: Option<PathBuf>) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let path = log_file.unwrap_or_else(|| std::env::temp_dir().join("docdex-tui.log"));
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}
