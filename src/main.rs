use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Logs go to a file only when the user asks for one; the terminal is
/// occupied by the UI. Without `--log-file` tracing stays uninitialized
/// and every event is a no-op.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .compact()
        .with_writer(Arc::new(file))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let opts = showdeck::cli::parse_args();
    init_tracing(opts.log_file.as_deref())?;

    let mut terminal = ratatui::init();
    let result = showdeck::app::run(opts, &mut terminal).await;
    ratatui::restore();
    result
}
