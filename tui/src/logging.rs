use anyhow::{Context, anyhow};
use std::{fs::File, path::Path, sync::Arc};
use tracing_subscriber::EnvFilter;

/// Sends `log` records to `path` so they never land on the game screen.
///
/// `RUST_LOG` overrides `level` when set. Nothing is installed and no file is created
/// when logging ends up off.
pub fn init(path: &Path, level: log::LevelFilter) -> anyhow::Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    init_with(path, level, directives.as_deref())
}

fn init_with(path: &Path, level: log::LevelFilter, directives: Option<&str>) -> anyhow::Result<()> {
    let filter = match directives.map(EnvFilter::try_new) {
        Some(Ok(filter)) => filter,
        _ if level == log::LevelFilter::Off => return Ok(()),
        _ => EnvFilter::new(level.as_str().to_ascii_lowercase()),
    };

    let log_file = File::create(path)
        .with_context(|| format!("could not create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))?;

    log::info!("Logging to {} at {}", path.display(), level);
    Ok(())
}
