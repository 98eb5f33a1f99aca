use std::fs::{self, OpenOptions};

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use studyboost_core::AppConfig;

/// Sends log records to the configured file. The terminal belongs to the
/// TUI, so nothing is logged to stdout or stderr.
pub fn init(config: &AppConfig, verbose: bool) -> Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        config.level_filter()
    };

    let path = config.log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let log_config = ConfigBuilder::new()
        .add_filter_allow_str("studyboost")
        .build();
    WriteLogger::init(level, log_config, file).context("Logger already initialized")?;
    log::debug!("logging to {} at {}", path.display(), level);
    Ok(())
}
