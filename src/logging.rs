// File: ./src/logging.rs
//! File logging setup.
//!
//! Console and TUI output belong to the conversation, so log records go to
//! `derek.log` in the data directory and never to stdout/stderr.
use crate::context::AppContext;
use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::OpenOptions;

/// Installs the global logger. Calling it again is a no-op.
pub fn init(ctx: &dyn AppContext, level: LevelFilter) -> Result<()> {
    if level == LevelFilter::Off {
        return Ok(());
    }

    let path = ctx.get_log_file_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    let config = ConfigBuilder::new()
        .add_filter_allow_str("derek")
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Error)
        .build();

    if WriteLogger::init(level, config, file).is_ok() {
        log::info!("Derek v{} started, logging to {:?}", env!("CARGO_PKG_VERSION"), path);
    }
    Ok(())
}
