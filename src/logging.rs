//! Tracing subscriber setup.
//!
//! Logs only ever go to a file: stdout belongs to the editing session.

use std::{fs::File, path::Path, sync::Arc};

use anyhow::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber, logging to `log_file_path`.
///
/// Filtering follows `RUST_LOG`, with everything at DEBUG and above enabled
/// by default.
pub fn init_global(log_file_path: &Path) -> anyhow::Result<()> {
    let log_file = File::create(log_file_path)
        .with_context(|| format!("cannot create log file {}", log_file_path.display()))?;

    build_subscriber(log_file).init();
    Ok(())
}

pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let env_filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::DEBUG.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer().with_ansi(false).with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}
