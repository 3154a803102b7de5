//! Tracing initialization: console and file share the fmt layer's full format
//! (level, target, span events, all fields).

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::FmtSpan,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Initializes the global tracing subscriber.
///
/// Always appends to `log_file_path` (parent directories are created as
/// needed). With `console` set, the same output is teed to stdout as well;
/// the interactive chat shell passes `false` to keep its prompt clean.
///
/// The log level comes from `RUST_LOG` (e.g. info, debug, trace) and defaults
/// to `info`. Load `.env` (e.g. `dotenvy::dotenv()`) before calling this,
/// otherwise `RUST_LOG` from the file will not take effect.
pub fn init_tracing(log_file_path: &str, console: bool) -> anyhow::Result<()> {
    if let Some(parent) = Path::new(log_file_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;
    let file = Arc::new(file);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if console {
        use tracing_subscriber::fmt::writer::MakeWriterExt;
        let writer = io::stdout.and(file);

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_thread_ids(true)
            .with_level(true)
            .with_file(false)
            .with_line_number(false);

        Registry::default()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(file)
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_thread_ids(true)
            .with_level(true)
            .with_file(false)
            .with_line_number(false);

        Registry::default()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;
    }

    tracing::info!(log_file = %log_file_path, console, "Tracing initialized");
    Ok(())
}
