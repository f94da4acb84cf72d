use std::path::Path;

use color_eyre::eyre::{WrapErr, eyre};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the filter from `RUST_LOG` or fall back to the given level
fn env_filter(level: &str) -> EnvFilter {
    let default_filter = format!("nutrisweep={level},nutrisweep_core=warn");
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Initialize logging.
///
/// Logs go to stderr so that stdout carries only the report. With a log file,
/// entries are appended to that file instead. The level can be controlled via
/// the `level` parameter or the `RUST_LOG` environment variable.
pub fn init_logging(log_file: Option<&Path>, level: &str) -> color_eyre::Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter(level));

    match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .ok_or_else(|| eyre!("log file path {} has no file name", path.display()))?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            std::fs::create_dir_all(dir)
                .wrap_err_with(|| format!("creating log directory {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            registry
                .with(
                    fmt::layer()
                        .with_writer(appender)
                        .with_ansi(false)
                        .with_target(true)
                        .with_thread_ids(false),
                )
                .try_init()?;

            tracing::info!(log_path = %path.display(), "nutrisweep logging initialized");
        }
        None => {
            registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_thread_ids(false),
                )
                .try_init()?;
        }
    }
    Ok(())
}
