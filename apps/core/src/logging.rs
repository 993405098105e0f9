//! Tracing subscriber setup for the `docsum` binary.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Default filter when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "docsum_core=info,docsum=info";

/// Output format for log records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    /// Bunyan-style JSON, one record per line
    Json,
}

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Logs go to stderr so stdout stays clean
/// for command output.
pub fn init(format: LogFormat) -> Result<(), AppError> {
    let registry = tracing_subscriber::registry().with(env_filter());

    let result = match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(
                env!("CARGO_PKG_NAME").to_string(),
                std::io::stderr,
            ))
            .try_init(),
    };

    result.map_err(|e| AppError::Config(format!("Failed to install log subscriber: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_falls_back_to_default() {
        temp_env::with_var_unset("RUST_LOG", || {
            assert!(env_filter().to_string().contains("docsum_core=info"));
        });
    }

    #[test]
    fn test_env_filter_reads_rust_log() {
        temp_env::with_var("RUST_LOG", Some("debug"), || {
            assert!(env_filter().to_string().contains("debug"));
        });
    }
}
