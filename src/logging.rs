//! File-backed `tracing` setup. The terminal belongs to the game, so log
//! lines never go to stdout or stderr.

use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file, truncated at startup
    pub file: PathBuf,
    /// Filter directives used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            file: PathBuf::from("connect_four.log"),
            filter: "info".to_string(),
        }
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(config: &LoggingConfig) -> std::io::Result<()> {
    let log_file = std::fs::File::create(&config.file)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
