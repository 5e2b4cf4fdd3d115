use anyhow::{Result, anyhow};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt};

use crate::args::LogLevel;

/// Where diagnostic events go
pub enum LogTarget {
    Stderr,
    /// Used while the terminal UI owns the screen
    File(PathBuf),
}

/// Install the global subscriber. `RUST_LOG` wins over `--log-level`.
pub fn init(level: LogLevel, target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter()));
    let builder = fmt().with_env_filter(filter).with_target(false);

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    installed.map_err(|e| anyhow!("Failed to initialise logging: {}", e))
}
