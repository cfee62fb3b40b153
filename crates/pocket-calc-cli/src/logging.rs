//! Tracing subscriber setup
//!
//! `RUST_LOG` wins over the `-q`/`-v` level. Logs go to stderr as text, or to
//! `--log-file` as JSON lines. The interactive terminal owns the screen, so
//! without a log file it runs with no subscriber at all.

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log output goes for a given run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(std::path::PathBuf),
    Disabled,
}

impl LogTarget {
    #[must_use]
    pub fn resolve(config: &CliConfig, interactive: bool) -> Self {
        match (&config.log_file, interactive) {
            (Some(path), _) => Self::File(path.clone()),
            (None, true) => Self::Disabled,
            (None, false) => Self::Stderr,
        }
    }
}

fn filter(config: &CliConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.log_level()))
}

/// Installs the global subscriber
pub fn init_tracing(config: &CliConfig, interactive: bool) -> CliResult<()> {
    let result = match LogTarget::resolve(config, interactive) {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter(config))
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter(config))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
    };
    result.map_err(|e| CliError::logging(e.to_string()))
}
