//! Logging setup
//!
//! The subscriber is installed before configuration is read so config
//! loading can report problems. The level from the config file is applied
//! afterwards through a reload handle.

use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, Registry};

/// Handle for changing the active level after startup
pub struct LogHandle {
    handle: reload::Handle<LevelFilter, Registry>,
}

impl LogHandle {
    /// Apply a level name such as `INFO` or `debug`. Returns false and keeps
    /// the current level if the name is not recognized.
    pub fn apply_level(&self, level: &str) -> bool {
        let Ok(filter) = LevelFilter::from_str(level.trim()) else {
            tracing::warn!("⚠️ Unknown log level '{}', keeping current level", level);
            return false;
        };
        match self.handle.modify(|current| *current = filter) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("⚠️ Could not change log level: {}", e);
                false
            }
        }
    }

    /// Currently active level
    pub fn current(&self) -> Option<LevelFilter> {
        self.handle.clone_current()
    }
}

/// Install the global subscriber, writing to stderr
pub fn init(verbose: bool) -> LogHandle {
    let initial = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let (filter, handle) = reload::Layer::new(initial);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    LogHandle { handle }
}
