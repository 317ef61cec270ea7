//! Runtime settings.
//!
//! Settings are layered: built-in defaults, then an optional settings file,
//! then `FLOW_OVERLAY_*` environment variables.
//!
//! ```toml
//! font_size = 14
//! node_width = 28
//! node_height = 3
//! theme = "dark"
//! log_file = "/var/log/flow-overlay.log"
//! ```

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;
use crate::ui::{ThemeChoice, DEFAULT_BOLD_FONT_SIZE};

/// Environment variable prefix, e.g. `FLOW_OVERLAY_FONT_SIZE=16`.
pub const ENV_PREFIX: &str = "FLOW_OVERLAY";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Font size handed to the text primitives.
    pub font_size: u16,
    /// Node canvas width in columns.
    pub node_width: u16,
    /// Node canvas height in rows.
    pub node_height: u16,
    /// Font size at which text turns bold.
    pub bold_font_size: u16,
    /// Seconds between file checks in watch mode.
    pub refresh_secs: u64,
    pub theme: ThemeChoice,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Append logs to this file instead of stderr.
    pub log_file: Option<PathBuf>,
}

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// No subscriber is installed.
    Off,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_size: 14,
            node_width: 28,
            node_height: 3,
            bold_font_size: DEFAULT_BOLD_FONT_SIZE,
            refresh_secs: 1,
            theme: ThemeChoice::Auto,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Settings {
    /// Load settings from an optional file and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Log destination for this run.
    ///
    /// The watch board owns the terminal, so without a `log_file` it gets no
    /// logging at all.
    pub fn log_target(&self, watch: bool) -> LogTarget {
        match &self.log_file {
            Some(path) => LogTarget::File(path.clone()),
            None if watch => LogTarget::Off,
            None => LogTarget::Stderr,
        }
    }
}
