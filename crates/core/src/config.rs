//! Configuration for front ends driving the VM.
//!
//! This module defines the settings shared by the batch runner and the REPL:
//! 1. **General:** Per-instruction tracing and the default log filter.
//! 2. **REPL:** Prompts, pending-code display and segment reporting for interactive sessions.
//!
//! Configuration is read from JSON. Every field has a default, so `{}` is a
//! complete file and `Config::default()` stands in when no file is given.

use std::path::Path;
use std::{fs, io};

use serde::Deserialize;

/// Default configuration values.
mod defaults {
    /// Log filter used when `RUST_LOG` is unset.
    pub const LOG_FILTER: &str = "warn";

    /// Prompt shown when the REPL waits for a new instruction.
    pub const PROMPT: &str = "ws> ";

    /// Prompt shown while an instruction is only partially entered.
    pub const CONTINUATION_PROMPT: &str = "..> ";
}

/// Errors raised while reading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config: {0}")]
    Io(#[from] io::Error),

    /// The file is not valid configuration JSON.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Engine and logging settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Interactive session settings.
    #[serde(default)]
    pub repl: ReplConfig,
}

impl Config {
    /// Parses a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

/// Engine and logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `trace` event for every executed instruction.
    #[serde(default)]
    pub trace_instructions: bool,

    /// `tracing` filter directive used when `RUST_LOG` is not set.
    #[serde(default = "GeneralConfig::default_log_filter")]
    pub log_filter: String,
}

impl GeneralConfig {
    fn default_log_filter() -> String {
        defaults::LOG_FILTER.to_owned()
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            log_filter: Self::default_log_filter(),
        }
    }
}

/// Interactive session settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReplConfig {
    /// Primary prompt.
    #[serde(default = "ReplConfig::default_prompt")]
    pub prompt: String,

    /// Prompt shown while the pending buffer holds a partial instruction.
    #[serde(default = "ReplConfig::default_continuation_prompt")]
    pub continuation_prompt: String,

    /// Print the segment id after each load that consumed input.
    #[serde(default = "ReplConfig::default_show_segments")]
    pub show_segments: bool,

    /// Prefix the prompt with `[segment]` and the pending partial code, drawn
    /// as `.` for space, `_` for tab and `,` for newline.
    #[serde(default = "ReplConfig::default_show_pending")]
    pub show_pending: bool,
}

impl ReplConfig {
    fn default_prompt() -> String {
        defaults::PROMPT.to_owned()
    }

    fn default_continuation_prompt() -> String {
        defaults::CONTINUATION_PROMPT.to_owned()
    }

    const fn default_show_segments() -> bool {
        true
    }

    const fn default_show_pending() -> bool {
        true
    }
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: Self::default_prompt(),
            continuation_prompt: Self::default_continuation_prompt(),
            show_segments: Self::default_show_segments(),
            show_pending: Self::default_show_pending(),
        }
    }
}
