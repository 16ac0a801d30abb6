//! Configuration for the machine and clock.
//!
//! This module defines the configuration structures that parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline constants (tick period, tracing).
//! 2. **Structures:** Hierarchical config for general behavior and the clock.
//!
//! Configuration is built in code, mapped from CLI flags, or deserialized
//! from JSON via [`Config::from_json`]; use `Config::default()` otherwise.

use serde::Deserialize;

/// Default configuration constants.
mod defaults {
    /// Clock tick period in milliseconds.
    ///
    /// One instruction executes per tick; 250 ms keeps individual steps
    /// observable when watching a trace by eye.
    pub const INTERVAL_MS: u64 = 250;
}

/// General execution behavior.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Emit a trace event for every executed instruction.
    pub trace_instructions: bool,
}

/// Clock pacing.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Tick period in milliseconds. Zero steps without pacing.
    pub interval_ms: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            interval_ms: defaults::INTERVAL_MS,
        }
    }
}

/// Root configuration type.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General execution behavior.
    pub general: GeneralConfig,
    /// Clock pacing.
    pub clock: ClockConfig,
}

impl Config {
    /// Deserializes a configuration from JSON, filling omitted fields with
    /// defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
