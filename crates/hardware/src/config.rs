//! Configuration for the LS-8 machine and its simulator driver.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Behaviour matching a plain `ls8 <program>` invocation.
//! 2. **Structures:** Hierarchical config split into `general` (driver) and
//!    `machine` (CPU semantics) sections.
//! 3. **Loading:** JSON parsing from strings or files.
//!
//! Every field is optional in JSON; omitted fields take their defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// How `CMP` treats the flags that do not match the comparison result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum FlagPolicy {
    /// Clear E, G and L before setting the matching flag.
    #[default]
    Reset,
    /// Set the matching flag and leave the other two as they were.
    ///
    /// Stale flags from an earlier compare remain visible to `JEQ`/`JNE`.
    Sticky,
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use ls8_core::config::{Config, FlagPolicy};
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_steps": 1000 },
///     "machine": { "flag_policy": "Sticky" }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_steps, Some(1000));
/// assert_eq!(config.machine.flag_policy, FlagPolicy::Sticky);
/// assert!(!config.machine.stack_checks);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Driver settings (tracing, step ceiling).
    #[serde(default)]
    pub general: GeneralConfig,
    /// CPU semantics.
    #[serde(default)]
    pub machine: MachineConfig,
}

/// Simulator driver settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Write one trace line per instruction before executing it.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Fail with `StepLimitExceeded` once this many instructions have run
    /// without reaching `HLT`. `None` runs until halt.
    #[serde(default)]
    pub max_steps: Option<u64>,
}

/// CPU semantic options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MachineConfig {
    /// Flag update rule for `CMP`.
    #[serde(default)]
    pub flag_policy: FlagPolicy,

    /// Check pushes and pops against the stack bounds.
    #[serde(default)]
    pub stack_checks: bool,

    /// Lowest address the stack may grow into when `stack_checks` is on.
    /// Defaults to the length of the loaded program.
    #[serde(default)]
    pub stack_limit: Option<u8>,
}

/// Errors raised while reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("could not read config '{}': {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The contents are not a valid configuration document.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] if the JSON is malformed or has wrongly typed fields.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, [`ConfigError::Parse`]
    /// if its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
