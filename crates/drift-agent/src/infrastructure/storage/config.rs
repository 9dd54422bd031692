//! TOML-based configuration for the activity agent.
//!
//! Reads and writes [`AgentConfig`] to the platform-appropriate config file:
//! - Windows:  `%APPDATA%\Drift\config.toml`
//! - Linux:    `$XDG_CONFIG_HOME/drift/config.toml` (or `~/.config/drift/config.toml`)
//! - macOS:    `~/Library/Application Support/Drift/config.toml`
//!
//! # What does the file look like? (for beginners)
//!
//! Every section and every field is optional; anything left out keeps its
//! built-in default.  A file that only slows the schedule down is simply:
//!
//! ```toml
//! [schedule]
//! min_interval_secs = 60
//! max_interval_secs = 120
//! ```
//!
//! The full set of sections is `[planner]`, `[jitter]`, `[cadence]`,
//! `[schedule]`, `[activity]` and `[logging]`.  Run the agent with
//! `--init-config` to write a file containing every default.
//!
//! # Validation
//!
//! Parsing only checks types.  [`AgentConfig::validate`] then rejects values
//! the motion engine cannot work with, e.g. `min_step_delay_ms` above
//! `max_step_delay_ms`, so a typo fails at startup instead of silently
//! collapsing a random range to a constant.

use std::path::{Path, PathBuf};

use drift_core::{
    motion::{cadence::CadenceConfig, planner::MAX_STEPS},
    JitterConfig, MotionConfig, PlannerConfig, ScheduleConfig,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::activity::ActivityRoutine;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The file parsed but a value is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level agent configuration stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub jitter: JitterConfig,
    #[serde(default)]
    pub cadence: CadenceConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub activity: ActivityRoutine,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter used when `RUST_LOG` is unset, e.g. `"info"` or
    /// `"drift_agent=debug"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl AgentConfig {
    /// The motion-engine part of the configuration.
    pub fn motion(&self) -> MotionConfig {
        MotionConfig {
            planner: self.planner.clone(),
            jitter: self.jitter.clone(),
            cadence: self.cadence.clone(),
        }
    }

    /// Checks every range and constant the engine relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.planner;
        if p.base_steps == 0 {
            return invalid("planner.base_steps must be at least 1");
        }
        if p.min_complexity == 0 {
            return invalid("planner.min_complexity must be at least 1");
        }
        check_range("planner.*_complexity", p.min_complexity, p.max_complexity)?;
        match p.max_steps() {
            Some(steps) if steps <= MAX_STEPS => {}
            _ => {
                return Err(ConfigError::Invalid(format!(
                    "planner.base_steps x largest complexity exceeds {MAX_STEPS} steps"
                )))
            }
        }

        let j = &self.jitter;
        check_range("jitter.*_magnitude", j.min_magnitude, j.max_magnitude)?;
        if !j.angular_frequency.is_finite() || !j.peak_intensity.is_finite() {
            return invalid("jitter.angular_frequency and jitter.peak_intensity must be finite");
        }

        let c = &self.cadence;
        check_range("cadence.*_step_delay_ms", c.min_step_delay_ms, c.max_step_delay_ms)?;

        let s = &self.schedule;
        check_range("schedule.*_interval_secs", s.min_interval_secs, s.max_interval_secs)?;

        Ok(())
    }
}

fn invalid(msg: &str) -> Result<(), ConfigError> {
    Err(ConfigError::Invalid(msg.to_string()))
}

/// Half-open ranges `[min, max)` are empty when `min > max`; `min == max`
/// pins the value.
fn check_range<T: PartialOrd + std::fmt::Display>(
    name: &str,
    min: T,
    max: T,
) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::Invalid(format!(
            "{name}: minimum {min} is greater than maximum {max}"
        )));
    }
    Ok(())
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the default config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads and validates the configuration.
///
/// With `path = None` the platform file is used and a missing file yields
/// `AgentConfig::default()`; if the platform directory itself is unknown the
/// defaults are used as well.  An explicit `path` must exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors, [`ConfigError::Parse`]
/// if the TOML is malformed and [`ConfigError::Invalid`] if validation fails.
pub fn load_config(path: Option<&Path>) -> Result<AgentConfig, ConfigError> {
    let config = match path {
        Some(path) => parse_file(path)?,
        None => match config_file_path() {
            Ok(path) => match std::fs::read_to_string(&path) {
                Ok(content) => toml::from_str(&content)?,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => AgentConfig::default(),
                Err(source) => return Err(ConfigError::Io { path, source }),
            },
            Err(ConfigError::NoPlatformConfigDir) => AgentConfig::default(),
            Err(e) => return Err(e),
        },
    };
    config.validate()?;
    Ok(config)
}

fn parse_file(path: &Path) -> Result<AgentConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Persists `config` to `path`, or to the platform file when `path` is `None`.
///
/// Creates the parent directory if it does not exist.  Returns the path
/// written.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(config: &AgentConfig, path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => config_file_path()?,
    };

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(&path, content).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Resolves the platform config directory including the `Drift` subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("Drift"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("drift"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("Drift")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
