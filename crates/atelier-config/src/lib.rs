//! Configuration for the atelier terminal portfolio.
//!
//! Settings live in `config.toml` under the platform config directory
//! (e.g. `~/.config/atelier/config.toml` on Linux). Every key is optional;
//! a missing file yields the defaults.

mod error;

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

pub use error::ConfigError;

/// Environment variable forcing reduced motion on when set to a truthy value.
pub const REDUCED_MOTION_ENV: &str = "ATELIER_REDUCED_MOTION";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Suppress non-essential animation (particle backdrop, cursor trail,
    /// scroll progress).
    pub reduced_motion: bool,
    /// Swallow inspection and clipboard shortcuts while the page runs.
    pub input_guards: bool,
    /// Log file override. Defaults to the platform cache directory.
    pub log_file: Option<PathBuf>,
    /// Particle backdrop tuning.
    pub particles: ParticlesConfig,
    /// Virtual pixel size of one terminal cell.
    pub cells: CellConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            input_guards: false,
            log_file: None,
            particles: ParticlesConfig::default(),
            cells: CellConfig::default(),
        }
    }
}

/// Particle backdrop tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticlesConfig {
    /// Viewport width (virtual pixels) below which the device is compact.
    pub mobile_breakpoint: u32,
    /// Particle count on compact viewports.
    pub compact_count: usize,
    /// Particle count on wide viewports.
    pub wide_count: usize,
    /// Minimum milliseconds between draws on compact viewports.
    pub compact_frame_ms: u64,
    /// Minimum milliseconds between draws on wide viewports.
    pub wide_frame_ms: u64,
    /// Quiet period before a resize burst regenerates the field.
    pub resize_quiet_ms: u64,
    /// Chance that a particle is gold rather than grey.
    pub accent_probability: f64,
    /// Opacity of the whole particle layer.
    pub layer_opacity: f32,
    /// Fixed seed for reproducible fields.
    pub seed: Option<u64>,
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768,
            compact_count: 15,
            wide_count: 25,
            compact_frame_ms: 33,
            wide_frame_ms: 16,
            resize_quiet_ms: 250,
            accent_probability: 0.3,
            layer_opacity: 0.9,
            seed: None,
        }
    }
}

/// Virtual pixel metrics of a terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellConfig {
    pub width_px: u32,
    pub height_px: u32,
}

impl Default for CellConfig {
    fn default() -> Self {
        Self {
            width_px: 8,
            height_px: 16,
        }
    }
}

impl Config {
    /// Path of the default config file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Default log file location.
    pub fn default_log_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.cache_dir().join("atelier.log"))
    }

    /// Log file to write to: the configured override or the default.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(Self::default_log_path)
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and validate the config at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Apply overrides using `lookup` to read variables.
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup(REDUCED_MOTION_ENV)
            && is_truthy(&value)
        {
            self.reduced_motion = true;
        }
    }

    /// Reject values that would make the backdrop misbehave.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.particles;
        if !(0.0..=1.0).contains(&p.accent_probability) {
            return Err(ConfigError::Invalid(format!(
                "particles.accent_probability must be within 0.0..=1.0, got {}",
                p.accent_probability
            )));
        }
        if !(0.0..=1.0).contains(&p.layer_opacity) {
            return Err(ConfigError::Invalid(format!(
                "particles.layer_opacity must be within 0.0..=1.0, got {}",
                p.layer_opacity
            )));
        }
        if self.cells.width_px == 0 || self.cells.height_px == 0 {
            return Err(ConfigError::Invalid(
                "cells.width_px and cells.height_px must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "atelier")
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
