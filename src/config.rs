//! Game settings.
//!
//! Values come from `Settings::default()`, optionally replaced by a JSON file
//! and then by command-line flags, in that order.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const CELL_SIZE: f32 = 30.0;
pub const TICK_INTERVAL_MS: u64 = 500;
pub const VIEWPORT_FILL: f32 = 0.9;
/// Smallest accepted cell. Below one pixel the grid derived from the window
/// grows without bound.
pub const MIN_CELL_SIZE: f32 = 1.0;

/// What happens to a full row.
///
/// `ZeroInPlace` empties the row and leaves everything else where it was, so
/// blocks never fall. `ShiftDown` removes the row and drops every row above
/// it by one, with a new empty row at the top. Columns are zeroed in place
/// under both policies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RowClearPolicy {
    #[default]
    ZeroInPlace,
    ShiftDown,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Side of one cell in pixels.
    pub cell_size: f32,
    pub tick_interval_ms: u64,
    /// Share of the window, per axis, given to the grid.
    pub viewport_fill: f32,
    pub row_clear_policy: RowClearPolicy,
    /// Fixed RNG seed; a random one is drawn when unset.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            tick_interval_ms: TICK_INTERVAL_MS,
            viewport_fill: VIEWPORT_FILL,
            row_clear_policy: RowClearPolicy::default(),
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_size.is_finite() && self.cell_size >= MIN_CELL_SIZE) {
            return Err(ConfigError::Invalid {
                field: "cell_size",
                reason: format!(
                    "must be at least {} pixel, got {}",
                    MIN_CELL_SIZE, self.cell_size
                ),
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "tick_interval_ms",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(self.viewport_fill > 0.0 && self.viewport_fill <= 1.0) {
            return Err(ConfigError::Invalid {
                field: "viewport_fill",
                reason: format!("must be in (0, 1], got {}", self.viewport_fill),
            });
        }
        Ok(())
    }

    pub fn tick_seconds(&self) -> f32 {
        self.tick_interval_ms as f32 / 1000.0
    }
}

/// Command-line flags for the game window.
#[derive(Debug, Default, Parser)]
#[command(name = "crossfall", version, about = "Falling-block puzzle with row and column clears")]
pub struct Cli {
    /// JSON settings file; flags below override its values.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seed for shape selection.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds between simulation ticks.
    #[arg(long = "tick-ms", value_name = "MS")]
    pub tick_ms: Option<u64>,

    /// Cell side length in pixels.
    #[arg(long, value_name = "PX")]
    pub cell_size: Option<f32>,

    /// How full rows are cleared.
    #[arg(long = "row-clear", value_enum)]
    pub row_clear: Option<RowClearPolicy>,
}

impl Cli {
    pub fn into_settings(self) -> Result<Settings, ConfigError> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_file(path)?,
            None => Settings::default(),
        };
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(ms) = self.tick_ms {
            settings.tick_interval_ms = ms;
        }
        if let Some(px) = self.cell_size {
            settings.cell_size = px;
        }
        if let Some(policy) = self.row_clear {
            settings.row_clear_policy = policy;
        }
        settings.validate()?;
        Ok(settings)
    }
}
