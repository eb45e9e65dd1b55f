use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::state::Position;
use crate::error::InitializationError;

/// Largest accepted cell size, in pixels
pub const MAX_CELL_SIZE: i32 = 1000;
/// Largest accepted number of cells along either axis
pub const MAX_GRID_CELLS: i32 = 1000;

/// Geometry and timing for a session. Pixel sizes must be exact multiples
/// of `cell_size`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of one grid cell, in pixels
    pub cell_size: i32,
    /// Canvas width in pixels
    pub canvas_width: i32,
    /// Canvas height in pixels
    pub canvas_height: i32,
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// Draw grid lines between cells
    pub show_grid: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: 15,
            canvas_width: 300,
            canvas_height: 300,
            tick_rate: 15,
            show_grid: false,
        }
    }
}

impl GameConfig {
    /// Create a configuration for a `columns` x `rows` grid with the default
    /// cell size and tick rate
    pub fn with_grid(columns: i32, rows: i32) -> Self {
        let defaults = Self::default();
        Self {
            canvas_width: columns * defaults.cell_size,
            canvas_height: rows * defaults.cell_size,
            ..defaults
        }
    }

    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig =
            serde_json::from_str(&json).context("Failed to deserialize config")?;
        Ok(config)
    }

    /// Check that the canvas is a whole number of cells
    pub fn validate(&self) -> Result<(), InitializationError> {
        if self.cell_size <= 0 {
            return Err(InitializationError::InvalidConfig(format!(
                "cell size must be positive, got {}",
                self.cell_size
            )));
        }
        if self.canvas_width <= 0 || self.canvas_height <= 0 {
            return Err(InitializationError::InvalidConfig(format!(
                "canvas must be non-empty, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if self.cell_size > MAX_CELL_SIZE {
            return Err(InitializationError::InvalidConfig(format!(
                "cell size must be at most {}, got {}",
                MAX_CELL_SIZE, self.cell_size
            )));
        }
        if self.canvas_width % self.cell_size != 0 || self.canvas_height % self.cell_size != 0 {
            return Err(InitializationError::InvalidConfig(format!(
                "canvas {}x{} is not a multiple of cell size {}",
                self.canvas_width, self.canvas_height, self.cell_size
            )));
        }
        if self.columns() > MAX_GRID_CELLS || self.rows() > MAX_GRID_CELLS {
            return Err(InitializationError::InvalidConfig(format!(
                "grid {}x{} exceeds {} cells per side",
                self.columns(),
                self.rows(),
                MAX_GRID_CELLS
            )));
        }
        if self.tick_rate == 0 {
            return Err(InitializationError::InvalidConfig(
                "tick rate must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Minimum time between two ticks (1000 / tick_rate ms)
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_rate))
    }

    /// Number of cell columns
    pub fn columns(&self) -> i32 {
        self.canvas_width / self.cell_size
    }

    /// Number of cell rows
    pub fn rows(&self) -> i32 {
        self.canvas_height / self.cell_size
    }

    /// Where a new snake's head starts: one cell in from the top-left corner
    pub fn start_position(&self) -> Position {
        Position::new(self.cell_size, self.cell_size)
    }
}
