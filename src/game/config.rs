use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::board::Cell;
use super::error::ConfigError;

/// Configuration for the game
///
/// Extents and the start point are given in units; the grid is the lattice of
/// whole `step_size` steps inside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Height of the play field in units
    pub board_height: u32,
    /// Width of the play field in units
    pub board_width: u32,
    /// Size of one movement step in units
    pub step_size: u32,
    /// Maximum wait per input poll, also the minimum spacing between ticks
    pub tick_interval_ms: u64,
    /// Vertical start point of the snake in units
    pub start_y: u32,
    /// Horizontal start point of the snake in units
    pub start_x: u32,
    /// Number of (initially overlapping) segments the snake starts with
    pub initial_snake_length: usize,
    /// Random draws the food spawner makes before enumerating empty cells
    pub spawn_attempts: usize,
    /// Fixed RNG seed for reproducible food placement
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_height: 600,
            board_width: 810,
            step_size: 30,
            tick_interval_ms: 60,
            start_y: 300,
            start_x: 60,
            initial_snake_length: 3,
            spawn_attempts: 64,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a step-1 configuration with the given number of cells
    pub fn grid(rows: u32, cols: u32) -> Self {
        Self {
            board_height: rows,
            board_width: cols,
            step_size: 1,
            start_y: rows / 2,
            start_x: cols / 2,
            ..Default::default()
        }
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_size == 0 {
            return Err(ConfigError::ZeroStepSize);
        }
        // Seed segments overlap on one cell, so food needs only one more.
        if self.rows() * self.cols() < 2 {
            return Err(ConfigError::GridTooSmall {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        if self.initial_snake_length == 0 {
            return Err(ConfigError::ZeroSnakeLength);
        }
        if self.spawn_attempts == 0 {
            return Err(ConfigError::ZeroSpawnAttempts);
        }
        Ok(())
    }

    /// Number of grid rows
    pub fn rows(&self) -> usize {
        (self.board_height / self.step_size.max(1)) as usize
    }

    /// Number of grid columns
    pub fn cols(&self) -> usize {
        (self.board_width / self.step_size.max(1)) as usize
    }

    /// Start point snapped to the lattice and kept inside the grid
    pub fn start_cell(&self) -> Cell {
        let step = self.step_size.max(1);
        let row = (self.start_y / step) as usize % self.rows().max(1);
        let col = (self.start_x / step) as usize % self.cols().max(1);
        Cell::new(row as i32, col as i32)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
