use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::vector::Vector;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Number of food items kept on the grid at all times
    pub food_count: usize,
    /// Time between two simulation ticks, in milliseconds
    pub tick_interval_ms: u64,
    /// Seed for food placement; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 25,
            grid_height: 25,
            food_count: 100,
            tick_interval_ms: 200,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small, sparsely fed grid for testing
    pub fn small() -> Self {
        Self::new(10, 10).with_food_count(5)
    }

    pub fn with_food_count(mut self, food_count: usize) -> Self {
        self.food_count = food_count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn grid(&self) -> GridSize {
        GridSize::new(self.grid_width as i32, self.grid_height as i32)
    }

    /// Load a configuration from a JSON file
    ///
    /// Fields missing from the file keep their default values.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Returns
    ///
    /// `Ok(())` if the grid can hold the starting snake plus all food,
    /// `Err(String)` with an error message otherwise.
    ///
    /// Only the starting position is checked. A grid that is nearly full of
    /// food can still run out of free cells once the snake grows, and food
    /// placement then panics.
    pub fn validate(&self) -> Result<(), String> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid_width, self.grid_height
            ));
        }

        if self.grid_width > i32::MAX as usize || self.grid_height > i32::MAX as usize {
            return Err(format!(
                "grid dimensions must fit in i32, got {}x{}",
                self.grid_width, self.grid_height
            ));
        }

        if self.tick_interval_ms == 0 {
            return Err("tick_interval_ms must be at least 1".to_string());
        }

        let area = self.grid_width.saturating_mul(self.grid_height);
        if self.food_count >= area {
            return Err(format!(
                "food_count ({}) leaves no room for the snake on a {}x{} grid",
                self.food_count, self.grid_width, self.grid_height
            ));
        }

        Ok(())
    }
}

/// Fixed bounds of the playing field: `[0, width) x [0, height)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub width: i32,
    pub height: i32,
}

impl GridSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, pos: Vector) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Starting cell of a fresh snake
    pub fn center(&self) -> Vector {
        Vector::new(self.width / 2, self.height / 2)
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
