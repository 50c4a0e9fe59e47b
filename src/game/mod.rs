//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The grid wraps around on every edge.

pub mod action;
pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod movement;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, ReplayChoice};
pub use board::{Board, Cell, CellState};
pub use config::GameConfig;
pub use engine::{GameEngine, StepResult};
pub use error::{ConfigError, SpawnError};
pub use food::FoodSpawner;
pub use movement::Movement;
pub use snake::Snake;
pub use state::{GameEnd, GameState, Phase};
