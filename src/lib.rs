//! Torus Snake - a terminal Snake game on a wrap-around grid
//!
//! This library provides:
//! - Core game logic (game module)
//! - The game lifecycle state machine (controller module)
//! - Keyboard input and TUI rendering (input, render modules)
//! - Session statistics (metrics module)
//! - Terminal play (modes module)

pub mod controller;
pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
