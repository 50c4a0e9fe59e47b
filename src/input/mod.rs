pub mod handler;
pub mod terminal;

use anyhow::Result;
use std::time::Duration;

use crate::game::{Direction, ReplayChoice};

pub use handler::{InputHandler, KeyAction};
pub use terminal::TerminalInput;

/// What the player did during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickInput {
    Steer(Direction),
    /// Nothing arrived before the timeout
    Idle,
    /// Stop playing; honoured between ticks
    Quit,
}

/// Source of player input consumed by the controller
pub trait InputSource {
    /// Wait at most `timeout` for a steering event
    fn poll_direction(&mut self, timeout: Duration) -> Result<TickInput>;

    /// Block until the player answers the replay prompt
    fn poll_replay_choice(&mut self) -> Result<ReplayChoice>;
}
