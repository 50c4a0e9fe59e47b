pub mod renderer;

use anyhow::Result;

use crate::game::GameState;
use crate::metrics::GameMetrics;

pub use renderer::TerminalRenderer;

/// Display consumed by the controller; draws are fire-and-forget
pub trait Renderer {
    /// Draw the running game
    fn render(&mut self, state: &GameState, metrics: &GameMetrics) -> Result<()>;

    /// Draw the end-of-game overlay with the final score and replay prompt
    fn render_game_over(&mut self, state: &GameState, metrics: &GameMetrics) -> Result<()>;
}
