use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};

use crate::controller::GameController;
use crate::game::{GameConfig, GameEngine};
use crate::input::TerminalInput;
use crate::render::TerminalRenderer;

/// Keyboard play in the terminal
pub struct HumanMode {
    config: GameConfig,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn run(&mut self) -> Result<()> {
        let engine =
            GameEngine::new(self.config.clone()).context("Invalid game configuration")?;

        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let mut renderer = TerminalRenderer::new(CrosstermBackend::new(stderr))?;
        let terminal = renderer.terminal_mut();
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let mut controller = GameController::new(engine, TerminalInput::new(), renderer);
        let result = controller.run();

        let mut renderer = controller.into_renderer();
        let cleanup = Self::cleanup_terminal(renderer.terminal_mut());

        first_error(result, cleanup)
    }

    fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// The game loop's error takes precedence; a teardown failure behind it is only logged
fn first_error(run: Result<()>, cleanup: Result<()>) -> Result<()> {
    match (run, cleanup) {
        (Err(err), Err(cleanup_err)) => {
            tracing::error!(error = %format!("{cleanup_err:#}"), "terminal cleanup failed");
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), cleanup) => cleanup,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_game_error_survives_failed_cleanup() {
        let err = first_error(Err(anyhow!("input closed")), Err(anyhow!("tty gone"))).unwrap_err();
        assert_eq!(err.to_string(), "input closed");
    }

    #[test]
    fn test_cleanup_error_reported_after_clean_run() {
        let err = first_error(Ok(()), Err(anyhow!("tty gone"))).unwrap_err();
        assert_eq!(err.to_string(), "tty gone");
        assert!(first_error(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn test_invalid_config_fails_before_touching_terminal() {
        let mut mode = HumanMode::new(GameConfig {
            step_size: 0,
            ..Default::default()
        });

        let err = mode.run().unwrap_err();
        assert!(err.to_string().contains("Invalid game configuration"));
    }
}
