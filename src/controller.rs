//! Game lifecycle: Initializing -> Running -> GameOver -> AwaitingReplayChoice,
//! then back to Initializing on replay or out to Terminated.

use anyhow::Result;

use crate::game::{Direction, GameEngine, GameState, Phase, ReplayChoice};
use crate::input::{InputSource, TickInput};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Drives the engine one tick at a time against an input source and a renderer
pub struct GameController<I: InputSource, R: Renderer> {
    engine: GameEngine,
    input: I,
    renderer: R,
    phase: Phase,
    state: Option<GameState>,
    metrics: GameMetrics,
}

impl<I: InputSource, R: Renderer> GameController<I, R> {
    pub fn new(engine: GameEngine, input: I, renderer: R) -> Self {
        Self {
            engine,
            input,
            renderer,
            phase: Phase::Initializing,
            state: None,
            metrics: GameMetrics::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The current game, absent before the first initialization and after termination
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Hand the renderer back, e.g. to restore the terminal
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Run until the player declines a replay or quits
    pub fn run(&mut self) -> Result<()> {
        while self.phase != Phase::Terminated {
            self.advance()?;
        }
        Ok(())
    }

    /// Perform the work of the current phase and move to the next one
    pub fn advance(&mut self) -> Result<Phase> {
        self.phase = match self.phase {
            Phase::Initializing => self.initialize()?,
            Phase::Running => self.tick()?,
            Phase::GameOver => self.show_game_over()?,
            Phase::AwaitingReplayChoice => self.await_replay_choice()?,
            Phase::Terminated => Phase::Terminated,
        };
        Ok(self.phase)
    }

    fn initialize(&mut self) -> Result<Phase> {
        // Replay swaps in a fresh aggregate; nothing of the old game is reused.
        let state = self.engine.reset();
        self.metrics.on_game_start();
        self.renderer.render(&state, &self.metrics)?;

        let next = if state.is_alive() {
            Phase::Running
        } else {
            self.metrics.on_game_over(&state);
            Phase::GameOver
        };
        self.state = Some(state);
        Ok(next)
    }

    fn tick(&mut self) -> Result<Phase> {
        let Some(state) = self.state.as_mut() else {
            return Ok(Phase::Initializing);
        };

        let requested = match self.input.poll_direction(self.engine.config().tick_interval())? {
            TickInput::Quit => {
                tracing::info!(score = state.score, "player quit mid-game");
                self.state = None;
                return Ok(Phase::Terminated);
            }
            TickInput::Steer(direction) => direction,
            TickInput::Idle => Direction::None,
        };

        let result = self.engine.step(state, requested);
        self.metrics.update();
        self.renderer.render(state, &self.metrics)?;

        if result.terminated {
            self.metrics.on_game_over(state);
            tracing::info!(
                score = state.score,
                length = state.snake.len(),
                steps = state.steps,
                end = ?state.end,
                "game over"
            );
            Ok(Phase::GameOver)
        } else {
            Ok(Phase::Running)
        }
    }

    fn show_game_over(&mut self) -> Result<Phase> {
        if let Some(state) = self.state.as_ref() {
            self.renderer.render_game_over(state, &self.metrics)?;
        }
        Ok(Phase::AwaitingReplayChoice)
    }

    fn await_replay_choice(&mut self) -> Result<Phase> {
        let choice = self.input.poll_replay_choice()?;
        tracing::info!(?choice, "replay choice");

        Ok(match choice {
            ReplayChoice::Yes => Phase::Initializing,
            ReplayChoice::No => {
                self.state = None;
                Phase::Terminated
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, GameConfig, GameEnd};
    use anyhow::bail;
    use std::collections::VecDeque;
    use std::time::Duration;

    #[derive(Default)]
    struct ScriptedInput {
        ticks: VecDeque<TickInput>,
        choices: VecDeque<ReplayChoice>,
        timeouts: Vec<Duration>,
    }

    impl ScriptedInput {
        fn new(ticks: &[TickInput], choices: &[ReplayChoice]) -> Self {
            Self {
                ticks: ticks.iter().copied().collect(),
                choices: choices.iter().copied().collect(),
                timeouts: Vec::new(),
            }
        }
    }

    impl InputSource for ScriptedInput {
        fn poll_direction(&mut self, timeout: Duration) -> Result<TickInput> {
            self.timeouts.push(timeout);
            Ok(self.ticks.pop_front().unwrap_or(TickInput::Idle))
        }

        fn poll_replay_choice(&mut self) -> Result<ReplayChoice> {
            match self.choices.pop_front() {
                Some(choice) => Ok(choice),
                None => bail!("no replay choice scripted"),
            }
        }
    }

    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<(u32, usize)>,
        game_overs: Vec<u32>,
    }

    impl Renderer for RecordingRenderer {
        fn render(&mut self, state: &GameState, _metrics: &GameMetrics) -> Result<()> {
            self.frames.push((state.score, state.snake.len()));
            Ok(())
        }

        fn render_game_over(&mut self, state: &GameState, _metrics: &GameMetrics) -> Result<()> {
            self.game_overs.push(state.score);
            Ok(())
        }
    }

    struct BrokenRenderer;

    impl Renderer for BrokenRenderer {
        fn render(&mut self, _state: &GameState, _metrics: &GameMetrics) -> Result<()> {
            bail!("display went away")
        }

        fn render_game_over(&mut self, _state: &GameState, _metrics: &GameMetrics) -> Result<()> {
            bail!("display went away")
        }
    }

    fn engine() -> GameEngine {
        GameEngine::new(GameConfig {
            seed: Some(21),
            tick_interval_ms: 40,
            ..GameConfig::grid(9, 9)
        })
        .unwrap()
    }

    fn steer(direction: Direction) -> TickInput {
        TickInput::Steer(direction)
    }

    #[test]
    fn test_initialization_starts_running() {
        let mut controller = GameController::new(
            engine(),
            ScriptedInput::default(),
            RecordingRenderer::default(),
        );
        assert_eq!(controller.phase(), Phase::Initializing);
        assert!(controller.state().is_none());

        assert_eq!(controller.advance().unwrap(), Phase::Running);

        let state = controller.state().unwrap();
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.direction, Direction::None);
        assert_eq!(controller.renderer().frames.len(), 1);
    }

    #[test]
    fn test_ticks_poll_with_configured_interval() {
        let input = ScriptedInput::new(&[steer(Direction::Up), TickInput::Idle], &[]);
        let mut controller = GameController::new(engine(), input, RecordingRenderer::default());

        controller.advance().unwrap();
        controller.advance().unwrap();
        controller.advance().unwrap();

        assert_eq!(controller.phase(), Phase::Running);
        assert_eq!(controller.input.timeouts, vec![Duration::from_millis(40); 2]);
        assert_eq!(controller.renderer().frames.len(), 3);
        assert_eq!(controller.state().unwrap().steps, 2);
    }

    #[test]
    fn test_idle_ticks_before_first_direction_do_nothing() {
        let input = ScriptedInput::new(&[TickInput::Idle, TickInput::Idle], &[]);
        let mut controller = GameController::new(engine(), input, RecordingRenderer::default());

        controller.advance().unwrap();
        let start = controller.state().unwrap().clone();
        controller.advance().unwrap();
        controller.advance().unwrap();

        assert_eq!(controller.state().unwrap(), &start);
    }

    #[test]
    fn test_quit_terminates_between_ticks() {
        let input = ScriptedInput::new(&[steer(Direction::Right), TickInput::Quit], &[]);
        let mut controller = GameController::new(engine(), input, RecordingRenderer::default());

        controller.run().unwrap();

        assert_eq!(controller.phase(), Phase::Terminated);
        assert!(controller.state().is_none());
        assert!(controller.renderer().game_overs.is_empty());
    }

    /// Right, Down, Left, Up closes a loop onto the body of a length-5 snake.
    fn crash_into_self(controller: &mut GameController<ScriptedInput, RecordingRenderer>) {
        let state = controller.state.as_mut().unwrap();
        *state = GameState::new(
            9,
            9,
            crate::game::Snake::from_segments(
                (0..5).map(|col| Cell::new(4, col)),
                Direction::Right,
            )
            .unwrap(),
            Some(Cell::new(8, 8)),
        );
    }

    #[test]
    fn test_collision_then_decline_replay() {
        let input = ScriptedInput::new(
            &[steer(Direction::Down), steer(Direction::Left), steer(Direction::Up)],
            &[ReplayChoice::No],
        );
        let mut controller = GameController::new(engine(), input, RecordingRenderer::default());
        controller.advance().unwrap();
        crash_into_self(&mut controller);

        assert_eq!(controller.advance().unwrap(), Phase::Running);
        assert_eq!(controller.advance().unwrap(), Phase::Running);
        assert_eq!(controller.advance().unwrap(), Phase::GameOver);
        assert_eq!(
            controller.state().unwrap().end,
            Some(GameEnd::SelfCollision)
        );
        assert_eq!(controller.metrics().games_played, 1);

        assert_eq!(controller.advance().unwrap(), Phase::AwaitingReplayChoice);
        assert_eq!(controller.renderer().game_overs, vec![0]);

        assert_eq!(controller.advance().unwrap(), Phase::Terminated);
        assert!(controller.state().is_none());
    }

    #[test]
    fn test_replay_builds_fresh_game() {
        let input = ScriptedInput::new(
            &[
                steer(Direction::Down),
                steer(Direction::Left),
                steer(Direction::Up),
            ],
            &[ReplayChoice::Yes, ReplayChoice::No],
        );
        let mut controller = GameController::new(engine(), input, RecordingRenderer::default());
        controller.advance().unwrap();
        crash_into_self(&mut controller);
        controller.state.as_mut().unwrap().score = 4;

        while controller.phase() != Phase::AwaitingReplayChoice {
            controller.advance().unwrap();
        }
        assert_eq!(controller.advance().unwrap(), Phase::Initializing);
        assert_eq!(controller.advance().unwrap(), Phase::Running);

        let state = controller.state().unwrap();
        assert!(state.is_alive());
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(controller.metrics().high_score, 4);
    }

    #[test]
    fn test_renderer_failure_is_fatal() {
        let mut controller =
            GameController::new(engine(), ScriptedInput::default(), BrokenRenderer);

        let err = controller.run().unwrap_err();
        assert!(err.to_string().contains("display went away"));
    }

    #[test]
    fn test_input_failure_is_fatal() {
        let input = ScriptedInput::new(&[], &[]);
        let mut controller = GameController::new(engine(), input, RecordingRenderer::default());
        controller.phase = Phase::AwaitingReplayChoice;

        assert!(controller.run().is_err());
    }
}
