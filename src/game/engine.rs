use super::{
    action::Direction,
    config::GameConfig,
    error::{ConfigError, SpawnError},
    food::FoodSpawner,
    movement::{self, Movement},
    snake::Snake,
    state::{GameEnd, GameState},
};

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// What the head did this step
    pub movement: Movement,
    /// Whether the game has ended
    pub terminated: bool,
}

impl StepResult {
    pub fn ate_food(&self) -> bool {
        matches!(self.movement, Movement::Ate { .. })
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    spawner: FoodSpawner,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let spawner = FoodSpawner::new(config.seed, config.spawn_attempts);
        Ok(Self { config, spawner })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh game: seeded snake at the start cell, one food, score 0
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(self.config.start_cell(), self.config.initial_snake_length);
        let mut state = GameState::new(self.config.rows(), self.config.cols(), snake, None);

        match self.spawner.spawn(&mut state.board, &state.snake) {
            Ok(food) => state.food = Some(food),
            Err(SpawnError::BoardFull) => state.end = Some(GameEnd::BoardFull),
        }

        tracing::info!(
            rows = self.config.rows(),
            cols = self.config.cols(),
            seed = ?self.config.seed,
            "new game"
        );
        state
    }

    /// Execute one step of the game.
    ///
    /// `requested` is the direction read this tick; `Direction::None` keeps the
    /// current one and a reversal is ignored.
    pub fn step(&mut self, state: &mut GameState, requested: Direction) -> StepResult {
        if !state.is_alive() {
            return StepResult {
                movement: Movement::Idle,
                terminated: true,
            };
        }

        state.snake.direction = state.snake.direction.turned_to(requested);

        let movement = movement::resolve(state, &mut self.spawner);
        match movement {
            Movement::Idle => {}
            Movement::Moved { .. } => state.steps += 1,
            Movement::Ate { food, .. } => {
                state.steps += 1;
                tracing::debug!(score = state.score, food = ?food, "food eaten");
                if food.is_none() {
                    state.end = Some(GameEnd::BoardFull);
                }
            }
            Movement::SelfCollision { at } => {
                state.steps += 1;
                state.end = Some(GameEnd::SelfCollision);
                tracing::debug!(row = at.row, col = at.col, "snake ran into itself");
            }
        }

        StepResult {
            movement,
            terminated: !state.is_alive(),
        }
    }
}
