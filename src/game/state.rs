use super::board::{Board, Cell, CellState};
use super::snake::Snake;

/// Why a game stopped running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// The head ran into the body
    SelfCollision,
    /// The snake fills every cell; no place is left for food
    BoardFull,
}

/// Lifecycle of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initializing,
    Running,
    GameOver,
    AwaitingReplayChoice,
    Terminated,
}

/// Complete state of one game, rebuilt from scratch on replay
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub board: Board,
    pub snake: Snake,
    /// Current food cell; `None` once the board is full
    pub food: Option<Cell>,
    pub score: u32,
    pub steps: u32,
    pub end: Option<GameEnd>,
}

impl GameState {
    /// Lay out a snake and a food cell on a fresh board
    pub fn new(height: usize, width: usize, snake: Snake, food: Option<Cell>) -> Self {
        let mut board = Board::new(height, width);
        for segment in snake.segments() {
            board.set_occupancy(segment, CellState::Body);
        }
        board.set_occupancy(snake.head(), CellState::Head);
        if let Some(food) = food {
            debug_assert!(!snake.contains(food), "food placed on the snake");
            board.set_occupancy(food, CellState::Food);
        }

        Self {
            board,
            snake,
            food,
            score: 0,
            steps: 0,
            end: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.end.is_none()
    }
}
