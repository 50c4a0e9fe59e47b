use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::board::{Board, Cell, CellState};
use super::error::SpawnError;
use super::snake::Snake;

/// Places food on a random empty cell
pub struct FoodSpawner {
    rng: StdRng,
    max_attempts: usize,
}

impl FoodSpawner {
    pub fn new(seed: Option<u64>, max_attempts: usize) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Mark a new food cell on the board and return it.
    ///
    /// Samples uniformly over the whole grid for a bounded number of draws,
    /// then picks among the remaining empty cells directly.
    pub fn spawn(&mut self, board: &mut Board, snake: &Snake) -> Result<Cell, SpawnError> {
        let is_free =
            |cell: Cell| board.occupancy_at(cell) == CellState::Empty && !snake.contains(cell);

        let sampled = (0..self.max_attempts)
            .map(|_| {
                Cell::new(
                    self.rng.gen_range(0..board.height()) as i32,
                    self.rng.gen_range(0..board.width()) as i32,
                )
            })
            .find(|cell| is_free(*cell));

        let food = match sampled {
            Some(cell) => cell,
            None => {
                let free: Vec<Cell> = board
                    .empty_cells()
                    .into_iter()
                    .filter(|cell| !snake.contains(*cell))
                    .collect();
                tracing::debug!(
                    free = free.len(),
                    "food sampling exhausted, enumerating empty cells"
                );
                *free.choose(&mut self.rng).ok_or(SpawnError::BoardFull)?
            }
        };

        board.set_occupancy(food, CellState::Food);
        Ok(food)
    }
}
