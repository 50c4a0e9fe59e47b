use super::board::{Cell, CellState};
use super::error::SpawnError;
use super::food::FoodSpawner;
use super::state::GameState;

/// What a single movement step did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// No direction recorded yet; nothing moved
    Idle,
    /// The head moved onto an empty cell and the tail followed
    Moved { head: Cell },
    /// The head ate food; `food` is the replacement, `None` if the board is full
    Ate { head: Cell, food: Option<Cell> },
    /// The candidate cell holds a body segment; nothing was mutated
    SelfCollision { at: Cell },
}

/// Resolves one step of the snake in its current direction.
///
/// The candidate cell is classified against the pre-move board before any
/// mutation, so a collision leaves board and snake untouched.
pub fn resolve(state: &mut GameState, spawner: &mut FoodSpawner) -> Movement {
    let (d_row, d_col) = state.snake.direction.delta();
    if (d_row, d_col) == (0, 0) {
        return Movement::Idle;
    }

    let previous_head = state.snake.head();
    let candidate = state
        .board
        .normalize_cell(previous_head.moved_by(d_row, d_col));

    match state.board.occupancy_at(candidate) {
        // Head only comes back on a one-cell-wide axis, where the step lands on itself.
        CellState::Body | CellState::Head => Movement::SelfCollision { at: candidate },
        CellState::Empty => {
            let vacated = state.snake.advance_with_trim(candidate);
            move_head(state, previous_head, candidate);
            // A one-segment snake vacates its old head; stacked seed segments
            // keep their cell marked until the last one leaves.
            if let Some(vacated) = vacated.filter(|cell| !state.snake.contains(*cell)) {
                state.board.set_occupancy(vacated, CellState::Empty);
            }
            Movement::Moved { head: candidate }
        }
        CellState::Food => {
            state.score += 1;
            state.snake.advance_with_growth(candidate);
            move_head(state, previous_head, candidate);

            let food = match spawner.spawn(&mut state.board, &state.snake) {
                Ok(food) => Some(food),
                Err(SpawnError::BoardFull) => None,
            };
            state.food = food;
            Movement::Ate {
                head: candidate,
                food,
            }
        }
    }
}

fn move_head(state: &mut GameState, previous_head: Cell, new_head: Cell) {
    state.board.set_occupancy(previous_head, CellState::Body);
    state.board.set_occupancy(new_head, CellState::Head);
}
