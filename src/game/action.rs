/// Direction the snake can move
///
/// `None` is the direction of a freshly seeded snake: ticks are no-ops until
/// the first real direction is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    None,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the (d_row, d_col) unit step for this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::None => (0, 0),
        }
    }

    /// Direction to keep after a turn request; reversals leave `self` in place
    pub fn turned_to(self, requested: Direction) -> Direction {
        if requested == Direction::None || self.is_opposite(requested) {
            self
        } else {
            requested
        }
    }
}

/// Answer to the "play again?" prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayChoice {
    Yes,
    No,
}
