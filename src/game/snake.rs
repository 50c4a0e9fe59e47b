use std::collections::VecDeque;

use super::action::Direction;
use super::board::Cell;

/// The snake in the game
///
/// Segments run from tail (front) to head (back); the head is simply the
/// last element.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    segments: VecDeque<Cell>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Seed a snake with `length` segments stacked on `start`, not yet moving
    pub fn new(start: Cell, length: usize) -> Self {
        Self {
            segments: std::iter::repeat_n(start, length.max(1)).collect(),
            direction: Direction::None,
        }
    }

    /// Build a snake from explicit segments, tail first; `None` when there are none
    pub fn from_segments(
        segments: impl IntoIterator<Item = Cell>,
        direction: Direction,
    ) -> Option<Self> {
        let segments: VecDeque<Cell> = segments.into_iter().collect();
        if segments.is_empty() {
            return None;
        }
        Some(Self {
            segments,
            direction,
        })
    }

    pub fn head(&self) -> Cell {
        // `new` and `from_segments` never produce an empty body and no
        // operation removes the last segment.
        self.segments[self.segments.len() - 1]
    }

    pub fn tail(&self) -> Cell {
        self.segments[0]
    }

    /// Append a new head and keep every existing segment
    pub fn advance_with_growth(&mut self, new_head: Cell) {
        self.segments.push_back(new_head);
    }

    /// Append a new head and drop the oldest segment, returning it
    pub fn advance_with_trim(&mut self, new_head: Cell) -> Option<Cell> {
        self.segments.push_back(new_head);
        self.segments.pop_front()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.segments.contains(&cell)
    }

    /// Segments from tail to head
    pub fn segments(&self) -> impl Iterator<Item = Cell> + '_ {
        self.segments.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
