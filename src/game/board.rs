/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Move cell by delta, without wrapping
    pub fn moved_by(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

/// Occupancy tag of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Empty,
    Body,
    Head,
    Food,
}

/// Fixed-size wrap-around grid; the single authority on what each cell holds
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<CellState>,
}

impl Board {
    /// Create an all-empty board
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![CellState::Empty; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Wrap a coordinate that stepped at most one unit past either edge.
    ///
    /// Only single-step overshoot is defined, since a tick moves the head by
    /// exactly one step.
    pub fn normalize(coordinate: i32, extent: usize) -> i32 {
        let extent = extent as i32;
        debug_assert!(
            (-1..=extent).contains(&coordinate),
            "coordinate {coordinate} overshoots extent {extent} by more than one step"
        );
        if coordinate < 0 {
            extent - 1
        } else if coordinate >= extent {
            0
        } else {
            coordinate
        }
    }

    /// Wrap both axes of a cell independently
    pub fn normalize_cell(&self, cell: Cell) -> Cell {
        Cell::new(
            Self::normalize(cell.row, self.height),
            Self::normalize(cell.col, self.width),
        )
    }

    pub fn occupancy_at(&self, cell: Cell) -> CellState {
        self.cells[self.index(cell)]
    }

    pub fn set_occupancy(&mut self, cell: Cell, state: CellState) {
        let index = self.index(cell);
        self.cells[index] = state;
    }

    /// All cells currently tagged `Empty`, in row-major order
    pub fn empty_cells(&self) -> Vec<Cell> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, state)| **state == CellState::Empty)
            .map(|(index, _)| self.cell_at(index))
            .collect()
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|cell| **cell == state).count()
    }

    /// Rows of cell tags, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Row-major index of any cell, wrapped onto the torus however far out it lies
    fn index(&self, cell: Cell) -> usize {
        let row = cell.row.rem_euclid(self.height as i32) as usize;
        let col = cell.col.rem_euclid(self.width as i32) as usize;
        row * self.width + col
    }

    fn cell_at(&self, index: usize) -> Cell {
        Cell::new((index / self.width) as i32, (index % self.width) as i32)
    }
}
