//! `grid` — the square letter grid words are placed into.
//!
//! A [`Grid`] owns exactly `size * size` [`Cell`]s, stored in row-major order
//! (x increases fastest, y increments when x wraps). Coordinates are fixed at
//! construction; only a cell's occupant ever changes.

use crate::errors::PlacementError;

/// One addressable grid position holding at most one letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    x: usize,
    y: usize,
    occupant: Option<char>,
}

impl Cell {
    fn empty(x: usize, y: usize) -> Self {
        Cell { x, y, occupant: None }
    }

    #[must_use]
    pub fn x(&self) -> usize {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> usize {
        self.y
    }

    #[must_use]
    pub fn coords(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// The letter currently in this cell, if any.
    #[must_use]
    pub fn occupant(&self) -> Option<char> {
        self.occupant
    }

    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn set_occupant(&mut self, letter: char) {
        self.occupant = Some(letter);
    }
}

/// A fixed-size square grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build an empty `size` x `size` grid.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidGridSize`] when `size` is zero.
    pub fn new(size: usize) -> Result<Self, PlacementError> {
        if size == 0 {
            return Err(PlacementError::InvalidGridSize);
        }

        let cells = (0..size)
            .flat_map(|y| (0..size).map(move |x| Cell::empty(x, y)))
            .collect();

        Ok(Grid { size, cells })
    }

    /// Side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Bounds query: the cell at `(x, y)`, or `None` outside the grid.
    #[must_use]
    pub fn try_cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// The cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::CoordinateNotFound`] when `(x, y)` lies outside the grid.
    pub fn find_cell(&self, x: usize, y: usize) -> Result<&Cell, PlacementError> {
        self.try_cell(x, y).ok_or(PlacementError::CoordinateNotFound { x, y, size: self.size })
    }

    /// Mutable access to the cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::CoordinateNotFound`] when `(x, y)` lies outside the grid.
    pub fn find_cell_mut(&mut self, x: usize, y: usize) -> Result<&mut Cell, PlacementError> {
        let size = self.size;
        match self.index_of(x, y) {
            Some(i) => Ok(&mut self.cells[i]),
            None => Err(PlacementError::CoordinateNotFound { x, y, size }),
        }
    }

    /// The letter at `(x, y)`, or `None` if the cell is empty or out of bounds.
    #[must_use]
    pub fn letter_at(&self, x: usize, y: usize) -> Option<char> {
        self.try_cell(x, y).and_then(Cell::occupant)
    }

    /// Number of cells currently holding a letter.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.size && y < self.size).then(|| y * self.size + x)
    }
}
