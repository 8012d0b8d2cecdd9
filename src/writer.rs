//! Writes a word's letters into the grid.
//!
//! Callers must have confirmed the placement with the matching fit check using the
//! same arguments. Nothing here re-checks occupancy; a coordinate outside the grid
//! comes back as [`PlacementError::CoordinateNotFound`].

use crate::errors::PlacementError;
use crate::fit::last_row_down;
use crate::grid::Grid;

/// Write `word` starting at `(x, y)` and moving toward row 0.
///
/// # Errors
///
/// Returns [`PlacementError::CoordinateNotFound`] if the word runs out of the grid.
/// Letters before the failing row have already been written.
pub fn place_word_up(grid: &mut Grid, word: &str, x: usize, y: usize) -> Result<(), PlacementError> {
    let letters: Vec<char> = word.chars().collect();
    write_up(grid, &letters, x, y)
}

/// Write `word` starting at `(x, y)` and moving toward the bottom row.
///
/// # Errors
///
/// Returns [`PlacementError::CoordinateNotFound`] if the word runs out of the grid.
pub fn place_word_down(grid: &mut Grid, word: &str, x: usize, y: usize) -> Result<(), PlacementError> {
    let reversed: Vec<char> = word.chars().rev().collect();
    if reversed.is_empty() {
        return Ok(());
    }
    let starting_y = last_row_down(y, reversed.len()).ok_or(PlacementError::CoordinateNotFound {
        x,
        y: usize::MAX,
        size: grid.size(),
    })?;
    write_up(grid, &reversed, x, starting_y)
}

fn write_up(grid: &mut Grid, letters: &[char], x: usize, y: usize) -> Result<(), PlacementError> {
    let size = grid.size();
    for (i, &letter) in letters.iter().enumerate() {
        // rows above 0 are reported at the first row past the edge
        let curr_y = y.checked_sub(i).ok_or(PlacementError::CoordinateNotFound { x, y: size, size })?;
        grid.find_cell_mut(x, curr_y)?.set_occupant(letter);
    }
    Ok(())
}
