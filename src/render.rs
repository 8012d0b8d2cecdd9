//! Flat text rendering of a grid, one character per cell.

use std::fmt;

use crate::grid::Grid;

/// Shown for cells no word has claimed.
pub const PLACEHOLDER: char = '+';

/// Row-major text of `grid`, with a newline after every row.
///
/// ```
/// use wordsearch::grid::Grid;
/// use wordsearch::render::grid_to_string;
///
/// let grid = Grid::new(2)?;
/// assert_eq!(grid_to_string(&grid), "++\n++\n");
/// # Ok::<(), wordsearch::errors::PlacementError>(())
/// ```
#[must_use]
pub fn grid_to_string(grid: &Grid) -> String {
    let size = grid.size();
    let mut out = String::with_capacity(size * (size + 1));
    for row in grid.cells().chunks(size) {
        out.extend(row.iter().map(|c| c.occupant().unwrap_or(PLACEHOLDER)));
        out.push('\n');
    }
    out
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&grid_to_string(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::{place_word_down, place_word_up};

    #[test]
    fn test_empty_grid_renders_placeholders() {
        let grid = Grid::new(3).unwrap();
        assert_eq!(grid_to_string(&grid), "+++\n+++\n+++\n");
    }

    #[test]
    fn test_letters_render_in_place() {
        let mut grid = Grid::new(4).unwrap();
        place_word_up(&mut grid, "cat", 0, 2).unwrap();
        place_word_down(&mut grid, "Dog", 3, 1).unwrap();

        assert_eq!(grid_to_string(&grid), "t+++\na++D\nc++o\n+++g\n");
    }

    #[test]
    fn test_display_matches_grid_to_string() {
        let mut grid = Grid::new(2).unwrap();
        grid.find_cell_mut(1, 0).unwrap().set_occupant('z');
        assert_eq!(grid.to_string(), "+z\n++\n");
    }

    #[test]
    fn test_one_char_per_cell() {
        let grid = Grid::new(7).unwrap();
        let text = grid_to_string(&grid);
        assert_eq!(text.lines().count(), 7);
        assert!(text.lines().all(|line| line.chars().count() == 7));
    }
}
