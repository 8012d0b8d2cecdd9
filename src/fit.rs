//! Fit checking: can a word be written at a given cell in a given direction?
//!
//! Only the upward check walks the grid. The downward check writes nothing of its
//! own: reading a word downward from `(x, y)` covers the same cells as reading the
//! reversed word upward from the word's last row, so it reverses and delegates.

use crate::grid::Grid;

/// Letters already in the grid may be reused by a later word when they match.
pub const SHARING_ENABLED: bool = true;

/// Does `word` fit starting at `(x, y)` and extending toward row 0?
///
/// An occupied cell is compatible only if it already holds the letter the word
/// needs there. Running off the top of the grid, or addressing a column outside
/// it, means the word does not fit. An empty word never fits.
#[must_use]
pub fn check_up(grid: &Grid, word: &str, x: usize, y: usize) -> bool {
    let letters: Vec<char> = word.chars().collect();
    fits_up(grid, &letters, x, y)
}

/// Does `word` fit starting at `(x, y)` and extending toward the bottom row?
#[must_use]
pub fn check_down(grid: &Grid, word: &str, x: usize, y: usize) -> bool {
    let reversed: Vec<char> = word.chars().rev().collect();
    match last_row_down(y, reversed.len()) {
        Some(starting_y) => fits_up(grid, &reversed, x, starting_y),
        None => false,
    }
}

/// Row holding the last letter of a `len`-letter word read downward from row `y`.
pub(crate) fn last_row_down(y: usize, len: usize) -> Option<usize> {
    len.checked_sub(1).and_then(|extra| y.checked_add(extra))
}

pub(crate) fn fits_up(grid: &Grid, letters: &[char], x: usize, y: usize) -> bool {
    if letters.is_empty() {
        return false;
    }

    for (count, &wanted) in letters.iter().enumerate() {
        let Some(curr_y) = y.checked_sub(count) else {
            return false;
        };
        let Some(cell) = grid.try_cell(x, curr_y) else {
            return false;
        };
        if let Some(letter) = cell.occupant() {
            if letter != wanted || !SHARING_ENABLED {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(size: usize, letters: &[(usize, usize, char)]) -> Grid {
        let mut grid = Grid::new(size).unwrap();
        for &(x, y, ch) in letters {
            grid.find_cell_mut(x, y).unwrap().set_occupant(ch);
        }
        grid
    }

    #[test]
    fn test_up_without_enough_rows() {
        let grid = Grid::new(8).unwrap();
        // rows 0, 1, 2 only
        assert!(!check_up(&grid, "hello", 0, 2));
    }

    #[test]
    fn test_up_with_enough_rows() {
        let grid = Grid::new(8).unwrap();
        assert!(check_up(&grid, "hello", 0, 5));
        // exactly five rows: 4, 3, 2, 1, 0
        assert!(check_up(&grid, "hello", 0, 4));
    }

    #[test]
    fn test_up_conflicting_letter() {
        let grid = grid_with(8, &[(0, 3, 'p')]);
        assert!(!check_up(&grid, "hello", 0, 5));
    }

    #[test]
    fn test_up_shares_matching_letter() {
        let grid = grid_with(8, &[(0, 5, 'h')]);
        assert!(check_up(&grid, "hello", 0, 5));

        // interior letter: (0, 3) gets word[2] = 'l'
        let grid = grid_with(8, &[(0, 3, 'l')]);
        assert!(check_up(&grid, "hello", 0, 5));
    }

    #[test]
    fn test_up_ignores_letters_outside_its_column() {
        let grid = grid_with(8, &[(1, 3, 'z'), (0, 0, 'q')]);
        assert!(check_up(&grid, "hello", 0, 5));
    }

    #[test]
    fn test_up_out_of_bounds_start() {
        let grid = Grid::new(8).unwrap();
        assert!(!check_up(&grid, "hi", 8, 5));
        assert!(!check_up(&grid, "hi", 0, 8));
        assert!(!check_up(&grid, "hi", 0, 20));
    }

    #[test]
    fn test_empty_word_never_fits() {
        let grid = Grid::new(8).unwrap();
        assert!(!check_up(&grid, "", 0, 5));
        assert!(!check_down(&grid, "", 0, 5));
    }

    #[test]
    fn test_down_with_room_below() {
        let grid = Grid::new(8).unwrap();
        assert!(check_down(&grid, "hello", 0, 0));
        // rows 3..=7
        assert!(check_down(&grid, "hello", 0, 3));
    }

    #[test]
    fn test_down_at_bottom_row() {
        let grid = Grid::new(8).unwrap();
        assert!(!check_down(&grid, "hello", 0, 7));
        assert!(!check_down(&grid, "hello", 0, 4));
    }

    #[test]
    fn test_down_sharing_and_conflict() {
        // reading down from (2, 1): h e l l o on rows 1..=5
        let grid = grid_with(8, &[(2, 3, 'l')]);
        assert!(check_down(&grid, "hello", 2, 1));

        let grid = grid_with(8, &[(2, 3, 'x')]);
        assert!(!check_down(&grid, "hello", 2, 1));
    }

    #[test]
    fn test_down_mirrors_up() {
        let grid = grid_with(6, &[(1, 2, 'a'), (3, 4, 'b')]);
        let word = "cab";
        for x in 0..6 {
            for y in 0..6 {
                let reversed: String = word.chars().rev().collect();
                let expected = last_row_down(y, 3).is_some_and(|end| check_up(&grid, &reversed, x, end));
                assert_eq!(check_down(&grid, word, x, y), expected, "mismatch at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_multibyte_letters() {
        let grid = grid_with(4, &[(0, 1, 'é')]);
        assert!(check_up(&grid, "ééé", 0, 2));
        assert!(!check_up(&grid, "eee", 0, 2));
    }
}
