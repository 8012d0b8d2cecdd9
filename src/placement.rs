//! The placement engine: finds a starting cell for a word and commits it.
//!
//! [`place_word`] scans a caller-supplied candidate order (normally shuffled with
//! [`crate::candidates::candidate_order`]) and takes the first unoccupied cell the
//! word fits from. An occupied cell is never offered as a starting point, even if
//! its letter matches the word's first letter; only later letters may share.
//!
//! [`Puzzle`] bundles a grid with its candidate order and keeps a record of every
//! word placed, for callers generating a whole puzzle.
//!
//! # Examples
//!
//! ```
//! use wordsearch::candidates::SeededRandom;
//! use wordsearch::placement::{Direction, Puzzle};
//!
//! let mut puzzle = Puzzle::new(8, &mut SeededRandom::new(42))?;
//! let placement = puzzle.place("hello", Direction::Down)?.clone();
//!
//! let letters: String = placement
//!     .cells()
//!     .into_iter()
//!     .filter_map(|(x, y)| puzzle.grid().letter_at(x, y))
//!     .collect();
//! assert_eq!(letters, "hello");
//! # Ok::<(), wordsearch::errors::PlacementError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use log::{debug, info, warn};

use crate::candidates::{candidate_order, RandomIndex};
use crate::errors::PlacementError;
use crate::fit::{check_down, check_up};
use crate::grid::Grid;
use crate::writer::{place_word_down, place_word_up};

/// The axis and sense a word is read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Decreasing y.
    Up,
    /// Increasing y.
    Down,
    Left,
    Right,
}

impl Direction {
    /// The directions [`place_word`] can actually place in.
    pub const VERTICAL: [Direction; 2] = [Direction::Up, Direction::Down];

    /// Pick up or down from `rng`.
    pub fn random_vertical<R: RandomIndex + ?Sized>(rng: &mut R) -> Self {
        Self::VERTICAL[rng.index_up_to(Self::VERTICAL.len() - 1)]
    }

    #[must_use]
    pub fn is_supported(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

impl FromStr for Direction {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(PlacementError::InvalidDirection { input: s.to_string() }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{s}")
    }
}

/// Place `word` into `grid` reading in `direction`, trying starting cells in
/// `candidates` order.
///
/// Returns the reference point: the cell holding the word's first letter. The
/// rest of the word is at decreasing y for [`Direction::Up`] and increasing y for
/// [`Direction::Down`].
///
/// # Errors
///
/// - [`PlacementError::UnsupportedDirection`] for left and right, before any scanning.
/// - [`PlacementError::EmptyWord`] if `word` is empty.
/// - [`PlacementError::GridExhausted`] if no unoccupied candidate fits the word.
///   The grid is left untouched in that case.
pub fn place_word(
    grid: &mut Grid,
    candidates: &[(usize, usize)],
    word: &str,
    direction: Direction,
) -> Result<(usize, usize), PlacementError> {
    if !direction.is_supported() {
        return Err(PlacementError::UnsupportedDirection { direction });
    }
    if word.is_empty() {
        return Err(PlacementError::EmptyWord);
    }

    for &(x, y) in candidates {
        if grid.letter_at(x, y).is_some() {
            continue;
        }

        let fits = match direction {
            Direction::Up => check_up(grid, word, x, y),
            Direction::Down => check_down(grid, word, x, y),
            Direction::Left | Direction::Right => false,
        };
        if !fits {
            continue;
        }

        match direction {
            Direction::Up => place_word_up(grid, word, x, y)?,
            _ => place_word_down(grid, word, x, y)?,
        }
        debug!("placed \"{word}\" going {direction} at ({x}, {y})");
        return Ok((x, y));
    }

    Err(PlacementError::GridExhausted { word: word.to_string(), direction })
}

/// Where one word landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub word: String,
    pub direction: Direction,
    /// Column of every letter.
    pub x: usize,
    /// Row of the first letter.
    pub y: usize,
}

impl Placement {
    /// Coordinates of each letter, in word order.
    #[must_use]
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let len = self.word.chars().count();
        match self.direction {
            Direction::Up => (0..len).map(|i| (self.x, self.y - i)).collect(),
            _ => (0..len).map(|i| (self.x, self.y + i)).collect(),
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({}) at ({}, {})", self.word, self.direction, self.x, self.y)
    }
}

/// A grid being filled word by word, with its candidate order.
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    candidates: Vec<(usize, usize)>,
    placements: Vec<Placement>,
}

impl Puzzle {
    /// Empty `size` x `size` puzzle with a candidate order shuffled by `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidGridSize`] when `size` is zero.
    pub fn new<R: RandomIndex + ?Sized>(size: usize, rng: &mut R) -> Result<Self, PlacementError> {
        let grid = Grid::new(size)?;
        let candidates = candidate_order(&grid, rng);
        Ok(Puzzle { grid, candidates, placements: Vec::new() })
    }

    /// Place one word; see [`place_word`].
    ///
    /// # Errors
    ///
    /// Propagates any [`place_word`] error. Earlier placements are kept.
    pub fn place(&mut self, word: &str, direction: Direction) -> Result<&Placement, PlacementError> {
        let (x, y) = match place_word(&mut self.grid, &self.candidates, word, direction) {
            Ok(point) => point,
            Err(e) => {
                if let PlacementError::GridExhausted { .. } = e {
                    warn!("no room for \"{word}\" going {direction} ({} words placed so far)", self.placements.len());
                }
                return Err(e);
            }
        };

        self.placements.push(Placement { word: word.to_string(), direction, x, y });
        info!(
            "{} words placed, {}/{} cells filled",
            self.placements.len(),
            self.grid.occupied_count(),
            self.grid.cells().len()
        );
        Ok(&self.placements[self.placements.len() - 1])
    }

    /// Draw a fresh candidate order for subsequent placements.
    pub fn reshuffle<R: RandomIndex + ?Sized>(&mut self, rng: &mut R) {
        self.candidates = candidate_order(&self.grid, rng);
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn candidates(&self) -> &[(usize, usize)] {
        &self.candidates
    }

    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Give up the puzzle and keep the grid.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
