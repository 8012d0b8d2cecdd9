// Reusable library API, shared by the CLI and the doc generator
pub mod candidates;
pub mod errors;
pub mod fit;
pub mod grid;
pub mod log;
pub mod placement;
pub mod render;
pub mod word_list;
pub mod writer;

pub use errors::PlacementError;
pub use grid::{Cell, Grid};
pub use placement::{place_word, Direction, Placement, Puzzle};
