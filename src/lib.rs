//! Fill crossword grids from a word list.
//!
//! A grid structure is parsed into a [`Puzzle`]: the fixed set of slots
//! plus where they cross. A [`Solver`] assigns one word per slot by
//! enforcing node and arc consistency over per-slot candidate domains and
//! then backtracking with MRV/degree variable selection and
//! least-constraining-value ordering.

pub mod consistency;
pub mod domains;
pub mod grid;
pub mod puzzle;
pub mod render;
pub mod search;
pub mod words;

pub use grid::{Grid, StructureError};
pub use puzzle::{Direction, Puzzle, Slot};
pub use search::{Assignment, SolveError, Solver};
