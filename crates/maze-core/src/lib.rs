//! **maze-core** — grid model for maze search.
//!
//! This crate provides the types shared by the rest of the workspace:
//! [`Coord`] positions, [`CellState`] values, and the editable [`Grid`]
//! that searches read from.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::CellState;
pub use error::GridError;
pub use geom::Coord;
pub use grid::{DEFAULT_COLS, DEFAULT_ROWS, Grid};
