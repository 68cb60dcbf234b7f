//! Maze generation for maze grids.

pub mod mapgen;

pub use mapgen::{GenError, MazeConfig, MazeGen};
