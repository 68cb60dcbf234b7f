//! Random maze generation.
//!
//! Mazes are scattered walls: start and end are dropped on two distinct
//! random cells, then a fixed number of random cells are turned into walls.
//! Nothing guarantees the end stays reachable.

use log::debug;
use maze_core::{CellState, Coord, DEFAULT_COLS, DEFAULT_ROWS, Grid, GridError};
use rand::Rng;

/// Shape of a generated maze.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    /// Number of rows.
    pub rows: i32,
    /// Number of columns.
    pub cols: i32,
    /// Wall placement attempts per cell, in `[0, 1]`. Attempts that land
    /// on an endpoint or an existing wall are wasted, so the final wall
    /// share is lower.
    pub wall_density: f64,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            wall_density: 0.4,
        }
    }
}

impl MazeConfig {
    /// Check the configuration without generating anything.
    pub fn validate(&self) -> Result<(), GenError> {
        if self.rows <= 0 || self.cols <= 0 {
            return Err(GridError::EmptyDimensions {
                rows: self.rows,
                cols: self.cols,
            }
            .into());
        }
        if (self.rows as i64) * (self.cols as i64) < 2 {
            return Err(GenError::TooSmall {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !(0.0..=1.0).contains(&self.wall_density) {
            return Err(GenError::InvalidDensity(self.wall_density));
        }
        Ok(())
    }

    /// Number of wall placement attempts.
    pub fn wall_attempts(&self) -> usize {
        let cells = (self.rows.max(0) as f64) * (self.cols.max(0) as f64);
        (cells * self.wall_density).ceil() as usize
    }
}

/// Errors from maze generation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenError {
    /// A maze needs two distinct cells for its endpoints.
    #[error("a {rows}x{cols} grid cannot hold distinct start and end cells")]
    TooSmall { rows: i32, cols: i32 },

    /// Wall density outside `[0, 1]` (or NaN).
    #[error("wall density {0} is outside [0, 1]")]
    InvalidDensity(f64),

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Maze generator driven by a random number generator.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator using `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// A uniformly random cell of `grid`.
    pub fn random_cell(&mut self, grid: &Grid) -> Coord {
        Coord::new(
            self.rng.random_range(0..grid.rows()),
            self.rng.random_range(0..grid.cols()),
        )
    }

    /// Generate a new maze.
    ///
    /// Start goes on a random cell, end on a random cell redrawn until it
    /// differs from start. Then [`wall_attempts`](MazeConfig::wall_attempts)
    /// random cells are picked, and each one that is still open becomes a
    /// wall.
    pub fn random_maze(&mut self, config: &MazeConfig) -> Result<Grid, GenError> {
        config.validate()?;
        let mut grid = Grid::new(config.rows, config.cols)?;

        let start = self.random_cell(&grid);
        let mut end = self.random_cell(&grid);
        while end == start {
            end = self.random_cell(&grid);
        }
        grid.place_start(start)?;
        grid.place_end(end)?;

        let attempts = config.wall_attempts();
        let mut walls = 0usize;
        for _ in 0..attempts {
            let c = self.random_cell(&grid);
            if grid.at(c) == Some(CellState::Open) {
                grid.set_wall(c)?;
                walls += 1;
            }
        }

        debug!(
            "generated {}x{} maze: start {start}, end {end}, {walls} walls from {attempts} attempts",
            config.rows, config.cols
        );
        Ok(grid)
    }
}
