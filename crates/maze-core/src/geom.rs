//! Geometry primitive: [`Coord`].
//!
//! Coordinates are `(row, col)` pairs. Rows grow downward, columns grow to
//! the right. Signed components let neighbour arithmetic step off the grid
//! without wrapping; bounds are checked by the grid.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid position as `(row, col)`.
///
/// Ordering is row-major: rows compare first, then columns.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Cardinal step offsets in neighbour enumeration order:
    /// right, left, down, up.
    pub const DIRECTIONS: [Coord; 4] = [
        Coord::new(0, 1),
        Coord::new(0, -1),
        Coord::new(1, 0),
        Coord::new(-1, 0),
    ];

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Component-wise sum, or `None` if either component overflows.
    #[inline]
    pub const fn checked_add(self, rhs: Coord) -> Option<Coord> {
        match (self.row.checked_add(rhs.row), self.col.checked_add(rhs.col)) {
            (Some(row), Some(col)) => Some(Coord::new(row, col)),
            _ => None,
        }
    }

    /// The cardinal neighbours, in [`DIRECTIONS`](Self::DIRECTIONS) order.
    /// Diagonals are never produced, and neither are steps past the `i32`
    /// range, so a coordinate on that edge yields fewer than four.
    #[inline]
    pub fn neighbors_4(self) -> impl Iterator<Item = Coord> {
        Self::DIRECTIONS
            .into_iter()
            .filter_map(move |d| self.checked_add(d))
    }

    /// Manhattan distance between two coordinates, saturating at
    /// `u32::MAX`.
    #[inline]
    pub fn manhattan(self, other: Coord) -> u32 {
        self.row
            .abs_diff(other.row)
            .saturating_add(self.col.abs_diff(other.col))
    }

    /// Whether `other` is exactly one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}
