use crate::geom::Coord;

/// Errors raised while building, parsing or editing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A grid must have at least one row and one column.
    #[error("grid dimensions must be positive (got {rows}x{cols})")]
    EmptyDimensions { rows: i32, cols: i32 },

    /// The coordinate lies outside the grid.
    #[error("coordinate {0} is out of bounds")]
    OutOfBounds(Coord),

    /// An endpoint cannot be placed onto the other endpoint.
    #[error("cell {0} is already occupied by an endpoint")]
    Occupied(Coord),

    /// Text rows of different widths.
    #[error("row {row} has width {found}, expected {expected}")]
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A character outside the grid alphabet.
    #[error("invalid glyph \u{201c}{glyph}\u{201d} at {at}")]
    InvalidGlyph { glyph: char, at: Coord },

    /// More than one start cell in the text.
    #[error("second start cell at {0}")]
    DuplicateStart(Coord),

    /// More than one end cell in the text.
    #[error("second end cell at {0}")]
    DuplicateEnd(Coord),
}
