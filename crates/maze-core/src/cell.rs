//! The [`CellState`] type — what occupies a single grid position.

/// State of one grid cell.
///
/// Search progress ("visited", "on route") is not a cell state: searches
/// report it through their results and never touch the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Open,
    Wall,
    Start,
    End,
}

impl CellState {
    /// Whether a search may step into a cell in this state.
    #[inline]
    pub const fn is_traversable(self) -> bool {
        !matches!(self, Self::Wall)
    }

    /// Text glyph used by the grid's text format.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Self::Open => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::End => 'E',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    #[inline]
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Open),
            '#' => Some(Self::Wall),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            _ => None,
        }
    }
}
