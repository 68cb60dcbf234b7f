//! The [`Grid`] type — a fixed-size 2D array of [`CellState`]s.
//!
//! A grid owns its cells and tracks where its single start and end cells
//! are. Searches borrow it immutably; only the editor operations
//! ([`toggle`](Grid::toggle), [`paint`](Grid::paint), [`place_start`](Grid::place_start),
//! ...) mutate it, and they keep the "at most one start, at most one end"
//! invariant.

use std::fmt;
use std::str::FromStr;

use crate::cell::CellState;
use crate::error::GridError;
use crate::geom::Coord;

/// Row count of the original editor grid.
pub const DEFAULT_ROWS: i32 = 25;
/// Column count of the original editor grid.
pub const DEFAULT_COLS: i32 = 50;

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular, fully populated grid of cell states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellState>,
    rows: i32,
    cols: i32,
    start: Option<Coord>,
    end: Option<Coord>,
}

impl Grid {
    /// Create a new all-open grid of `rows × cols` cells.
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::EmptyDimensions { rows, cols });
        }
        Ok(Self {
            cells: vec![CellState::Open; (rows as usize) * (cols as usize)],
            rows,
            cols,
            start: None,
            end: None,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` lies within `[0, rows) × [0, cols)`.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Row-major flat index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some((c.row as usize) * (self.cols as usize) + c.col as usize)
    }

    /// Convert a flat index back to a coordinate, or `None` if `idx` is
    /// past the last cell.
    #[inline]
    pub fn coord(&self, idx: usize) -> Option<Coord> {
        (idx < self.cells.len()).then(|| self.coord_unchecked(idx))
    }

    #[inline]
    fn coord_unchecked(&self, idx: usize) -> Coord {
        let cols = self.cols as usize;
        Coord::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Read the cell at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<CellState> {
        self.index(c).map(|i| self.cells[i])
    }

    /// True iff `c` is inside the grid and not a wall.
    #[inline]
    pub fn is_traversable(&self, c: Coord) -> bool {
        self.at(c).is_some_and(CellState::is_traversable)
    }

    /// Traversable cardinal neighbours of `c`, in
    /// [`Coord::DIRECTIONS`] order.
    pub fn neighbors(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        c.neighbors_4().filter(move |&n| self.is_traversable(n))
    }

    /// The start cell, if one has been placed.
    #[inline]
    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    /// The end cell, if one has been placed.
    #[inline]
    pub fn end(&self) -> Option<Coord> {
        self.end
    }

    /// Count how many cells are in the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Iterate over `(Coord, CellState)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &s)| (self.coord_unchecked(i), s))
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    fn checked_index(&self, c: Coord) -> Result<usize, GridError> {
        self.index(c).ok_or(GridError::OutOfBounds(c))
    }

    /// Overwrite a cell, forgetting any endpoint that used to live there.
    fn put(&mut self, idx: usize, state: CellState) {
        let c = self.coord_unchecked(idx);
        if self.start == Some(c) {
            self.start = None;
        }
        if self.end == Some(c) {
            self.end = None;
        }
        self.cells[idx] = state;
    }

    /// Turn `c` into a wall. Start and end cells are left untouched.
    pub fn set_wall(&mut self, c: Coord) -> Result<(), GridError> {
        let i = self.checked_index(c)?;
        if self.cells[i] == CellState::Open {
            self.cells[i] = CellState::Wall;
        }
        Ok(())
    }

    /// Turn `c` back into an open cell, clearing an endpoint if one was there.
    pub fn set_open(&mut self, c: Coord) -> Result<(), GridError> {
        let i = self.checked_index(c)?;
        self.put(i, CellState::Open);
        Ok(())
    }

    /// Move the start cell to `c`. The previous start becomes open.
    pub fn place_start(&mut self, c: Coord) -> Result<(), GridError> {
        let i = self.checked_index(c)?;
        if self.end == Some(c) {
            return Err(GridError::Occupied(c));
        }
        if let Some(old) = self.start.take() {
            if let Some(oi) = self.index(old) {
                self.cells[oi] = CellState::Open;
            }
        }
        self.put(i, CellState::Start);
        self.start = Some(c);
        Ok(())
    }

    /// Move the end cell to `c`. The previous end becomes open.
    pub fn place_end(&mut self, c: Coord) -> Result<(), GridError> {
        let i = self.checked_index(c)?;
        if self.start == Some(c) {
            return Err(GridError::Occupied(c));
        }
        if let Some(old) = self.end.take() {
            if let Some(oi) = self.index(old) {
                self.cells[oi] = CellState::Open;
            }
        }
        self.put(i, CellState::End);
        self.end = Some(c);
        Ok(())
    }

    /// Apply a single editor click at `c`.
    ///
    /// An open cell becomes the start if there is none, else the end if
    /// there is none, else a wall. A wall becomes open. Endpoints are
    /// unaffected. Returns the cell's new state.
    pub fn toggle(&mut self, c: Coord) -> Result<CellState, GridError> {
        let i = self.checked_index(c)?;
        let state = self.cells[i];
        match state {
            CellState::Open if self.start.is_none() => self.place_start(c)?,
            CellState::Open if self.end.is_none() => self.place_end(c)?,
            CellState::Open => self.cells[i] = CellState::Wall,
            CellState::Wall => self.cells[i] = CellState::Open,
            CellState::Start | CellState::End => {}
        }
        Ok(self.cells[i])
    }

    /// Apply an editor drag over `c`: once both endpoints exist, open
    /// cells become walls. Otherwise nothing happens.
    pub fn paint(&mut self, c: Coord) -> Result<(), GridError> {
        let i = self.checked_index(c)?;
        if self.start.is_some() && self.end.is_some() && self.cells[i] == CellState::Open {
            self.cells[i] = CellState::Wall;
        }
        Ok(())
    }

    /// Reset every cell to open and forget both endpoints.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Open);
        self.start = None;
        self.end = None;
    }
}

impl Default for Grid {
    /// An empty grid with the original editor's dimensions.
    fn default() -> Self {
        let len = (DEFAULT_ROWS as usize) * (DEFAULT_COLS as usize);
        Self {
            cells: vec![CellState::Open; len],
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            start: None,
            end: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Text format
// ---------------------------------------------------------------------------

impl FromStr for Grid {
    type Err = GridError;

    /// Parse one row per line using the glyphs of [`CellState::glyph`].
    ///
    /// Whitespace around the whole text is trimmed, not within lines.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GridError::EmptyDimensions { rows: 0, cols: 0 });
        }

        let mut cells = Vec::with_capacity(s.len());
        let mut width: Option<usize> = None;
        let mut start = None;
        let mut end = None;
        let mut rows = 0usize;

        for (r, line) in s.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let mut found = 0usize;
            for (c, ch) in line.chars().enumerate() {
                let at = Coord::new(r as i32, c as i32);
                let state = CellState::from_glyph(ch)
                    .ok_or(GridError::InvalidGlyph { glyph: ch, at })?;
                match state {
                    CellState::Start if start.is_some() => {
                        return Err(GridError::DuplicateStart(at));
                    }
                    CellState::End if end.is_some() => return Err(GridError::DuplicateEnd(at)),
                    CellState::Start => start = Some(at),
                    CellState::End => end = Some(at),
                    _ => {}
                }
                cells.push(state);
                found += 1;
            }
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::InconsistentWidth {
                        row: r,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let cols = width.unwrap_or(0);
        if cols == 0 {
            return Err(GridError::EmptyDimensions {
                rows: rows as i32,
                cols: 0,
            });
        }
        Ok(Self {
            cells,
            rows: rows as i32,
            cols: cols as i32,
            start,
            end,
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.cols as usize).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for s in row {
                write!(f, "{}", s.glyph())?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
S..#
.#.#
...E";

    #[test]
    fn new_rejects_empty_dimensions() {
        assert!(matches!(
            Grid::new(0, 3),
            Err(GridError::EmptyDimensions { rows: 0, cols: 3 })
        ));
        assert!(Grid::new(3, -1).is_err());
        let g = Grid::new(2, 3).unwrap();
        assert_eq!((g.rows(), g.cols(), g.len()), (2, 3, 6));
        assert_eq!(g.count(CellState::Open), 6);
    }

    #[test]
    fn default_matches_editor_size() {
        let g = Grid::default();
        assert_eq!((g.rows(), g.cols()), (DEFAULT_ROWS, DEFAULT_COLS));
        assert_eq!(g.start(), None);
    }

    #[test]
    fn traversable_checks_bounds_and_walls() {
        let g: Grid = ROOM.parse().unwrap();
        assert!(g.is_traversable(Coord::new(0, 0)));
        assert!(g.is_traversable(Coord::new(2, 3)));
        assert!(!g.is_traversable(Coord::new(1, 1)));
        assert!(!g.is_traversable(Coord::new(-1, 0)));
        assert!(!g.is_traversable(Coord::new(0, 4)));
        assert!(!g.is_traversable(Coord::new(3, 0)));
    }

    #[test]
    fn neighbors_are_filtered_and_ordered() {
        let g: Grid = ROOM.parse().unwrap();
        let n: Vec<_> = g.neighbors(Coord::new(0, 0)).collect();
        assert_eq!(n, vec![Coord::new(0, 1), Coord::new(1, 0)]);
        let n: Vec<_> = g.neighbors(Coord::new(1, 2)).collect();
        assert_eq!(n, vec![Coord::new(2, 2), Coord::new(0, 2)]);
        let far = Coord::new(i32::MAX, i32::MIN);
        assert!(!g.is_traversable(far));
        assert_eq!(g.neighbors(far).count(), 0);
    }

    #[test]
    fn index_round_trips() {
        let g = Grid::new(3, 4).unwrap();
        for (i, (c, _)) in g.iter().enumerate() {
            assert_eq!(g.index(c), Some(i));
            assert_eq!(g.coord(i), Some(c));
        }
        assert_eq!(g.index(Coord::new(3, 0)), None);
        assert_eq!(g.coord(g.len()), None);
        assert_eq!(g.coord(usize::MAX), None);
    }

    #[test]
    fn parse_and_display() {
        let g: Grid = ROOM.parse().unwrap();
        assert_eq!((g.rows(), g.cols()), (3, 4));
        assert_eq!(g.start(), Some(Coord::new(0, 0)));
        assert_eq!(g.end(), Some(Coord::new(2, 3)));
        assert_eq!(g.count(CellState::Wall), 3);
        assert_eq!(g.to_string(), ROOM);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "".parse::<Grid>(),
            Err(GridError::EmptyDimensions { .. })
        ));
        assert_eq!(
            "...\n..".parse::<Grid>(),
            Err(GridError::InconsistentWidth {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            "..x".parse::<Grid>(),
            Err(GridError::InvalidGlyph {
                glyph: 'x',
                at: Coord::new(0, 2)
            })
        );
        assert_eq!(
            "S.\n.S".parse::<Grid>(),
            Err(GridError::DuplicateStart(Coord::new(1, 1)))
        );
        assert_eq!(
            "E.E".parse::<Grid>(),
            Err(GridError::DuplicateEnd(Coord::new(0, 2)))
        );
    }

    #[test]
    fn toggle_follows_click_rule() {
        let mut g = Grid::new(2, 2).unwrap();
        assert_eq!(g.toggle(Coord::new(0, 0)), Ok(CellState::Start));
        assert_eq!(g.toggle(Coord::new(1, 1)), Ok(CellState::End));
        assert_eq!(g.toggle(Coord::new(0, 1)), Ok(CellState::Wall));
        assert_eq!(g.toggle(Coord::new(0, 1)), Ok(CellState::Open));
        // Endpoints are not affected by clicks.
        assert_eq!(g.toggle(Coord::new(0, 0)), Ok(CellState::Start));
        assert_eq!(
            g.toggle(Coord::new(5, 5)),
            Err(GridError::OutOfBounds(Coord::new(5, 5)))
        );
    }

    #[test]
    fn paint_needs_both_endpoints() {
        let mut g = Grid::new(1, 4).unwrap();
        g.paint(Coord::new(0, 2)).unwrap();
        assert_eq!(g.at(Coord::new(0, 2)), Some(CellState::Open));
        g.place_start(Coord::new(0, 0)).unwrap();
        g.place_end(Coord::new(0, 3)).unwrap();
        g.paint(Coord::new(0, 2)).unwrap();
        g.paint(Coord::new(0, 0)).unwrap();
        assert_eq!(g.at(Coord::new(0, 2)), Some(CellState::Wall));
        assert_eq!(g.at(Coord::new(0, 0)), Some(CellState::Start));
    }

    #[test]
    fn endpoints_stay_unique() {
        let mut g = Grid::new(2, 2).unwrap();
        g.place_start(Coord::new(0, 0)).unwrap();
        g.place_start(Coord::new(1, 0)).unwrap();
        assert_eq!(g.count(CellState::Start), 1);
        assert_eq!(g.at(Coord::new(0, 0)), Some(CellState::Open));
        assert_eq!(g.start(), Some(Coord::new(1, 0)));

        g.place_end(Coord::new(0, 1)).unwrap();
        assert_eq!(
            g.place_end(Coord::new(1, 0)),
            Err(GridError::Occupied(Coord::new(1, 0)))
        );

        g.set_wall(Coord::new(0, 1)).unwrap();
        assert_eq!(g.at(Coord::new(0, 1)), Some(CellState::End));
        g.set_open(Coord::new(0, 1)).unwrap();
        assert_eq!(g.end(), None);
        assert_eq!(g.count(CellState::End), 0);
    }

    #[test]
    fn clear_resets_everything() {
        let mut g: Grid = ROOM.parse().unwrap();
        g.clear();
        assert_eq!(g.count(CellState::Open), g.len());
        assert_eq!((g.start(), g.end()), (None, None));
    }
}
