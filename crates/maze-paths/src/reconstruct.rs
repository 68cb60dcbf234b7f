//! Predecessor bookkeeping and route reconstruction.

use maze_core::{Coord, Grid};

/// For each discovered cell, the cell it was reached from.
///
/// Backed by a flat array indexed like the grid it was built for. The
/// start cell never has an entry.
#[derive(Debug, Clone)]
pub struct PredecessorMap {
    links: Vec<Option<Coord>>,
    rows: i32,
    cols: i32,
}

impl PredecessorMap {
    /// An empty map sized for `grid`.
    pub fn new(grid: &Grid) -> Self {
        Self {
            links: vec![None; grid.len()],
            rows: grid.rows(),
            cols: grid.cols(),
        }
    }

    #[inline]
    fn idx(&self, c: Coord) -> Option<usize> {
        if c.row < 0 || c.row >= self.rows || c.col < 0 || c.col >= self.cols {
            return None;
        }
        Some((c.row as usize) * (self.cols as usize) + c.col as usize)
    }

    /// Record that `c` was reached from `from`, replacing any earlier link.
    /// Out-of-range coordinates are ignored.
    pub fn insert(&mut self, c: Coord, from: Coord) {
        if let Some(i) = self.idx(c) {
            self.links[i] = Some(from);
        }
    }

    /// The cell `c` was reached from.
    pub fn get(&self, c: Coord) -> Option<Coord> {
        self.idx(c).and_then(|i| self.links[i])
    }

    /// Number of cells with a recorded predecessor.
    pub fn len(&self) -> usize {
        self.links.iter().filter(|l| l.is_some()).count()
    }

    /// Whether no predecessor has been recorded.
    pub fn is_empty(&self) -> bool {
        self.links.iter().all(Option::is_none)
    }
}

/// Walk `preds` backward from `end` to `start` and return the route
/// start→end, both endpoints included.
///
/// Returns `None` if the chain breaks or loops before reaching `start`.
pub fn reconstruct_path(preds: &PredecessorMap, start: Coord, end: Coord) -> Option<Vec<Coord>> {
    let mut path = vec![end];
    let mut cur = end;
    while cur != start {
        // A simple route can't be longer than the grid.
        if path.len() > preds.links.len() {
            return None;
        }
        cur = preds.get(cur)?;
        path.push(cur);
    }
    path.reverse();
    Some(path)
}
