use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use maze_core::Coord;

/// Search strategy selector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Breadth-first search: shortest route by step count.
    Bfs,
    /// Depth-first search: some route, not necessarily the shortest.
    Dfs,
    /// Uniform-cost search over a priority queue. Same route length as BFS
    /// on this unit-cost grid.
    Dijkstra,
}

impl Algorithm {
    /// Every strategy, in menu order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Dijkstra];

    /// Short lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
        }
    }

    /// Whether the route this strategy returns is always a shortest one.
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Self::Dfs)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name().to_uppercase())
    }
}

/// An algorithm name that is not one of `bfs`, `dfs`, `dijkstra`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm \u{201c}{0}\u{201d} (expected bfs, dfs or dijkstra)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// Outcome of one search.
///
/// An empty `path` means the end was unreachable; `visit_order` then covers
/// every cell connected to the start.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Strategy that produced this result.
    pub algorithm: Algorithm,
    /// Cells in the order they were taken off the frontier.
    pub visit_order: Vec<Coord>,
    /// Route from start to end inclusive, or empty.
    pub path: Vec<Coord>,
    /// Wall-clock time spent searching.
    pub elapsed: Duration,
}

impl SearchResult {
    /// Whether a route was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Route length in cells (0 if unreachable).
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    /// Number of cells processed.
    #[inline]
    pub fn visited(&self) -> usize {
        self.visit_order.len()
    }

    /// One-line report of the outcome.
    pub fn summary(&self) -> String {
        let secs = self.elapsed.as_secs_f64();
        if self.is_found() {
            format!(
                "Path Found! Length: {} cells, Time: {secs:.3}s",
                self.path_len()
            )
        } else {
            format!("No Path Found! Length: 0 cells, Time: {secs:.3}s")
        }
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({} cells visited)",
            self.algorithm,
            self.summary(),
            self.visited()
        )
    }
}
