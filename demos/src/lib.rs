//! Text rendering of search results, shared by the demo binaries.
//!
//! A result is replayed in stages, the way the original editor animated it:
//! first every processed cell in visit order, then every route cell.

use std::str::FromStr;

use maze_core::{CellState, Grid};
use maze_paths::{Algorithm, SearchResult, UnknownAlgorithm};

/// Glyph for a processed cell.
pub const VISITED: char = 'o';
/// Glyph for a route cell.
pub const ROUTE: char = '*';

/// One or more algorithms picked on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection(pub Vec<Algorithm>);

impl FromStr for Selection {
    type Err = UnknownAlgorithm;

    /// `all` or a comma-separated list of algorithm names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self(Algorithm::ALL.to_vec()));
        }
        let mut picked = Vec::new();
        for name in s.split(',') {
            let a: Algorithm = name.parse()?;
            if !picked.contains(&a) {
                picked.push(a);
            }
        }
        Ok(Self(picked))
    }
}

/// Number of replay stages: one per processed cell plus one per route cell.
pub fn frame_count(result: &SearchResult) -> usize {
    result.visit_order.len() + result.path.len()
}

/// Render the grid after the first `n` replay stages.
///
/// Start and end cells always keep their own glyphs.
pub fn render_frame(grid: &Grid, result: &SearchResult, n: usize) -> String {
    let mut glyphs: Vec<char> = grid.iter().map(|(_, s)| s.glyph()).collect();
    let visits = n.min(result.visit_order.len());
    let routes = n.saturating_sub(visits).min(result.path.len());

    let marks = result.visit_order[..visits]
        .iter()
        .map(|&c| (c, VISITED))
        .chain(result.path[..routes].iter().map(|&c| (c, ROUTE)));
    for (c, glyph) in marks {
        let Some(i) = grid.index(c) else {
            continue;
        };
        if matches!(grid.at(c), Some(CellState::Start | CellState::End)) {
            continue;
        }
        glyphs[i] = glyph;
    }

    glyphs
        .chunks(grid.cols() as usize)
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the grid with the full replay applied.
pub fn render(grid: &Grid, result: &SearchResult) -> String {
    render_frame(grid, result, frame_count(result))
}
