use log::trace;
use maze_core::{Coord, Grid};

use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::reconstruct::{PredecessorMap, reconstruct_path};

/// Best-known cost sentinel for cells not yet discovered.
pub(crate) const UNDISCOVERED: u32 = u32::MAX;

/// Raw output of one traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Traversal {
    /// Cells in the order they were taken off the frontier.
    pub(crate) visit_order: Vec<Coord>,
    /// Route start→end, empty if `end` was never reached.
    pub(crate) path: Vec<Coord>,
}

/// Search `grid` from `start` to `end`, with `frontier` picking the order.
///
/// Every step costs 1. A cell is recorded in the visit order when it is
/// popped, and gets a predecessor whenever it is admitted to the frontier.
/// Non-relaxing frontiers admit a cell once, at first discovery; relaxing
/// ones admit it again on each strictly cheaper cost, and popped entries
/// whose cost is above the best known one are skipped as stale.
///
/// `start` and `end` must be traversable; [`solve`](crate::solve) checks
/// this before calling.
pub(crate) fn traverse<F: Frontier>(
    grid: &Grid,
    start: Coord,
    end: Coord,
    mut frontier: F,
) -> Result<Traversal, SearchError> {
    let si = grid
        .index(start)
        .ok_or(SearchError::StartNotTraversable(start))?;

    let mut best = vec![UNDISCOVERED; grid.len()];
    let mut preds = PredecessorMap::new(grid);
    let mut visit_order = Vec::new();

    best[si] = 0;
    frontier.push(0, start);

    while !frontier.is_empty() {
        let (cost, cur) = frontier.pop()?;
        let Some(ci) = grid.index(cur) else {
            continue;
        };
        if cost > best[ci] {
            trace!("skipping stale entry {cur} at cost {cost} (best {})", best[ci]);
            continue;
        }

        visit_order.push(cur);

        if cur == end {
            let path = reconstruct_path(&preds, start, end).ok_or(SearchError::BrokenPath(end))?;
            return Ok(Traversal { visit_order, path });
        }

        let next = cost + 1;
        for n in grid.neighbors(cur) {
            let Some(ni) = grid.index(n) else {
                continue;
            };
            let admit = if F::RELAXES {
                next < best[ni]
            } else {
                best[ni] == UNDISCOVERED
            };
            if admit {
                best[ni] = next;
                preds.insert(n, cur);
                frontier.push(next, n);
            }
        }
    }

    Ok(Traversal {
        visit_order,
        path: Vec::new(),
    })
}
