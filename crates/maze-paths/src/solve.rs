use std::time::Instant;

use log::debug;
use maze_core::{Coord, Grid};

use crate::error::SearchError;
use crate::frontier::{Fifo, Lifo};
use crate::heap::MinQueue;
use crate::result::{Algorithm, SearchResult};
use crate::traverse::traverse;

/// Search `grid` from `start` to `end` with the chosen strategy.
///
/// Both endpoints must be in bounds and not walls. The grid is only read.
/// `elapsed` covers the traversal itself, not the endpoint checks.
pub fn solve(
    grid: &Grid,
    start: Coord,
    end: Coord,
    algorithm: Algorithm,
) -> Result<SearchResult, SearchError> {
    if !grid.is_traversable(start) {
        return Err(SearchError::StartNotTraversable(start));
    }
    if !grid.is_traversable(end) {
        return Err(SearchError::EndNotTraversable(end));
    }

    let clock = Instant::now();
    let t = match algorithm {
        Algorithm::Bfs => traverse(grid, start, end, Fifo::default())?,
        Algorithm::Dfs => traverse(grid, start, end, Lifo::default())?,
        Algorithm::Dijkstra => {
            let heap = MinQueue::<u32, Coord>::with_capacity(grid.len());
            traverse(grid, start, end, heap)?
        }
    };
    let elapsed = clock.elapsed();

    debug!(
        "{algorithm} {start} -> {end}: visited {} cells, path {} cells, {elapsed:?}",
        t.visit_order.len(),
        t.path.len()
    );

    Ok(SearchResult {
        algorithm,
        visit_order: t.visit_order,
        path: t.path,
        elapsed,
    })
}

/// Like [`solve`], using the grid's own start and end cells.
pub fn solve_grid(grid: &Grid, algorithm: Algorithm) -> Result<SearchResult, SearchError> {
    let start = grid.start().ok_or(SearchError::MissingStart)?;
    let end = grid.end().ok_or(SearchError::MissingEnd)?;
    solve(grid, start, end, algorithm)
}

/// Breadth-first search. See [`solve`].
pub fn bfs(grid: &Grid, start: Coord, end: Coord) -> Result<SearchResult, SearchError> {
    solve(grid, start, end, Algorithm::Bfs)
}

/// Depth-first search. See [`solve`].
pub fn dfs(grid: &Grid, start: Coord, end: Coord) -> Result<SearchResult, SearchError> {
    solve(grid, start, end, Algorithm::Dfs)
}

/// Dijkstra search. See [`solve`].
pub fn dijkstra(grid: &Grid, start: Coord, end: Coord) -> Result<SearchResult, SearchError> {
    solve(grid, start, end, Algorithm::Dijkstra)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::CellState;
    use maze_gen::{MazeConfig, MazeGen};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::{HashSet, VecDeque};

    /// Reference shortest distance in cells, or 0 if unreachable.
    fn shortest_cells(grid: &Grid, start: Coord, end: Coord) -> usize {
        let mut dist = vec![usize::MAX; grid.len()];
        let mut queue = VecDeque::from([start]);
        dist[grid.index(start).unwrap()] = 1;
        while let Some(c) = queue.pop_front() {
            let d = dist[grid.index(c).unwrap()];
            if c == end {
                return d;
            }
            for n in grid.neighbors(c) {
                let ni = grid.index(n).unwrap();
                if dist[ni] == usize::MAX {
                    dist[ni] = d + 1;
                    queue.push_back(n);
                }
            }
        }
        0
    }

    /// Cells connected to `start`.
    fn region(grid: &Grid, start: Coord) -> HashSet<Coord> {
        let mut seen = HashSet::from([start]);
        let mut stack = vec![start];
        while let Some(c) = stack.pop() {
            for n in grid.neighbors(c) {
                if seen.insert(n) {
                    stack.push(n);
                }
            }
        }
        seen
    }

    fn assert_valid_route(grid: &Grid, path: &[Coord], start: Coord, end: Coord) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));
        assert!(path.iter().all(|&c| grid.is_traversable(c)));
        assert!(path.windows(2).all(|w| w[0].is_adjacent(w[1])));
        let unique: HashSet<_> = path.iter().collect();
        assert_eq!(unique.len(), path.len(), "route repeats a cell");
    }

    #[test]
    fn open_three_by_three() {
        let g = Grid::new(3, 3).unwrap();
        let (s, e) = (Coord::new(0, 0), Coord::new(2, 2));
        for a in [Algorithm::Bfs, Algorithm::Dijkstra] {
            let r = solve(&g, s, e, a).unwrap();
            assert_eq!(r.algorithm, a);
            assert_eq!(r.path_len(), 5);
            assert_eq!(r.visited(), 9);
            assert_eq!(r.visit_order.last(), Some(&e));
            assert_valid_route(&g, &r.path, s, e);
        }
        let r = bfs(&g, s, e).unwrap();
        assert_eq!(
            r.path,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(1, 2),
                Coord::new(2, 2),
            ]
        );
    }

    #[test]
    fn single_cell_grid() {
        let g = Grid::new(1, 1).unwrap();
        let c = Coord::ZERO;
        for a in Algorithm::ALL {
            let r = solve(&g, c, c, a).unwrap();
            assert_eq!(r.path, vec![c]);
            assert_eq!(r.visit_order, vec![c]);
        }
    }

    #[test]
    fn dfs_route_can_be_longer() {
        let g = Grid::new(3, 3).unwrap();
        let (s, e) = (Coord::new(0, 0), Coord::new(0, 2));
        let short = bfs(&g, s, e).unwrap();
        let long = dfs(&g, s, e).unwrap();
        assert_eq!(short.path_len(), 3);
        assert_eq!(long.path_len(), 7);
        assert_valid_route(&g, &long.path, s, e);
    }

    #[test]
    fn wall_separates_endpoints() {
        let g: Grid = "\
S#..
.#..
.#.E"
            .parse()
            .unwrap();
        let expected = HashSet::from([Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]);
        for a in Algorithm::ALL {
            let r = solve_grid(&g, a).unwrap();
            assert!(!r.is_found());
            assert_eq!(r.visited(), 3);
            let visited: HashSet<_> = r.visit_order.iter().copied().collect();
            assert_eq!(visited, expected);
        }
    }

    #[test]
    fn endpoint_preconditions() {
        let g: Grid = "S#\n.E".parse().unwrap();
        let s = Coord::new(0, 0);
        assert_eq!(
            solve(&g, Coord::new(0, 1), s, Algorithm::Bfs),
            Err(SearchError::StartNotTraversable(Coord::new(0, 1)))
        );
        assert_eq!(
            solve(&g, s, Coord::new(2, 0), Algorithm::Dfs),
            Err(SearchError::EndNotTraversable(Coord::new(2, 0)))
        );
        assert_eq!(
            solve(&g, Coord::new(-1, 0), s, Algorithm::Dijkstra),
            Err(SearchError::StartNotTraversable(Coord::new(-1, 0)))
        );
        assert!(SearchError::MissingEnd.is_precondition());
        assert!(!SearchError::BrokenPath(s).is_precondition());

        let drained = SearchError::from(crate::error::EmptyQueueError);
        assert_eq!(drained.to_string(), "pop from an empty priority queue");
        assert!(!drained.is_precondition());
    }

    #[test]
    fn solve_grid_needs_endpoints() {
        let mut g = Grid::new(2, 2).unwrap();
        assert_eq!(solve_grid(&g, Algorithm::Bfs), Err(SearchError::MissingStart));
        g.place_start(Coord::new(0, 0)).unwrap();
        assert_eq!(solve_grid(&g, Algorithm::Bfs), Err(SearchError::MissingEnd));
        g.place_end(Coord::new(1, 1)).unwrap();
        let r = solve_grid(&g, Algorithm::Bfs).unwrap();
        assert_eq!(r.path_len(), 3);
        // The grid is not marked up by the search.
        assert_eq!(g.count(CellState::Open), 2);
    }

    #[test]
    fn random_mazes() {
        let config = MazeConfig {
            rows: 12,
            cols: 18,
            wall_density: 0.35,
        };
        let mut maze_gen = MazeGen::new(StdRng::seed_from_u64(0x5eed));
        let mut found = 0;
        for _ in 0..40 {
            let g = maze_gen.random_maze(&config).unwrap();
            let (s, e) = (g.start().unwrap(), g.end().unwrap());
            let shortest = shortest_cells(&g, s, e);

            let b = bfs(&g, s, e).unwrap();
            let d = dijkstra(&g, s, e).unwrap();
            let f = dfs(&g, s, e).unwrap();
            assert_eq!(b.path_len(), shortest);
            assert_eq!(d.path_len(), shortest);

            for r in [&b, &d, &f] {
                let unique: HashSet<_> = r.visit_order.iter().collect();
                assert_eq!(unique.len(), r.visited(), "{} visited a cell twice", r.algorithm);
                assert_eq!(r.visit_order.first(), Some(&s));
            }

            if shortest == 0 {
                assert!(!f.is_found());
                let reach = region(&g, s);
                for r in [&b, &d, &f] {
                    let visited: HashSet<_> = r.visit_order.iter().copied().collect();
                    assert_eq!(visited, reach);
                }
            } else {
                found += 1;
                assert!(f.path_len() >= shortest);
                for r in [&b, &d, &f] {
                    assert_valid_route(&g, &r.path, s, e);
                    assert_eq!(r.visit_order.last(), Some(&e));
                }
            }
        }
        assert!(found > 0);
    }

    #[test]
    fn repeated_runs_agree() {
        let mut maze_gen = MazeGen::new(StdRng::seed_from_u64(99));
        let g = maze_gen.random_maze(&MazeConfig::default()).unwrap();
        for a in Algorithm::ALL {
            let first = solve_grid(&g, a).unwrap();
            let second = solve_grid(&g, a).unwrap();
            assert_eq!(first.visit_order, second.visit_order);
            assert_eq!(first.path, second.path);
        }
    }
}
