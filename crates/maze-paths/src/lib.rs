//! Route search over maze grids.
//!
//! Three interchangeable strategies share one traversal routine and differ
//! only in their frontier of pending cells:
//!
//! | Strategy | Frontier | Shortest route? |
//! |---|---|---|
//! | **BFS** ([`bfs`]) | FIFO queue | yes |
//! | **DFS** ([`dfs`]) | LIFO stack | no |
//! | **Dijkstra** ([`dijkstra`]) | [`MinQueue`] binary heap | yes |
//!
//! Every search returns a [`SearchResult`] holding the order cells were
//! processed in, the route found (empty if none), and the time taken.
//! Grids are only ever borrowed immutably, so several searches may read the
//! same grid at once.
//!
//! Among cells with equal cost, Dijkstra's processing order follows the
//! heap layout rather than discovery order. It is reproducible for a given
//! grid but may differ from BFS's order.

mod error;
mod frontier;
mod heap;
mod reconstruct;
mod result;
mod solve;
mod traverse;

pub use error::{EmptyQueueError, SearchError};
pub use heap::MinQueue;
pub use reconstruct::{PredecessorMap, reconstruct_path};
pub use result::{Algorithm, SearchResult, UnknownAlgorithm};
pub use solve::{bfs, dfs, dijkstra, solve, solve_grid};
