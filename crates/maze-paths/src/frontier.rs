use std::collections::VecDeque;

use maze_core::Coord;

use crate::error::EmptyQueueError;
use crate::heap::MinQueue;

/// Pending cells of a search, tagged with the cost at which they were
/// reached.
///
/// The frontier alone decides the search strategy: FIFO gives BFS, LIFO
/// gives DFS, lowest-cost-first gives Dijkstra.
pub(crate) trait Frontier {
    /// Whether a strictly cheaper route re-admits an already-discovered
    /// cell. Non-relaxing frontiers admit each cell once, at discovery.
    const RELAXES: bool;

    /// Add `c`, reached at `cost`.
    fn push(&mut self, cost: u32, c: Coord);

    /// Remove the next cell to process.
    fn pop(&mut self) -> Result<(u32, Coord), EmptyQueueError>;

    /// Whether nothing is pending.
    fn is_empty(&self) -> bool;
}

/// First-in first-out frontier (breadth-first search).
#[derive(Debug, Clone, Default)]
pub(crate) struct Fifo(VecDeque<(u32, Coord)>);

impl Frontier for Fifo {
    const RELAXES: bool = false;

    fn push(&mut self, cost: u32, c: Coord) {
        self.0.push_back((cost, c));
    }

    fn pop(&mut self) -> Result<(u32, Coord), EmptyQueueError> {
        self.0.pop_front().ok_or(EmptyQueueError)
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Last-in first-out frontier (depth-first search).
#[derive(Debug, Clone, Default)]
pub(crate) struct Lifo(Vec<(u32, Coord)>);

impl Frontier for Lifo {
    const RELAXES: bool = false;

    fn push(&mut self, cost: u32, c: Coord) {
        self.0.push((cost, c));
    }

    fn pop(&mut self) -> Result<(u32, Coord), EmptyQueueError> {
        self.0.pop().ok_or(EmptyQueueError)
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Lowest-cost-first frontier (Dijkstra). Stale entries stay in the heap
/// and are skipped when popped.
impl Frontier for MinQueue<u32, Coord> {
    const RELAXES: bool = true;

    fn push(&mut self, cost: u32, c: Coord) {
        MinQueue::push(self, cost, c);
    }

    fn pop(&mut self) -> Result<(u32, Coord), EmptyQueueError> {
        MinQueue::pop(self)
    }

    fn is_empty(&self) -> bool {
        MinQueue::is_empty(self)
    }
}
