use maze_core::Coord;

/// Popping from an empty [`MinQueue`](crate::MinQueue) or frontier.
///
/// Search loops check emptiness before popping, so this only reaches a
/// caller through [`SearchError::EmptyQueue`] if a frontier misreports
/// its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("pop from an empty priority queue")]
pub struct EmptyQueueError;

/// Errors returned by [`solve`](crate::solve) and friends.
///
/// An unreachable end is not an error: it yields a result with an empty
/// path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The start coordinate is out of bounds or a wall.
    #[error("start {0} is not a traversable cell")]
    StartNotTraversable(Coord),

    /// The end coordinate is out of bounds or a wall.
    #[error("end {0} is not a traversable cell")]
    EndNotTraversable(Coord),

    /// The grid has no start cell to search from.
    #[error("grid has no start cell")]
    MissingStart,

    /// The grid has no end cell to search for.
    #[error("grid has no end cell")]
    MissingEnd,

    /// The frontier was popped while empty.
    #[error(transparent)]
    EmptyQueue(#[from] EmptyQueueError),

    /// The predecessor chain from the end never led back to the start.
    #[error("predecessor chain from {0} does not reach the start")]
    BrokenPath(Coord),
}

impl SearchError {
    /// Whether the error is the caller's fault (bad start, end or grid)
    /// rather than an internal failure.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::StartNotTraversable(_)
                | Self::EndNotTraversable(_)
                | Self::MissingStart
                | Self::MissingEnd
        )
    }
}
