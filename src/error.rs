use thiserror::Error;

/// Errors reported by graph construction, priority queues and loaders.
///
/// Algorithmic non-results, e.g., an unreachable destination,
/// are ordinary return values rather than errors.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A request can never be satisfied, such as more edges than the vertices allow.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Both endpoints of an undirected edge are the same vertex.
    #[error("invalid edge: self-loop on {0}")]
    InvalidEdge(String),

    /// Extracting from an empty collection.
    #[error("empty collection")]
    EmptyCollection,

    /// A malformed line in a road network description.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Reading a road network description failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
