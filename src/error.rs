/// Everything that can go wrong while building a graph or running an algorithm on it.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// The edge list is malformed or shorter than its header declares.
    #[error("malformed edge list at line {line}: {reason}")]
    Format { line: usize, reason: String },

    /// The edge list could not be read.
    #[error("cannot read edge list: {0}")]
    Io(#[from] std::io::Error),

    /// A spanning tree was requested but the graph has more than one component.
    #[error("graph is disconnected: found {found} of the {needed} spanning tree edges")]
    Disconnected { found: usize, needed: usize },

    /// No path leads from `from` to `to`.
    #[error("vertex {to} is unreachable from vertex {from}")]
    Unreachable { from: usize, to: usize },

    /// A vertex index outside `[0, order)`.
    #[error("vertex {vertex} is out of range 0..{order}")]
    InvalidVertex { vertex: usize, order: usize },

    /// The dense matrix of `order × order` cells cannot be allocated.
    #[error("{order} vertices are too many for an adjacency matrix")]
    TooLarge { order: usize },

    /// An operation was invoked in a state that does not allow it.
    #[error("precondition violated: {0}")]
    Precondition(&'static str),

    /// Requested density cannot be satisfied for this order.
    #[error("density {density}% is outside {min}..=100% for {order} vertices")]
    InvalidDensity {
        density: u32,
        min: u32,
        order: usize,
    },

    /// Random generation ran out of its retry budget.
    #[error("random generation gave up after {attempts} attempts with {placed} of {wanted} edges placed")]
    GenerationExhausted {
        attempts: usize,
        placed: usize,
        wanted: usize,
    },
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
