use thiserror::Error;

/// Error types returned by the [`SiteGraph`](crate::SiteGraph) request surface.
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("Vertex placement rejected: {0}")]
    Placement(#[from] PlacementError),

    #[error("Edge creation rejected: {0}")]
    Connect(#[from] ConnectError),

    #[error("Graph lock poisoned: {0}")]
    Poisoned(String),
}

/// Errors related to placing a new vertex.
///
/// The rejected request leaves the vertex set unchanged.
#[derive(Debug, Error, PartialEq)]
pub enum PlacementError {
    #[error("Too close to vertex {nearest}: distance {distance}, need at least {min_separation}")]
    TooClose {
        /// Id of the first existing vertex found inside the separation radius.
        nearest: usize,
        distance: f64,
        min_separation: f64,
    },
}

/// Errors related to connecting two vertices.
///
/// Each variant is a user-correctable condition; the edge set is left unchanged.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ConnectError {
    #[error("Cannot connect vertex {0} to itself")]
    SelfLoop(usize),

    #[error("Invalid vertex index in ({a}, {b}), graph has {vertex_count} vertices")]
    InvalidIndex {
        a: usize,
        b: usize,
        vertex_count: usize,
    },

    #[error("Vertices {0} and {1} are already connected")]
    DuplicateEdge(usize, usize),
}
