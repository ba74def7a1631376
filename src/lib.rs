//! Minimum spanning forests over sites placed on a plane.
//!
//! A host application (an editor, a canvas, a simulation) places point-like
//! sites, links pairs of them, and asks for the cheapest set of links that keeps
//! every reachable site connected. Link weights are Euclidean distances rounded
//! to integers.
//!
//! - [`UnionFind`] - disjoint-set forest with path compression and union by rank.
//! - [`graph::VertexSet`] - sites with a minimum pairwise separation.
//! - [`graph::EdgeSet`] - deduplicated undirected weighted links.
//! - [`solver::KruskalSolver`] - deterministic Kruskal over an edge snapshot.
//! - [`SiteGraph`] / [`SharedSiteGraph`] - the request surface with a cached result.
//!
//! ```
//! use site_mst::{GraphConfig, SiteGraph};
//!
//! let mut graph = SiteGraph::with_config(GraphConfig { min_separation: 0.0 });
//! let a = graph.add_vertex(0.0, 0.0).unwrap();
//! let b = graph.add_vertex(10.0, 0.0).unwrap();
//! let c = graph.add_vertex(10.0, 10.0).unwrap();
//! graph.add_edge(a, b).unwrap();
//! graph.add_edge(b, c).unwrap();
//! graph.add_edge(a, c).unwrap();
//!
//! let forest = graph.compute_mst();
//! assert_eq!(forest.len(), 2);
//! assert_eq!(forest.total_weight(), 20);
//! ```

mod engine;
pub mod error;
pub mod graph;
pub mod solver;
mod union_find;

pub use engine::{SharedSiteGraph, SiteGraph};
pub use error::{ConnectError, GraphError, PlacementError};
pub use graph::{Edge, Vertex};
pub use solver::{KruskalSolver, SpanningForest, SpanningSolver};
pub use union_find::UnionFind;

/// Minimum distance between two sites unless configured otherwise.
pub const DEFAULT_MIN_SEPARATION: f64 = 30.0;

/// Tunables of a [`SiteGraph`].
///
/// # Fields
///
/// * `min_separation` - Sites strictly closer than this are rejected. `0.0` disables the check;
///   negative values behave like `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphConfig {
    pub min_separation: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            min_separation: DEFAULT_MIN_SEPARATION,
        }
    }
}
