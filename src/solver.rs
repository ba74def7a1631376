mod kruskal;

use crate::graph::Edge;
pub use kruskal::KruskalSolver;

/// A strategy that selects a minimum spanning forest from a snapshot of the graph.
///
/// Implementations must be pure functions of `(vertex_count, edges)`: the same
/// snapshot always yields the same forest, edge order included.
pub trait SpanningSolver {
    /// Computes the forest over vertices `0..vertex_count` using `edges` in their
    /// insertion order.
    fn solve(&self, vertex_count: usize, edges: &[Edge]) -> SpanningForest;
}

/// The ordered edges of a minimum spanning forest.
///
/// Edges appear in the order the solver selected them. For a connected graph
/// with `n` vertices the forest holds exactly `n - 1` edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanningForest {
    edges: Vec<Edge>,
}

impl SpanningForest {
    pub(crate) fn new(edges: Vec<Edge>) -> SpanningForest {
        SpanningForest { edges }
    }

    /// The selected edges in ascending weight order, ties in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    /// Number of selected edges, at most `vertex_count - 1`.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sum of the weights of the selected edges.
    pub fn total_weight(&self) -> u64 {
        self.edges.iter().map(|edge| edge.weight).sum()
    }

    /// Whether the forest connects all `vertex_count` vertices into a single tree.
    pub fn is_spanning_tree(&self, vertex_count: usize) -> bool {
        vertex_count > 0 && self.edges.len() == vertex_count - 1
    }

    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

impl<'a> IntoIterator for &'a SpanningForest {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
