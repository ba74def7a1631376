use super::{canonical_pair, Edge, VertexSet};
use crate::error::ConnectError;
use std::collections::HashSet;

/// Stores the undirected weighted edges between vertices of a [`VertexSet`].
///
/// Edges are kept in insertion order. That order is the tie-break between
/// equal-weight edges when a spanning forest is computed, so it is part of the
/// observable contract of [`EdgeSet::all`].
#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    edges: Vec<Edge>,
    /// Canonical pairs present in `edges`, for duplicate lookups.
    pairs: HashSet<(usize, usize)>,
}

impl EdgeSet {
    pub fn new() -> EdgeSet {
        EdgeSet::default()
    }

    /// Connects vertices `a` and `b` of `vertices`.
    ///
    /// # Arguments
    ///
    /// * `vertices` - The vertex set the ids refer to; supplies the endpoint positions.
    /// * `a`, `b` - Endpoint ids, in either order.
    ///
    /// # Returns
    ///
    /// The weight of the new edge: the endpoint distance rounded to an integer.
    ///
    /// Checks run in a fixed order: self-loop first, then index range, then duplicates
    /// in either orientation. The first failing check decides the error and nothing
    /// is stored.
    pub fn connect(
        &mut self,
        vertices: &VertexSet,
        a: usize,
        b: usize,
    ) -> Result<u64, ConnectError> {
        if a == b {
            return Err(ConnectError::SelfLoop(a));
        }

        let vertex_count = vertices.size();
        if a >= vertex_count || b >= vertex_count {
            return Err(ConnectError::InvalidIndex { a, b, vertex_count });
        }

        if self.exists(a, b) {
            return Err(ConnectError::DuplicateEdge(a, b));
        }

        let edge = Edge::between(vertices.get(a), vertices.get(b));
        self.pairs.insert(edge.endpoints());
        self.edges.push(edge);
        Ok(edge.weight)
    }

    /// Whether an edge joins `a` and `b`, in either orientation.
    pub fn exists(&self, a: usize, b: usize) -> bool {
        self.pairs.contains(&canonical_pair(a, b))
    }

    /// All edges in insertion order.
    pub fn all(&self) -> &[Edge] {
        &self.edges
    }

    /// Iterates over the edges in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    /// Number of edges stored.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sum of the weights of every stored edge.
    pub fn total_weight(&self) -> u64 {
        self.edges.iter().map(|edge| edge.weight).sum()
    }

    pub fn clear(&mut self) {
        self.edges.clear();
        self.pairs.clear();
    }
}
