use super::{SpanningForest, SpanningSolver};
use crate::graph::Edge;
use crate::union_find::UnionFind;

/// Kruskal's algorithm over a snapshot of the edge list.
///
/// Edges are stable-sorted by ascending weight, so among equal weights the
/// earlier-inserted edge is considered first. A fresh [`UnionFind`] is built
/// on every call; the inputs are never mutated.
///
/// # Example
///
/// ```
/// # use site_mst::solver::{KruskalSolver, SpanningSolver};
/// # use site_mst::SiteGraph;
///
/// let mut graph = SiteGraph::new();
/// let a = graph.add_vertex(0.0, 0.0).unwrap();
/// let b = graph.add_vertex(40.0, 0.0).unwrap();
/// graph.add_edge(a, b).unwrap();
///
/// let forest = KruskalSolver.solve(graph.vertices().size(), graph.edges().all());
/// assert_eq!(forest.total_weight(), 40);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct KruskalSolver;

impl SpanningSolver for KruskalSolver {
    fn solve(&self, vertex_count: usize, edges: &[Edge]) -> SpanningForest {
        if vertex_count < 2 {
            return SpanningForest::default();
        }

        let mut sorted: Vec<&Edge> = edges.iter().collect();
        // `sort_by_key` is stable; unstable sorting would change which of several
        // equal-weight trees gets picked.
        sorted.sort_by_key(|edge| edge.weight);

        let target = vertex_count - 1;
        let mut sets = UnionFind::new(vertex_count);
        let mut selected = Vec::with_capacity(target.min(edges.len()));

        for edge in sorted {
            if sets.find(edge.a) != sets.find(edge.b) {
                sets.union(edge.a, edge.b);
                selected.push(*edge);
                if selected.len() == target {
                    break;
                }
            }
        }

        log::debug!(
            "kruskal: {} of {} edges selected for {} vertices",
            selected.len(),
            edges.len(),
            vertex_count
        );
        SpanningForest::new(selected)
    }
}
