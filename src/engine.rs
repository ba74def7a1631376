use crate::error::{ConnectError, GraphError, PlacementError};
use crate::graph::{Edge, EdgeSet, Vertex, VertexSet};
use crate::solver::{KruskalSolver, SpanningForest, SpanningSolver};
use crate::GraphConfig;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// The state container behind an interactive site editor.
///
/// `SiteGraph` owns the vertices, the edges and the last computed spanning forest.
/// The cached forest is valid only for the edge snapshot it was computed from: any
/// accepted vertex insertion, edge insertion or reset drops it.
///
/// # Type Parameters
///
/// * `S` - The solver used by [`SiteGraph::compute_mst`], Kruskal by default.
///
/// # Example
///
/// ```
/// use site_mst::SiteGraph;
///
/// let mut graph = SiteGraph::new();
/// let a = graph.add_vertex(0.0, 0.0).unwrap();
/// let b = graph.add_vertex(30.0, 0.0).unwrap();
/// let c = graph.add_vertex(30.0, 40.0).unwrap();
/// graph.add_edge(a, b).unwrap();
/// graph.add_edge(b, c).unwrap();
/// graph.add_edge(a, c).unwrap();
///
/// assert_eq!(graph.compute_mst().total_weight(), 70);
/// ```
#[derive(Debug, Clone)]
pub struct SiteGraph<S: SpanningSolver = KruskalSolver> {
    vertices: VertexSet,
    edges: EdgeSet,
    mst: Option<SpanningForest>,
    solver: S,
}

impl Default for SiteGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteGraph {
    /// Creates an empty graph with the default separation and the Kruskal solver.
    pub fn new() -> SiteGraph {
        SiteGraph::with_config(GraphConfig::default())
    }

    /// Creates an empty graph with the given configuration and the Kruskal solver.
    pub fn with_config(config: GraphConfig) -> SiteGraph {
        SiteGraph::with_solver(config, KruskalSolver)
    }
}

impl<S: SpanningSolver> SiteGraph<S> {
    /// Creates an empty graph with a custom spanning forest solver.
    ///
    /// # Arguments
    ///
    /// * `config` - Separation settings for new sites.
    /// * `solver` - Strategy used by [`SiteGraph::compute_mst`].
    ///
    /// # Returns
    ///
    /// An empty `SiteGraph` with no cached forest.
    pub fn with_solver(config: GraphConfig, solver: S) -> SiteGraph<S> {
        SiteGraph {
            vertices: VertexSet::new(config.min_separation),
            edges: EdgeSet::new(),
            mst: None,
            solver,
        }
    }

    /// Places a site at `(x, y)`.
    ///
    /// # Returns
    ///
    /// The new site's id, or [`PlacementError::TooClose`] if it lands inside the
    /// separation radius of an existing site. An accepted site drops the cached forest.
    pub fn add_vertex(&mut self, x: f64, y: f64) -> Result<usize, PlacementError> {
        match self.vertices.insert(x, y) {
            Ok(id) => {
                log::debug!("placed vertex {id} at ({x}, {y})");
                self.mst = None;
                Ok(id)
            }
            Err(e) => {
                log::warn!("rejected vertex at ({x}, {y}): {e}");
                Err(e)
            }
        }
    }

    /// Connects two existing sites.
    ///
    /// # Arguments
    ///
    /// * `a`, `b` - Ids of the sites to connect, in either order.
    ///
    /// # Returns
    ///
    /// The weight of the new edge, or the [`ConnectError`] explaining the rejection.
    /// An accepted edge drops the cached forest.
    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<u64, ConnectError> {
        match self.edges.connect(&self.vertices, a, b) {
            Ok(weight) => {
                log::debug!("connected {a} and {b} with weight {weight}");
                self.mst = None;
                Ok(weight)
            }
            Err(e) => {
                log::warn!("rejected edge ({a}, {b}): {e}");
                Err(e)
            }
        }
    }

    /// Computes the minimum spanning forest of the current snapshot and caches it.
    pub fn compute_mst(&mut self) -> &SpanningForest {
        let forest = self.solver.solve(self.vertices.size(), self.edges.all());
        log::info!(
            "spanning forest over {} vertices: {} edges, total weight {}",
            self.vertices.size(),
            forest.len(),
            forest.total_weight()
        );
        self.mst.insert(forest)
    }

    /// The forest from the last [`SiteGraph::compute_mst`], if nothing changed since.
    pub fn cached_mst(&self) -> Option<&SpanningForest> {
        self.mst.as_ref()
    }

    /// Drops every vertex, every edge and the cached forest.
    pub fn reset(&mut self) {
        log::info!(
            "reset: dropping {} vertices and {} edges",
            self.vertices.size(),
            self.edges.len()
        );
        self.vertices.clear();
        self.edges.clear();
        self.mst = None;
    }

    /// Read-only view of the placed sites.
    pub fn vertices(&self) -> &VertexSet {
        &self.vertices
    }

    /// Read-only view of the edges in insertion order.
    pub fn edges(&self) -> &EdgeSet {
        &self.edges
    }

    pub fn edge_exists(&self, a: usize, b: usize) -> bool {
        self.edges.exists(a, b)
    }
}

/// A [`SiteGraph`] shared between threads under a single-writer discipline.
///
/// Mutations and spanning forest computation take the write lock, so they never
/// interleave. Queries take the read lock and may overlap each other, but never
/// observe a half-applied mutation.
#[derive(Debug)]
pub struct SharedSiteGraph<S: SpanningSolver = KruskalSolver> {
    inner: Arc<RwLock<SiteGraph<S>>>,
}

impl<S: SpanningSolver> Clone for SharedSiteGraph<S> {
    fn clone(&self) -> Self {
        SharedSiteGraph {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for SharedSiteGraph {
    fn default() -> Self {
        Self::new(SiteGraph::new())
    }
}

impl<S: SpanningSolver> SharedSiteGraph<S> {
    pub fn new(graph: SiteGraph<S>) -> SharedSiteGraph<S> {
        SharedSiteGraph {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, SiteGraph<S>>, GraphError> {
        self.inner
            .read()
            .map_err(|e| GraphError::Poisoned(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, SiteGraph<S>>, GraphError> {
        self.inner
            .write()
            .map_err(|e| GraphError::Poisoned(e.to_string()))
    }

    pub fn add_vertex(&self, x: f64, y: f64) -> Result<usize, GraphError> {
        Ok(self.write()?.add_vertex(x, y)?)
    }

    pub fn add_edge(&self, a: usize, b: usize) -> Result<u64, GraphError> {
        Ok(self.write()?.add_edge(a, b)?)
    }

    pub fn compute_mst(&self) -> Result<SpanningForest, GraphError> {
        Ok(self.write()?.compute_mst().clone())
    }

    pub fn cached_mst(&self) -> Result<Option<SpanningForest>, GraphError> {
        Ok(self.read()?.cached_mst().cloned())
    }

    pub fn reset(&self) -> Result<(), GraphError> {
        self.write()?.reset();
        Ok(())
    }

    pub fn list_vertices(&self) -> Result<Vec<Vertex>, GraphError> {
        Ok(self.read()?.vertices().as_slice().to_vec())
    }

    pub fn list_edges(&self) -> Result<Vec<Edge>, GraphError> {
        Ok(self.read()?.edges().all().to_vec())
    }

    pub fn edge_exists(&self, a: usize, b: usize) -> Result<bool, GraphError> {
        Ok(self.read()?.edge_exists(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic() -> SiteGraph {
        SiteGraph::with_config(GraphConfig { min_separation: 0.0 })
    }

    #[test]
    fn compute_mst_fills_cache() {
        let mut graph = synthetic();
        graph.add_vertex(0.0, 0.0).unwrap();
        graph.add_vertex(10.0, 0.0).unwrap();
        graph.add_edge(0, 1).unwrap();
        assert!(graph.cached_mst().is_none());

        let forest = graph.compute_mst().clone();
        assert_eq!(graph.cached_mst(), Some(&forest));
    }

    #[test]
    fn accepted_mutations_drop_cache() {
        let mut graph = synthetic();
        graph.add_vertex(0.0, 0.0).unwrap();
        graph.add_vertex(10.0, 0.0).unwrap();
        graph.compute_mst();

        graph.add_vertex(20.0, 0.0).unwrap();
        assert!(graph.cached_mst().is_none());

        graph.compute_mst();
        graph.add_edge(1, 2).unwrap();
        assert!(graph.cached_mst().is_none());

        graph.compute_mst();
        graph.reset();
        assert!(graph.cached_mst().is_none());
        assert!(graph.vertices().is_empty());
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn rejected_requests_keep_cache() {
        let mut graph = SiteGraph::new();
        graph.add_vertex(0.0, 0.0).unwrap();
        graph.add_vertex(50.0, 0.0).unwrap();
        graph.add_edge(0, 1).unwrap();
        graph.compute_mst();

        assert!(graph.add_vertex(1.0, 1.0).is_err());
        assert_eq!(graph.add_edge(1, 0), Err(ConnectError::DuplicateEdge(1, 0)));
        assert_eq!(graph.add_edge(0, 0), Err(ConnectError::SelfLoop(0)));
        assert!(graph.cached_mst().is_some());
    }

    #[test]
    fn shared_graph_maps_errors() {
        let shared = SharedSiteGraph::new(SiteGraph::new());
        shared.add_vertex(0.0, 0.0).unwrap();
        assert!(matches!(
            shared.add_vertex(5.0, 0.0),
            Err(GraphError::Placement(PlacementError::TooClose { nearest: 0, .. }))
        ));
        assert_eq!(
            shared.add_edge(0, 3),
            Err(GraphError::Connect(ConnectError::InvalidIndex {
                a: 0,
                b: 3,
                vertex_count: 1
            }))
        );
    }

    #[test]
    fn shared_graph_serialises_writers() {
        let shared = SharedSiteGraph::new(SiteGraph::new());
        let handles: Vec<_> = (0..4)
            .map(|row| {
                let shared = shared.clone();
                std::thread::spawn(move || {
                    for column in 0..10 {
                        shared
                            .add_vertex(column as f64 * 40.0, row as f64 * 40.0)
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let vertices = shared.list_vertices().unwrap();
        assert_eq!(vertices.len(), 40);
        for (index, vertex) in vertices.iter().enumerate() {
            assert_eq!(vertex.id, index);
        }

        for id in 1..40 {
            shared.add_edge(id - 1, id).unwrap();
        }
        let forest = shared.compute_mst().unwrap();
        assert_eq!(forest.len(), 39);
        assert_eq!(shared.cached_mst().unwrap(), Some(forest));
        assert!(shared.edge_exists(5, 4).unwrap());

        shared.reset().unwrap();
        assert!(shared.list_edges().unwrap().is_empty());
    }
    /// A solver that is neither `Clone` nor `Debug`.
    struct LockedSolver {
        calls: std::sync::atomic::AtomicUsize,
    }

    impl SpanningSolver for LockedSolver {
        fn solve(&self, vertex_count: usize, edges: &[Edge]) -> SpanningForest {
            self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            KruskalSolver.solve(vertex_count, edges)
        }
    }

    #[test]
    fn shared_handle_clones_without_cloning_the_solver() {
        let solver = LockedSolver {
            calls: std::sync::atomic::AtomicUsize::new(0),
        };
        let graph = SiteGraph::with_solver(GraphConfig::default(), solver);
        let shared = SharedSiteGraph::new(graph);
        let other = shared.clone();

        other.add_vertex(0.0, 0.0).unwrap();
        other.add_vertex(40.0, 0.0).unwrap();
        other.add_edge(0, 1).unwrap();
        assert_eq!(shared.compute_mst().unwrap().total_weight(), 40);
        assert_eq!(other.cached_mst().unwrap().map(|forest| forest.len()), Some(1));
    }
}
