use super::Vertex;
use crate::error::PlacementError;
use crate::DEFAULT_MIN_SEPARATION;

/// Stores the sites of the graph and enforces their minimum pairwise separation.
///
/// Ids are assigned sequentially from zero in insertion order. There is no way to
/// move or delete a single vertex; [`VertexSet::clear`] drops all of them.
///
/// # Example
///
/// ```
/// use site_mst::graph::VertexSet;
///
/// let mut vertices = VertexSet::new(30.0);
/// assert_eq!(vertices.insert(0.0, 0.0), Ok(0));
/// assert!(vertices.insert(10.0, 0.0).is_err());
/// assert_eq!(vertices.insert(30.0, 0.0), Ok(1));
/// ```
#[derive(Debug, Clone)]
pub struct VertexSet {
    vertices: Vec<Vertex>,
    min_separation: f64,
}

impl Default for VertexSet {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SEPARATION)
    }
}

impl VertexSet {
    /// Creates an empty set rejecting sites closer than `min_separation` to each other.
    ///
    /// # Arguments
    ///
    /// * `min_separation` - Minimum distance between two sites. `0.0` disables the check;
    ///   negative values are treated as `0.0`.
    ///
    /// # Returns
    ///
    /// An empty `VertexSet`.
    pub fn new(min_separation: f64) -> VertexSet {
        VertexSet {
            vertices: Vec::new(),
            min_separation: min_separation.max(0.0),
        }
    }

    pub fn min_separation(&self) -> f64 {
        self.min_separation
    }

    /// Adds a site at `(x, y)`.
    ///
    /// # Arguments
    ///
    /// * `x`, `y` - Finite coordinates of the new site.
    ///
    /// # Returns
    ///
    /// The id of the new site, one past the previous highest id.
    ///
    /// Fails with [`PlacementError::TooClose`] if any existing site lies strictly
    /// closer than the minimum separation. A site exactly at the threshold is accepted.
    pub fn insert(&mut self, x: f64, y: f64) -> Result<usize, PlacementError> {
        let limit = self.min_separation * self.min_separation;
        if let Some(blocker) = self
            .vertices
            .iter()
            .find(|vertex| vertex.squared_distance_to(x, y) < limit)
        {
            return Err(PlacementError::TooClose {
                nearest: blocker.id,
                distance: blocker.squared_distance_to(x, y).sqrt(),
                min_separation: self.min_separation,
            });
        }

        let id = self.vertices.len();
        self.vertices.push(Vertex { id, x, y });
        Ok(id)
    }

    /// Number of sites placed so far.
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertex with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a vertex of this set.
    pub fn get(&self, id: usize) -> &Vertex {
        assert!(
            id < self.vertices.len(),
            "vertex id {id} out of range 0..{}",
            self.vertices.len()
        );
        &self.vertices[id]
    }

    /// Returns the vertex with the given id, or `None` if there is no such vertex.
    pub fn try_get(&self, id: usize) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Iterates over the sites in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.iter()
    }

    pub fn as_slice(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Finds the site closest to `(x, y)` and its distance, or `None` for an empty set.
    ///
    /// Ties go to the lower id.
    pub fn nearest(&self, x: f64, y: f64) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for vertex in &self.vertices {
            let squared = vertex.squared_distance_to(x, y);
            match best {
                Some((_, best_squared)) if best_squared <= squared => {}
                _ => best = Some((vertex.id, squared)),
            }
        }
        best.map(|(id, squared)| (id, squared.sqrt()))
    }

    /// Removes every site; ids restart from zero.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        let mut vertices = VertexSet::default();
        assert_eq!(vertices.insert(0.0, 0.0), Ok(0));
        assert_eq!(vertices.insert(100.0, 0.0), Ok(1));
        assert_eq!(vertices.insert(0.0, 100.0), Ok(2));
        assert_eq!(vertices.size(), 3);
        assert_eq!(vertices.get(1).x, 100.0);
    }

    #[test]
    fn site_exactly_at_threshold_is_accepted() {
        let mut vertices = VertexSet::default();
        vertices.insert(0.0, 0.0).unwrap();
        assert_eq!(vertices.insert(30.0, 0.0), Ok(1));
        assert_eq!(vertices.insert(0.0, -30.0), Ok(2));
    }

    #[test]
    fn site_just_inside_threshold_is_rejected() {
        let mut vertices = VertexSet::default();
        vertices.insert(0.0, 0.0).unwrap();
        match vertices.insert(29.999, 0.0) {
            Err(PlacementError::TooClose {
                nearest,
                distance,
                min_separation,
            }) => {
                assert_eq!(nearest, 0);
                assert!((distance - 29.999).abs() < 1e-9);
                assert_eq!(min_separation, 30.0);
            }
            other => panic!("expected TooClose, got {other:?}"),
        }
        assert_eq!(vertices.size(), 1);
    }

    #[test]
    fn rejection_checks_every_existing_site() {
        let mut vertices = VertexSet::default();
        vertices.insert(0.0, 0.0).unwrap();
        vertices.insert(200.0, 0.0).unwrap();
        assert!(vertices.insert(190.0, 5.0).is_err());
        assert_eq!(vertices.size(), 2);
        // A rejected insert does not consume an id.
        assert_eq!(vertices.insert(100.0, 0.0), Ok(2));
    }

    #[test]
    fn zero_separation_accepts_coincident_sites() {
        let mut vertices = VertexSet::new(0.0);
        vertices.insert(1.0, 1.0).unwrap();
        assert_eq!(vertices.insert(1.0, 1.0), Ok(1));
    }

    #[test]
    fn nearest_prefers_closest_then_lowest_id() {
        let mut vertices = VertexSet::default();
        assert_eq!(vertices.nearest(0.0, 0.0), None);
        vertices.insert(0.0, 0.0).unwrap();
        vertices.insert(100.0, 0.0).unwrap();
        vertices.insert(50.0, 40.0).unwrap();

        let (id, distance) = vertices.nearest(90.0, 0.0).unwrap();
        assert_eq!(id, 1);
        assert!((distance - 10.0).abs() < 1e-9);

        assert_eq!(vertices.nearest(50.0, 0.0).map(|(id, _)| id), Some(2));

        // (50, -40) is 64 away from both 0 and 1, and 80 away from 2.
        let (id, distance) = vertices.nearest(50.0, -40.0).unwrap();
        assert_eq!(id, 0);
        assert!((distance - 4100f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn negative_separation_disables_the_check() {
        let mut vertices = VertexSet::new(-30.0);
        assert_eq!(vertices.min_separation(), 0.0);
        vertices.insert(0.0, 0.0).unwrap();
        assert_eq!(vertices.insert(5.0, 0.0), Ok(1));
    }

    #[test]
    fn clear_restarts_ids() {
        let mut vertices = VertexSet::default();
        vertices.insert(0.0, 0.0).unwrap();
        vertices.insert(50.0, 0.0).unwrap();
        vertices.clear();
        assert!(vertices.is_empty());
        assert_eq!(vertices.insert(0.0, 0.0), Ok(0));
    }

    #[test]
    fn try_get_is_none_out_of_range() {
        let vertices = VertexSet::default();
        assert!(vertices.try_get(0).is_none());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn get_out_of_range_panics() {
        let mut vertices = VertexSet::default();
        vertices.insert(0.0, 0.0).unwrap();
        vertices.get(1);
    }
}
