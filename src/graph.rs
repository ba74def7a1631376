mod edge_set;
mod vertex_set;

pub use edge_set::EdgeSet;
pub use vertex_set::VertexSet;

/// A site placed on the plane.
///
/// Vertices are immutable once created; ids are handed out sequentially by
/// [`VertexSet`] and never reused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub id: usize,
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    /// Squared Euclidean distance to the point `(x, y)`.
    pub fn squared_distance_to(&self, x: f64, y: f64) -> f64 {
        let dx = self.x - x;
        let dy = self.y - y;
        dx * dx + dy * dy
    }

    pub fn distance_to(&self, other: &Vertex) -> f64 {
        self.squared_distance_to(other.x, other.y).sqrt()
    }
}

/// An undirected weighted link between two vertices.
///
/// Endpoints are stored in canonical order, `a < b`. The weight is the Euclidean
/// distance between the endpoints rounded to the nearest integer, fixed when the
/// edge is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub weight: u64,
}

impl Edge {
    pub(crate) fn between(first: &Vertex, second: &Vertex) -> Edge {
        let (a, b) = canonical_pair(first.id, second.id);
        Edge {
            a,
            b,
            weight: first.distance_to(second).round() as u64,
        }
    }

    pub fn endpoints(&self) -> (usize, usize) {
        (self.a, self.b)
    }
}

/// Orders an unordered pair of ids with the lower id first.
pub(crate) fn canonical_pair(x: usize, y: usize) -> (usize, usize) {
    if x <= y {
        (x, y)
    } else {
        (y, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_between_is_canonical_and_rounded() {
        let first = Vertex { id: 4, x: 0.0, y: 0.0 };
        let second = Vertex { id: 1, x: 10.0, y: 10.0 };
        let edge = Edge::between(&first, &second);
        assert_eq!(edge.endpoints(), (1, 4));
        assert_eq!(edge.weight, 14);
    }

    #[test]
    fn half_distances_round_away_from_zero() {
        let first = Vertex { id: 0, x: 0.0, y: 0.0 };
        let second = Vertex { id: 1, x: 30.5, y: 0.0 };
        assert_eq!(Edge::between(&first, &second).weight, 31);
    }
}
