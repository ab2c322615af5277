/// Geometry primitives for the 2D and 3D transform pipelines
use nalgebra::Vector4;

/// A 2D point produced by transform calls and consumed by path building
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Homogeneous coordinate in 3D space
///
/// After every transform-and-normalize step w is 1. Normalization divides
/// x, y, z by w; when w is exactly 0 the components are left as they are
/// and w is forced back to 1 (see [`Coordinate::normalized`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// A position in Euclidean space (w = 1)
    pub fn position(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z, w: 1.0 }
    }

    /// Divide x, y, z by w and set w to 1.
    ///
    /// A coordinate with w == 0 has no Euclidean counterpart; the
    /// components are kept unnormalized, w is forced to 1, and a warning
    /// is logged so hosts can observe the degenerate transform.
    pub fn normalized(self) -> Self {
        if self.w == 0.0 {
            log::warn!(
                "homogeneous coordinate ({}, {}, {}) has w = 0, skipping divide",
                self.x,
                self.y,
                self.z
            );
            return Self { w: 1.0, ..self };
        }
        Self {
            x: self.x / self.w,
            y: self.y / self.w,
            z: self.z / self.w,
            w: 1.0,
        }
    }
}

impl From<Coordinate> for Vector4<f64> {
    fn from(c: Coordinate) -> Self {
        Vector4::new(c.x, c.y, c.z, c.w)
    }
}

impl From<Vector4<f64>> for Coordinate {
    fn from(v: Vector4<f64>) -> Self {
        Coordinate::new(v.x, v.y, v.z, v.w)
    }
}

/// A wireframe model: an immutable base vertex set plus edge connectivity
///
/// Edges index into the vertex list; duplicates and repeated endpoints are
/// allowed. The vertex order is significant to callers that index it.
#[derive(Debug, Clone)]
pub struct Wireframe {
    pub vertices: Vec<Coordinate>,
    pub edges: Vec<(usize, usize)>,
}

impl Wireframe {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn add_vertex(&mut self, vertex: Coordinate) {
        self.vertices.push(vertex);
    }

    pub fn add_edge(&mut self, a: usize, b: usize) {
        self.edges.push((a, b));
    }

    /// Create a cube wireframe centered on the origin
    pub fn cube(half: f64) -> Self {
        let mut model = Self::new();

        model.add_vertex(Coordinate::position(-half, -half, -half));
        model.add_vertex(Coordinate::position(-half, -half, half));
        model.add_vertex(Coordinate::position(-half, half, -half));
        model.add_vertex(Coordinate::position(-half, half, half));
        model.add_vertex(Coordinate::position(half, -half, -half));
        model.add_vertex(Coordinate::position(half, -half, half));
        model.add_vertex(Coordinate::position(half, half, -half));
        model.add_vertex(Coordinate::position(half, half, half));

        // Left face ring
        model.add_edge(0, 1);
        model.add_edge(1, 3);
        model.add_edge(3, 2);
        model.add_edge(2, 0);

        // Right face ring
        model.add_edge(4, 5);
        model.add_edge(5, 7);
        model.add_edge(7, 6);
        model.add_edge(6, 4);

        // Connecting edges
        model.add_edge(0, 4);
        model.add_edge(1, 5);
        model.add_edge(2, 6);
        model.add_edge(3, 7);

        model
    }
}

impl Default for Wireframe {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_divides_by_w() {
        let c = Coordinate::new(4.0, 6.0, 8.0, 2.0).normalized();
        assert_relative_eq!(c.x, 2.0);
        assert_relative_eq!(c.y, 3.0);
        assert_relative_eq!(c.z, 4.0);
        assert_eq!(c.w, 1.0);
    }

    #[test]
    fn test_normalize_zero_w_keeps_components() {
        let c = Coordinate::new(3.0, -2.0, 5.0, 0.0).normalized();
        assert_eq!(c.x, 3.0);
        assert_eq!(c.y, -2.0);
        assert_eq!(c.z, 5.0);
        assert_eq!(c.w, 1.0);
    }

    #[test]
    fn test_cube_shape() {
        let cube = Wireframe::cube(1.0);
        assert_eq!(cube.vertices.len(), 8);
        assert_eq!(cube.edges.len(), 12);
        // Every edge joins two distinct corners
        for &(a, b) in &cube.edges {
            assert_ne!(a, b);
            assert!(a < 8 && b < 8);
        }
        // All corners are unit distance from center on each axis
        for v in &cube.vertices {
            assert_eq!(v.x.abs(), 1.0);
            assert_eq!(v.y.abs(), 1.0);
            assert_eq!(v.z.abs(), 1.0);
            assert_eq!(v.w, 1.0);
        }
    }
}
