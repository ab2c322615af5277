/// Perspective projection of homogeneous vertex lists
use nalgebra::Matrix4;

use crate::geometry::Coordinate;
use crate::transform;

/// Perspective projection parameters
///
/// `aspect` is (right - left) / (top - bottom), `fov` is the vertical
/// field of view in radians. `far == near` makes the depth terms divide
/// by zero and is rejected at construction.
#[derive(Debug, Clone, Copy)]
pub struct Perspective {
    pub aspect: f64,
    pub fov: f64,
    pub far: f64,
    pub near: f64,
}

impl Perspective {
    pub fn new(aspect: f64, fov: f64, far: f64, near: f64) -> Self {
        assert!(
            far != near,
            "perspective projection requires far != near (got {})",
            far
        );
        Self {
            aspect,
            fov,
            far,
            near,
        }
    }

    /// Build the projection matrix.
    ///
    /// The matrix is built on an identity base, so the bottom-right cell
    /// stays 1 and w picks up a +1 term on top of the -z depth.
    pub fn matrix(&self) -> Matrix4<f64> {
        let mut m = Matrix4::identity();
        let focal = 1.0 / (self.fov / 2.0).tan();

        m[(0, 0)] = focal / self.aspect;
        m[(1, 1)] = focal;
        m[(2, 2)] = -(self.far + self.near) / (self.far - self.near);
        m[(2, 3)] = -(2.0 * self.far * self.near) / (self.far - self.near);
        m[(3, 2)] = -1.0;
        m
    }

    /// Project a vertex list, normalizing each result
    pub fn project(&self, vertices: &[Coordinate]) -> Vec<Coordinate> {
        transform::apply_vertices(&self.matrix(), vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_matrix_cells() {
        let p = Perspective::new(2.0, PI / 2.0, 10.0, 1.0);
        let m = p.matrix();
        // tan(fov/2) = 1 for a 90 degree field of view
        assert_relative_eq!(m[(0, 0)], 0.5, epsilon = 1e-12);
        assert_relative_eq!(m[(1, 1)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(m[(2, 2)], -11.0 / 9.0, epsilon = 1e-12);
        assert_relative_eq!(m[(2, 3)], -20.0 / 9.0, epsilon = 1e-12);
        assert_relative_eq!(m[(3, 2)], -1.0);
        assert_relative_eq!(m[(3, 3)], 1.0);
    }

    #[test]
    #[should_panic(expected = "far != near")]
    fn test_equal_planes_fail_fast() {
        Perspective::new(1.0, PI / 4.0, 1.0, 1.0);
    }

    #[test]
    fn test_project_normalizes() {
        let p = Perspective::new(1.0, PI / 2.0, 10.0, 1.0);
        let out = p.project(&[Coordinate::position(1.0, 1.0, -4.0)]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].w, 1.0);
        // w' = -z + 1 = 5, x' = x / w'
        assert_relative_eq!(out[0].x, 1.0 / 5.0, epsilon = 1e-12);
    }
}
