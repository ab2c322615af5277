/// Homogeneous transformation matrices and their application to point lists
use nalgebra::{Matrix3, Matrix4, Vector2, Vector3, Vector4};

use crate::geometry::{Coordinate, Point2};

/// Builders for 3x3 homogeneous transforms of the plane
///
/// Every constructor starts from the identity and overwrites only the
/// cells the operation needs; matrices are fresh values, never shared.
pub struct Transform2;

impl Transform2 {
    /// Translation by (tx, ty)
    pub fn translation(tx: f64, ty: f64) -> Matrix3<f64> {
        Matrix3::new_translation(&Vector2::new(tx, ty))
    }

    /// Non-uniform scaling by (sx, sy)
    pub fn scaling(sx: f64, sy: f64) -> Matrix3<f64> {
        Matrix3::new_nonuniform_scaling(&Vector2::new(sx, sy))
    }

    /// Counter-clockwise rotation by `angle` radians
    pub fn rotation(angle: f64) -> Matrix3<f64> {
        Matrix3::new_rotation(angle)
    }

    /// Shear: x' = x + e*y, y' = f*x + y
    pub fn shearing(e: f64, f: f64) -> Matrix3<f64> {
        let mut matrix = Matrix3::identity();
        matrix[(0, 1)] = e;
        matrix[(1, 0)] = f;
        matrix
    }
}

/// Builders for 4x4 homogeneous transforms of 3D space
pub struct Transform3;

impl Transform3 {
    /// Translation by (tx, ty, tz)
    pub fn translation(tx: f64, ty: f64, tz: f64) -> Matrix4<f64> {
        Matrix4::new_translation(&Vector3::new(tx, ty, tz))
    }

    /// Non-uniform scaling by (sx, sy, sz)
    pub fn scaling(sx: f64, sy: f64, sz: f64) -> Matrix4<f64> {
        Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz))
    }

    /// Shear of x and y against z: x' = x + hx*z, y' = y + hy*z
    pub fn shearing(hx: f64, hy: f64) -> Matrix4<f64> {
        let mut matrix = Matrix4::identity();
        matrix[(0, 2)] = hx;
        matrix[(1, 2)] = hy;
        matrix
    }

    /// Right-handed rotation about the x axis, `angle` in radians
    pub fn rotation_x(angle: f64) -> Matrix4<f64> {
        Matrix4::new_rotation(Vector3::new(angle, 0.0, 0.0))
    }

    /// Right-handed rotation about the y axis, `angle` in radians
    pub fn rotation_y(angle: f64) -> Matrix4<f64> {
        Matrix4::new_rotation(Vector3::new(0.0, angle, 0.0))
    }

    /// Right-handed rotation about the z axis, `angle` in radians
    pub fn rotation_z(angle: f64) -> Matrix4<f64> {
        Matrix4::new_rotation(Vector3::new(0.0, 0.0, angle))
    }

    /// Rotation matrix from a unit quaternion.
    ///
    /// The caller supplies a normalized quaternion; the components are
    /// used as-is.
    pub fn from_quaternion(w: f64, x: f64, y: f64, z: f64) -> Matrix4<f64> {
        let mut m = Matrix4::identity();

        m[(0, 0)] = w * w + x * x - y * y - z * z;
        m[(0, 1)] = 2.0 * x * y - 2.0 * w * z;
        m[(0, 2)] = 2.0 * x * z + 2.0 * w * y;

        m[(1, 0)] = 2.0 * x * y + 2.0 * w * z;
        m[(1, 1)] = w * w - x * x + y * y - z * z;
        m[(1, 2)] = 2.0 * y * z - 2.0 * w * x;

        m[(2, 0)] = 2.0 * x * z - 2.0 * w * y;
        m[(2, 1)] = 2.0 * y * z + 2.0 * w * x;
        m[(2, 2)] = w * w - x * x - y * y + z * z;

        m
    }
}

/// Apply a 3x3 homogeneous matrix to a single 2D point.
///
/// The point is padded to (x, y, 1) for the product.
pub fn apply_point(matrix: &Matrix3<f64>, point: Point2) -> Point2 {
    let v = matrix * Vector3::new(point.x, point.y, 1.0);
    Point2::new(v.x, v.y)
}

/// Apply a 3x3 homogeneous matrix to every point in a list.
///
/// Order and length are preserved exactly.
pub fn apply_points(matrix: &Matrix3<f64>, points: &[Point2]) -> Vec<Point2> {
    points.iter().map(|&p| apply_point(matrix, p)).collect()
}

/// Apply a 4x4 homogeneous matrix to a single vertex and normalize.
///
/// The divide by w runs after every transform, affine ones included, so
/// projective matrices need no special casing downstream.
pub fn apply_vertex(matrix: &Matrix4<f64>, vertex: Coordinate) -> Coordinate {
    Coordinate::from(matrix * Vector4::from(vertex)).normalized()
}

/// Apply a 4x4 homogeneous matrix to every vertex in a list.
///
/// Order and length are preserved exactly.
pub fn apply_vertices(matrix: &Matrix4<f64>, vertices: &[Coordinate]) -> Vec<Coordinate> {
    vertices.iter().map(|&v| apply_vertex(matrix, v)).collect()
}

// ---------------------------------------------------------------------
// Named list-level operations. Composite transforms are built by chaining
// these in caller order; there is no matrix-product shortcut, so the
// effective transform depends on the exact call sequence.
// ---------------------------------------------------------------------

pub fn translate_points(points: &[Point2], tx: f64, ty: f64) -> Vec<Point2> {
    apply_points(&Transform2::translation(tx, ty), points)
}

pub fn scale_points(points: &[Point2], sx: f64, sy: f64) -> Vec<Point2> {
    apply_points(&Transform2::scaling(sx, sy), points)
}

pub fn rotate_points(points: &[Point2], angle: f64) -> Vec<Point2> {
    apply_points(&Transform2::rotation(angle), points)
}

pub fn shear_points(points: &[Point2], e: f64, f: f64) -> Vec<Point2> {
    apply_points(&Transform2::shearing(e, f), points)
}

pub fn translate(vertices: &[Coordinate], tx: f64, ty: f64, tz: f64) -> Vec<Coordinate> {
    apply_vertices(&Transform3::translation(tx, ty, tz), vertices)
}

pub fn scale(vertices: &[Coordinate], sx: f64, sy: f64, sz: f64) -> Vec<Coordinate> {
    apply_vertices(&Transform3::scaling(sx, sy, sz), vertices)
}

pub fn shear(vertices: &[Coordinate], hx: f64, hy: f64) -> Vec<Coordinate> {
    apply_vertices(&Transform3::shearing(hx, hy), vertices)
}

pub fn rotate_x(vertices: &[Coordinate], angle: f64) -> Vec<Coordinate> {
    apply_vertices(&Transform3::rotation_x(angle), vertices)
}

pub fn rotate_y(vertices: &[Coordinate], angle: f64) -> Vec<Coordinate> {
    apply_vertices(&Transform3::rotation_y(angle), vertices)
}

pub fn rotate_z(vertices: &[Coordinate], angle: f64) -> Vec<Coordinate> {
    apply_vertices(&Transform3::rotation_z(angle), vertices)
}
