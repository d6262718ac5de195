/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type, used for in-face offsets.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// 3D rotation.
pub type Rotation3 = nalgebra::Rotation3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Transforms a point by a 4x4 matrix (homogeneous coordinates).
#[must_use]
pub fn transform_point(matrix: &Matrix4, point: &Point3) -> Point3 {
    let v = matrix * nalgebra::Vector4::new(point.x, point.y, point.z, 1.0);
    Point3::new(v.x, v.y, v.z)
}

/// Transforms a direction vector by a 4x4 matrix (ignoring translation).
#[must_use]
pub fn transform_direction(matrix: &Matrix4, dir: &Vector3) -> Vector3 {
    let v = matrix * nalgebra::Vector4::new(dir.x, dir.y, dir.z, 0.0);
    Vector3::new(v.x, v.y, v.z)
}

/// Returns `value` if it is finite and strictly positive.
#[must_use]
pub fn positive(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}
