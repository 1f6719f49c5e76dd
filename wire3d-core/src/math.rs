/// Homogeneous 4x4 transform builders and products
///
/// Matrices are addressed row-major: `m[(i, j)]` is row `i`, column `j`, which
/// is flat index `i * 4 + j` of [`row_major`]. Composition follows the usual
/// column-vector convention, so `multiply(a, b)` applied to a point means
/// "apply `b`, then `a`".
use nalgebra::{Matrix4, Point3, Rotation3, Vector3, Vector4};

/// Transform a 3D point as `m * [x, y, z, 1]`
pub fn transform_point(m: &Matrix4<f32>, p: &Point3<f32>) -> Vector4<f32> {
    m * p.to_homogeneous()
}

/// Transform an already homogeneous 4-vector
pub fn transform_vector(m: &Matrix4<f32>, v: &Vector4<f32>) -> Vector4<f32> {
    m * v
}

/// Right-handed rotation about the Y axis
pub fn rotation_y(angle_degrees: f32) -> Matrix4<f32> {
    Rotation3::from_axis_angle(&Vector3::y_axis(), angle_degrees.to_radians()).to_homogeneous()
}

/// Right-handed rotation about the X axis
pub fn rotation_x(angle_degrees: f32) -> Matrix4<f32> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), angle_degrees.to_radians()).to_homogeneous()
}

/// Translation with the offset stored in the last column
pub fn translation(x: f32, y: f32, z: f32) -> Matrix4<f32> {
    Matrix4::new_translation(&Vector3::new(x, y, z))
}

/// Standard 4x4 product, `result[i][j] = sum_k a[i][k] * b[k][j]`
pub fn multiply(a: &Matrix4<f32>, b: &Matrix4<f32>) -> Matrix4<f32> {
    a * b
}

/// OpenGL-style perspective projection with `f = 1 / tan(fov / 2)`
///
/// Maps camera-space `z` in `[-near, -far]` to NDC `[-1, 1]` and stores `-z`
/// in `w` for the perspective divide.
pub fn perspective(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Matrix4<f32> {
    let f = 1.0 / (fov_degrees.to_radians() / 2.0).tan();
    #[rustfmt::skip]
    let m = Matrix4::new(
        f / aspect, 0.0, 0.0, 0.0,
        0.0, f, 0.0, 0.0,
        0.0, 0.0, (far + near) / (near - far), (2.0 * far * near) / (near - far),
        0.0, 0.0, -1.0, 0.0,
    );
    m
}

/// Flatten into 16 row-major components
pub fn row_major(m: &Matrix4<f32>) -> [f32; 16] {
    let mut out = [0.0; 16];
    for i in 0..4 {
        for j in 0..4 {
            out[i * 4 + j] = m[(i, j)];
        }
    }
    out
}
