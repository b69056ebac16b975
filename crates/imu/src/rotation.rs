use {
    crate::GeometricModel,
    base::{Mat3, Vec3},
};

pub fn rotation_x(angle: f64) -> Mat3<f64> {
    let (s, c) = angle.sin_cos();
    Mat3::from_rows([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
}

pub fn rotation_y(angle: f64) -> Mat3<f64> {
    let (s, c) = angle.sin_cos();
    Mat3::from_rows([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]])
}

pub fn rotation_z(angle: f64) -> Mat3<f64> {
    let (s, c) = angle.sin_cos();
    Mat3::from_rows([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
}

/// `Rz(yaw) * Ry(pitch) * Rx(roll)`, angles in degrees.
pub fn rotation_matrix(roll: f64, pitch: f64, yaw: f64) -> Mat3<f64> {
    rotation_z(yaw.to_radians()) * rotation_y(pitch.to_radians()) * rotation_x(roll.to_radians())
}

/// Rotate every vertex of the model by `rotation`.
pub fn apply(model: &GeometricModel, rotation: Mat3<f64>) -> [Vec3<f64>; 8] {
    model.vertices.map(|v| rotation * v)
}
