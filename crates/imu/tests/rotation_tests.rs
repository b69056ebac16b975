use {
    approx::assert_relative_eq,
    base::{Mat3, Vec3},
    imu::{GeometricModel, apply, rotation_matrix},
};

const ANGLES: [(f64, f64, f64); 6] = [
    (0.0, 0.0, 0.0),
    (30.0, 0.0, 0.0),
    (0.0, -45.0, 0.0),
    (0.0, 0.0, 270.0),
    (12.5, 67.0, -133.0),
    (-720.0, 359.9, 0.001),
];

#[test]
fn test_zero_angles_leave_model_unchanged() {
    let model = GeometricModel::cube();
    let rotated = apply(&model, rotation_matrix(0.0, 0.0, 0.0));
    assert_eq!(rotated, model.vertices);
}

#[test]
fn test_rotation_is_orthogonal() {
    for (r, p, y) in ANGLES {
        let m = rotation_matrix(r, p, y);
        let should_be_identity = m * m.transpose();
        assert!(
            should_be_identity.max_abs_diff(Mat3::identity()) < 1e-12,
            "not orthogonal for ({r}, {p}, {y})"
        );
        assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-12);
        let inverse = m.inverse().unwrap();
        assert!(inverse.max_abs_diff(m.transpose()) < 1e-12);
    }
}

#[test]
fn test_yaw_rotates_x_axis_onto_y() {
    let v = rotation_matrix(0.0, 0.0, 90.0) * Vec3::new(1.0, 0.0, 0.0);
    assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(v.y, 1.0, epsilon = 1e-12);
    assert_relative_eq!(v.z, 0.0, epsilon = 1e-12);
}

#[test]
fn test_roll_rotates_y_axis_onto_z() {
    let v = rotation_matrix(90.0, 0.0, 0.0) * Vec3::new(0.0, 1.0, 0.0);
    assert_relative_eq!(v.z, 1.0, epsilon = 1e-12);
    assert_relative_eq!(v.y, 0.0, epsilon = 1e-12);
}

#[test]
fn test_pitch_rotates_z_axis_onto_x() {
    let v = rotation_matrix(0.0, 90.0, 0.0) * Vec3::new(0.0, 0.0, 1.0);
    assert_relative_eq!(v.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(v.z, 0.0, epsilon = 1e-12);
}

#[test]
fn test_composition_order_is_yaw_pitch_roll() {
    // roll first, then pitch, then yaw
    let v = Vec3::new(0.0, 1.0, 0.0);
    let composed = rotation_matrix(90.0, 0.0, 90.0) * v;
    let stepwise = rotation_matrix(0.0, 0.0, 90.0) * (rotation_matrix(90.0, 0.0, 0.0) * v);
    assert_relative_eq!(composed.x, stepwise.x, epsilon = 1e-12);
    assert_relative_eq!(composed.y, stepwise.y, epsilon = 1e-12);
    assert_relative_eq!(composed.z, stepwise.z, epsilon = 1e-12);
}

#[test]
fn test_apply_preserves_vertex_distances() {
    let model = GeometricModel::cube();
    let rotated = apply(&model, rotation_matrix(12.5, 67.0, -133.0));
    for (before, after) in model.vertices.iter().zip(rotated.iter()) {
        assert_relative_eq!(before.length(), after.length(), epsilon = 1e-12);
    }
    let edge = (rotated[0] - rotated[1]).length();
    assert_relative_eq!(edge, 2.0, epsilon = 1e-12);
}

#[test]
fn test_rotation_is_deterministic() {
    assert_eq!(
        rotation_matrix(1.0, 2.0, 3.0),
        rotation_matrix(1.0, 2.0, 3.0)
    );
}

#[test]
fn test_cube_faces_reference_valid_vertices() {
    let model = GeometricModel::cube();
    for face in 0..6 {
        let points = model.face_points(face, &model.vertices);
        // every face is a square of side 2 lying in one axis plane
        let shared_axis = [0, 1, 2].into_iter().any(|axis| {
            let coord = |v: Vec3<f64>| [v.x, v.y, v.z][axis];
            points.iter().all(|&p| coord(p) == coord(points[0]))
        });
        assert!(shared_axis, "face {face} is not planar on an axis");
    }
}
