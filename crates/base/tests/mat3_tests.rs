use {
    approx::assert_relative_eq,
    base::{Mat3, Vec3},
};

fn sample() -> Mat3<f64> {
    Mat3::from_rows([[2.0, 0.0, 1.0], [1.0, 3.0, 0.0], [0.0, 1.0, 4.0]])
}

#[test]
fn test_from_rows_is_column_major() {
    let m = sample();
    assert_eq!(m.cols[0], Vec3::new(2.0, 1.0, 0.0));
    assert_eq!(m.cols[2], Vec3::new(1.0, 0.0, 4.0));
    assert_eq!(m.to_rows()[1], [1.0, 3.0, 0.0]);
}

#[test]
fn test_mul_vec3_uses_rows() {
    let v = sample() * Vec3::new(1.0, 1.0, 1.0);
    assert_eq!(v, Vec3::new(3.0, 4.0, 5.0));
}

#[test]
fn test_transpose_twice_is_identity_op() {
    let m = sample();
    assert_eq!(m.transpose().transpose(), m);
    assert_eq!(m.transpose().to_rows()[0], [2.0, 1.0, 0.0]);
}

#[test]
fn test_determinant() {
    assert_relative_eq!(sample().determinant(), 25.0);
    assert_relative_eq!(Mat3::<f64>::identity().determinant(), 1.0);
}

#[test]
fn test_inverse_round_trips_to_identity() {
    let m = sample();
    let inv = m.inverse().unwrap();
    assert!((m * inv).max_abs_diff(Mat3::identity()) < 1e-12);
    assert!((inv * m).max_abs_diff(Mat3::identity()) < 1e-12);
}

#[test]
fn test_inverse_of_singular_is_none() {
    let m = Mat3::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]]);
    assert!(m.inverse().is_none());
}

#[test]
fn test_mul_scalar() {
    let m = Mat3::<f64>::identity() * 3.0;
    assert_eq!(m.to_rows()[1], [0.0, 3.0, 0.0]);
}
