use {
    crate::Vec3,
    std::ops::{Add, Mul, Neg, Sub},
};

/// Column-major 3x3 matrix. Used both as a 3D rotation and as a 2D
/// projective transform over homogeneous coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3<T> {
    pub cols: [Vec3<T>; 3],
}

impl<T> Mat3<T> {
    pub fn from_cols(c0: Vec3<T>, c1: Vec3<T>, c2: Vec3<T>) -> Self {
        Self { cols: [c0, c1, c2] }
    }
}

impl<T: Copy> Mat3<T> {
    /// Build from row-major literals, which is how rotation and
    /// homography matrices are usually written down.
    pub fn from_rows(rows: [[T; 3]; 3]) -> Self {
        Self::from_cols(
            Vec3::new(rows[0][0], rows[1][0], rows[2][0]),
            Vec3::new(rows[0][1], rows[1][1], rows[2][1]),
            Vec3::new(rows[0][2], rows[1][2], rows[2][2]),
        )
    }

    pub fn to_rows(self) -> [[T; 3]; 3] {
        let [c0, c1, c2] = self.cols;
        [[c0.x, c1.x, c2.x], [c0.y, c1.y, c2.y], [c0.z, c1.z, c2.z]]
    }

    pub fn transpose(self) -> Self {
        let [c0, c1, c2] = self.cols;
        Self::from_cols(
            Vec3::new(c0.x, c1.x, c2.x),
            Vec3::new(c0.y, c1.y, c2.y),
            Vec3::new(c0.z, c1.z, c2.z),
        )
    }
}

impl Mat3<f64> {
    pub fn identity() -> Self {
        Self::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Inverse via the adjugate; `None` when the matrix is singular.
    pub fn inverse(self) -> Option<Self> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < 1e-12 {
            return None;
        }
        Some(self.cofactors().transpose() * (1.0 / det))
    }

    /// Largest absolute element-wise difference, for tolerance checks.
    pub fn max_abs_diff(self, other: Self) -> f64 {
        let a = self.to_rows();
        let b = other.to_rows();
        let mut max = 0.0f64;
        for r in 0..3 {
            for c in 0..3 {
                max = max.max((a[r][c] - b[r][c]).abs());
            }
        }
        max
    }
}

impl<T: Mul<Output = T> + Sub<Output = T> + Add<Output = T> + Copy> Mat3<T> {
    pub fn determinant(self) -> T {
        let [c0, c1, c2] = self.cols;
        c0.x * (c1.y * c2.z - c1.z * c2.y) - c1.x * (c0.y * c2.z - c0.z * c2.y)
            + c2.x * (c0.y * c1.z - c0.z * c1.y)
    }
}

impl<T: Mul<Output = T> + Sub<Output = T> + Neg<Output = T> + Copy> Mat3<T> {
    fn cofactors(self) -> Self {
        let [c0, c1, c2] = self.cols;
        Self::from_cols(
            Vec3::new(
                c1.y * c2.z - c1.z * c2.y,
                -(c1.x * c2.z - c1.z * c2.x),
                c1.x * c2.y - c1.y * c2.x,
            ),
            Vec3::new(
                -(c0.y * c2.z - c0.z * c2.y),
                c0.x * c2.z - c0.z * c2.x,
                -(c0.x * c2.y - c0.y * c2.x),
            ),
            Vec3::new(
                c0.y * c1.z - c0.z * c1.y,
                -(c0.x * c1.z - c0.z * c1.x),
                c0.x * c1.y - c0.y * c1.x,
            ),
        )
    }
}

impl<T: Mul<Output = T> + Copy> Mul<T> for Mat3<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self {
            cols: [self.cols[0] * rhs, self.cols[1] * rhs, self.cols[2] * rhs],
        }
    }
}

// Mat3 * Vec3
impl<T: Mul<Output = T> + Add<Output = T> + Copy> Mul<Vec3<T>> for Mat3<T> {
    type Output = Vec3<T>;
    fn mul(self, v: Vec3<T>) -> Vec3<T> {
        self.cols[0] * v.x + self.cols[1] * v.y + self.cols[2] * v.z
    }
}

// Mat3 * Mat3
impl<T: Mul<Output = T> + Add<Output = T> + Copy> Mul<Mat3<T>> for Mat3<T> {
    type Output = Self;
    fn mul(self, rhs: Mat3<T>) -> Self {
        Self::from_cols(self * rhs.cols[0], self * rhs.cols[1], self * rhs.cols[2])
    }
}
