use base::{Mat3, Vec2, Vec3};

// below this a pivot or homogeneous weight counts as zero
const EPSILON: f64 = 1e-10;

/// Projective map of the plane, `p' ~ H * (x, y, 1)`, with `H[2][2] = 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveTransform {
    matrix: Mat3<f64>,
}

impl PerspectiveTransform {
    pub fn from_matrix(matrix: Mat3<f64>) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> Mat3<f64> {
        self.matrix
    }

    /// The transform taking each `src[i]` to `dst[i]`.
    ///
    /// `None` when the correspondence has no unique solution, for example
    /// when three of the source points are collinear or two coincide.
    pub fn from_quads(src: [Vec2<f64>; 4], dst: [Vec2<f64>; 4]) -> Option<Self> {
        let mut a = [[0.0f64; 9]; 8];
        for (i, (s, d)) in src.iter().zip(dst.iter()).enumerate() {
            a[2 * i] = [s.x, s.y, 1.0, 0.0, 0.0, 0.0, -s.x * d.x, -s.y * d.x, d.x];
            a[2 * i + 1] = [0.0, 0.0, 0.0, s.x, s.y, 1.0, -s.x * d.y, -s.y * d.y, d.y];
        }
        let h = solve(a)?;
        let matrix = Mat3::from_rows([[h[0], h[1], h[2]], [h[3], h[4], h[5]], [h[6], h[7], 1.0]]);
        Some(Self { matrix })
    }

    /// The transform taking `quad` (top-left, bottom-left, top-right,
    /// bottom-right) onto the corners of a `size` rectangle.
    pub fn to_rectangle(quad: [Vec2<f64>; 4], size: Vec2<usize>) -> Option<Self> {
        let (w, h) = (size.x as f64, size.y as f64);
        let dst = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, h),
            Vec2::new(w, 0.0),
            Vec2::new(w, h),
        ];
        Self::from_quads(quad, dst)
    }

    /// Where `point` lands, or `None` if it maps to infinity.
    pub fn map_point(&self, point: Vec2<f64>) -> Option<Vec2<f64>> {
        let p = self.matrix * Vec3::new(point.x, point.y, 1.0);
        if p.z.abs() < EPSILON || !p.z.is_finite() {
            return None;
        }
        Some(Vec2::new(p.x / p.z, p.y / p.z))
    }

    pub fn inverse(&self) -> Option<Self> {
        self.matrix.inverse().map(|matrix| Self { matrix })
    }
}

// Gauss-Jordan with partial pivoting on an augmented 8x9 system.
fn solve(mut a: [[f64; 9]; 8]) -> Option<[f64; 8]> {
    for col in 0..8 {
        let pivot = (col..8).max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))?;
        if !(a[pivot][col].abs() >= EPSILON) {
            return None;
        }
        a.swap(col, pivot);
        let p = a[col][col];
        for k in col..9 {
            a[col][k] /= p;
        }
        for row in 0..8 {
            if row != col {
                let factor = a[row][col];
                if factor != 0.0 {
                    for k in col..9 {
                        a[row][k] -= factor * a[col][k];
                    }
                }
            }
        }
    }
    let solution: [f64; 8] = std::array::from_fn(|i| a[i][8]);
    solution.iter().all(|v| v.is_finite()).then_some(solution)
}
