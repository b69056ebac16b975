use base::Vec3;

/// The cube shown in the 3D view: corners at +-1 on every axis.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometricModel {
    pub vertices: [Vec3<f64>; 8],
    /// Vertex indices of each face, in winding order.
    pub faces: [[usize; 4]; 6],
    /// RGB per face: red, blue, green, cyan, orange, purple.
    pub face_colors: [[u8; 3]; 6],
}

impl GeometricModel {
    pub fn cube() -> Self {
        Self {
            vertices: [
                Vec3::new(-1.0, -1.0, -1.0),
                Vec3::new(1.0, -1.0, -1.0),
                Vec3::new(1.0, 1.0, -1.0),
                Vec3::new(-1.0, 1.0, -1.0),
                Vec3::new(-1.0, -1.0, 1.0),
                Vec3::new(1.0, -1.0, 1.0),
                Vec3::new(1.0, 1.0, 1.0),
                Vec3::new(-1.0, 1.0, 1.0),
            ],
            faces: [
                [0, 1, 2, 3], // bottom
                [4, 5, 6, 7], // top
                [0, 1, 5, 4], // front
                [2, 3, 7, 6], // back
                [0, 3, 7, 4], // left
                [1, 2, 6, 5], // right
            ],
            face_colors: [
                [255, 0, 0],
                [0, 0, 255],
                [0, 128, 0],
                [0, 255, 255],
                [255, 165, 0],
                [128, 0, 128],
            ],
        }
    }

    /// Corner positions of face `index` taken from `vertices`, which may be
    /// a rotated copy of the model's own.
    pub fn face_points(&self, index: usize, vertices: &[Vec3<f64>; 8]) -> [Vec3<f64>; 4] {
        self.faces[index].map(|i| vertices[i])
    }
}

impl Default for GeometricModel {
    fn default() -> Self {
        Self::cube()
    }
}
