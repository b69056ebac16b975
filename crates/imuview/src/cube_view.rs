use {
    base::{Vec2, Vec3},
    image::{BLACK, Image, draw_polygon, fill_polygon},
    imu::GeometricModel,
};

const FACE_ALPHA: f32 = 0.8;

// half the visible span along each axis, in model units
const VIEW_EXTENT: f64 = 2.0;

/// Draws a rotated `GeometricModel` as seen from the front: x to the
/// right, z up, looking along +y.
#[derive(Debug, Clone)]
pub struct CubeRenderer {
    size: Vec2<usize>,
}

impl CubeRenderer {
    pub fn new(size: Vec2<usize>) -> Self {
        Self { size }
    }

    fn project(&self, v: Vec3<f64>) -> Vec2<f64> {
        let scale = self.size.x.min(self.size.y) as f64 / (2.0 * VIEW_EXTENT);
        Vec2::new(
            self.size.x as f64 / 2.0 + v.x * scale,
            self.size.y as f64 / 2.0 - v.z * scale,
        )
    }

    /// Faces farthest from the viewer first.
    pub fn paint_order(&self, model: &GeometricModel, vertices: &[Vec3<f64>; 8]) -> Vec<usize> {
        let depth = |face: usize| {
            model
                .face_points(face, vertices)
                .iter()
                .map(|p| p.y)
                .sum::<f64>()
        };
        let mut order: Vec<usize> = (0..model.faces.len()).collect();
        order.sort_by(|&a, &b| depth(b).total_cmp(&depth(a)));
        order
    }

    pub fn render(&self, model: &GeometricModel, vertices: &[Vec3<f64>; 8]) -> Image {
        let mut image = Image::black(self.size);
        for face in self.paint_order(model, vertices) {
            let outline = model.face_points(face, vertices).map(|p| self.project(p));
            fill_polygon(&mut image, &outline, model.face_colors[face], FACE_ALPHA);
            draw_polygon(&mut image, &outline, BLACK, 1);
        }
        image
    }
}
