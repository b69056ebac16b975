use {crate::ImageError, base::Vec2};

pub type Rgb = [u8; 3];

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub size: Vec2<usize>,
    pub data: Vec<u8>,
}

impl Image {
    pub fn new(size: Vec2<usize>, data: Vec<u8>) -> Result<Self, ImageError> {
        let expected = size.area() * 3;
        if data.len() != expected {
            return Err(ImageError::Size {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { size, data })
    }

    pub fn black(size: Vec2<usize>) -> Self {
        Self::filled(size, [0, 0, 0])
    }

    pub fn filled(size: Vec2<usize>, color: Rgb) -> Self {
        let mut data = Vec::with_capacity(size.area() * 3);
        for _ in 0..size.area() {
            data.extend_from_slice(&color);
        }
        Self { size, data }
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size.x && (y as usize) < self.size.y
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        let i = (y * self.size.x + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Write a pixel; coordinates outside the image are ignored.
    pub fn put(&mut self, x: i64, y: i64, color: Rgb) {
        if self.contains(x, y) {
            let i = (y as usize * self.size.x + x as usize) * 3;
            self.data[i..i + 3].copy_from_slice(&color);
        }
    }

    /// Blend `color` over the pixel with opacity `alpha` in [0, 1].
    pub fn blend(&mut self, x: i64, y: i64, color: Rgb, alpha: f32) {
        if !self.contains(x, y) {
            return;
        }
        let i = (y as usize * self.size.x + x as usize) * 3;
        for c in 0..3 {
            let under = self.data[i + c] as f32;
            let over = color[c] as f32;
            self.data[i + c] = (over * alpha + under * (1.0 - alpha)).round() as u8;
        }
    }

    /// Bilinear sample at a sub-pixel position, black outside the image.
    pub fn sample_bilinear(&self, x: f64, y: f64) -> Rgb {
        if !(x.is_finite() && y.is_finite()) {
            return [0, 0, 0];
        }
        let x0 = x.floor();
        let y0 = y.floor();
        let fx = x - x0;
        let fy = y - y0;
        let (x0, y0) = (x0 as i64, y0 as i64);

        let fetch = |px: i64, py: i64| -> [f64; 3] {
            if self.contains(px, py) {
                let p = self.pixel(px as usize, py as usize);
                [p[0] as f64, p[1] as f64, p[2] as f64]
            } else {
                [0.0; 3]
            }
        };

        let p00 = fetch(x0, y0);
        let p10 = fetch(x0 + 1, y0);
        let p01 = fetch(x0, y0 + 1);
        let p11 = fetch(x0 + 1, y0 + 1);

        let mut out = [0u8; 3];
        for c in 0..3 {
            let top = p00[c] * (1.0 - fx) + p10[c] * fx;
            let bottom = p01[c] * (1.0 - fx) + p11[c] * fx;
            out[c] = (top * (1.0 - fy) + bottom * fy).round().clamp(0.0, 255.0) as u8;
        }
        out
    }
}
