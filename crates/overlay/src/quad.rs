use {base::Vec2, imu::OrientationSample};

/// Four corners in image pixels.
///
/// Corner order everywhere (arrays, transforms) is top-left, bottom-left,
/// top-right, bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quadrilateral {
    pub top_left: Vec2<i32>,
    pub bottom_left: Vec2<i32>,
    pub top_right: Vec2<i32>,
    pub bottom_right: Vec2<i32>,
}

impl Quadrilateral {
    /// Road region of the front camera at rest.
    pub const REFERENCE: Self = Self {
        top_left: Vec2::new(250, 334),
        bottom_left: Vec2::new(0, 500),
        top_right: Vec2::new(570, 334),
        bottom_right: Vec2::new(800, 500),
    };

    pub fn from_corners(corners: [Vec2<i32>; 4]) -> Self {
        let [top_left, bottom_left, top_right, bottom_right] = corners;
        Self {
            top_left,
            bottom_left,
            top_right,
            bottom_right,
        }
    }

    pub fn corners(&self) -> [Vec2<i32>; 4] {
        [
            self.top_left,
            self.bottom_left,
            self.top_right,
            self.bottom_right,
        ]
    }

    /// The four outline segments: left side, top, right side, bottom.
    pub fn edges(&self) -> [(Vec2<i32>, Vec2<i32>); 4] {
        [
            (self.top_left, self.bottom_left),
            (self.top_left, self.top_right),
            (self.top_right, self.bottom_right),
            (self.bottom_left, self.bottom_right),
        ]
    }

    /// Move the top corners by an orientation delta scaled by `ratio`.
    ///
    /// Roll and yaw together spread the top corners apart horizontally
    /// (top-left moves left, top-right moves right), pitch lifts both of
    /// them. The bottom corners stay put. Results are truncated toward
    /// zero and not clamped to the frame.
    pub fn adjusted(&self, delta: OrientationSample, ratio: f64) -> Self {
        let spread = (delta.roll + delta.yaw) * ratio;
        let lift = delta.pitch * ratio;
        let shift = |corner: Vec2<i32>, dx: f64| {
            Vec2::new(corner.x as f64 + dx, corner.y as f64 - lift).truncate()
        };
        Self {
            top_left: shift(self.top_left, -spread),
            bottom_left: self.bottom_left,
            top_right: shift(self.top_right, spread),
            bottom_right: self.bottom_right,
        }
    }
}

impl Default for Quadrilateral {
    fn default() -> Self {
        Self::REFERENCE
    }
}
