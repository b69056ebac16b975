use {
    crate::{Image, Rgb},
    base::Vec2,
};

pub const BLACK: Rgb = [0, 0, 0];
pub const RED: Rgb = [255, 0, 0];
pub const GREEN: Rgb = [0, 255, 0];
pub const BLUE: Rgb = [0, 0, 255];

// Cohen-Sutherland outcodes
const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

fn outcode(x: i64, y: i64, width: i64, height: i64) -> u8 {
    let mut code = INSIDE;
    if x < 0 {
        code |= LEFT;
    } else if x >= width {
        code |= RIGHT;
    }
    if y < 0 {
        code |= TOP;
    } else if y >= height {
        code |= BOTTOM;
    }
    code
}

/// Clip the segment to `[0, width) x [0, height)`. `None` if nothing of
/// it is visible.
fn clip_segment(
    mut a: Vec2<i64>,
    mut b: Vec2<i64>,
    width: i64,
    height: i64,
) -> Option<(Vec2<i64>, Vec2<i64>)> {
    loop {
        let code_a = outcode(a.x, a.y, width, height);
        let code_b = outcode(b.x, b.y, width, height);
        if code_a | code_b == 0 {
            return Some((a, b));
        }
        if code_a & code_b != 0 {
            return None;
        }

        let code = if code_a != 0 { code_a } else { code_b };
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        // widened so far-off endpoints cannot overflow the products
        let step = |num: i64, along: i64, den: i64| -> i64 {
            (num as i128 * along as i128 / den as i128) as i64
        };
        let clipped = if code & TOP != 0 {
            Vec2::new(a.x + step(dx, 0 - a.y, dy), 0)
        } else if code & BOTTOM != 0 {
            Vec2::new(a.x + step(dx, height - 1 - a.y, dy), height - 1)
        } else if code & LEFT != 0 {
            Vec2::new(0, a.y + step(dy, 0 - a.x, dx))
        } else {
            Vec2::new(width - 1, a.y + step(dy, width - 1 - a.x, dx))
        };

        if code == code_a {
            a = clipped;
        } else {
            b = clipped;
        }
    }
}

/// Draw a straight segment with a square brush `thickness` pixels wide,
/// clipped to the image.
pub fn draw_line(image: &mut Image, from: Vec2<i32>, to: Vec2<i32>, color: Rgb, thickness: u32) {
    let thickness = thickness.max(1) as i64;
    // widen the clip window so brush pixels near the border still land
    let pad = thickness;
    let width = image.size.x as i64 + 2 * pad;
    let height = image.size.y as i64 + 2 * pad;
    let a = Vec2::new(from.x as i64 + pad, from.y as i64 + pad);
    let b = Vec2::new(to.x as i64 + pad, to.y as i64 + pad);
    let Some((a, b)) = clip_segment(a, b, width, height) else {
        return;
    };

    let (mut x, mut y) = (a.x - pad, a.y - pad);
    let (x1, y1) = (b.x - pad, b.y - pad);
    let dx = (x1 - x).abs();
    let dy = (y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    let low = -(thickness / 2);
    let high = (thickness - 1) / 2;
    loop {
        for oy in low..=high {
            for ox in low..=high {
                image.put(x + ox, y + oy, color);
            }
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}

/// Outline a closed polygon.
pub fn draw_polygon(image: &mut Image, points: &[Vec2<f64>], color: Rgb, thickness: u32) {
    for (i, &p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        draw_line(image, p.truncate(), q.truncate(), color, thickness);
    }
}

/// Fill a polygon (even-odd rule, pixel centres) blending `color` at
/// opacity `alpha`.
pub fn fill_polygon(image: &mut Image, points: &[Vec2<f64>], color: Rgb, alpha: f32) {
    if points.len() < 3 {
        return;
    }
    let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    if !(min_y.is_finite() && max_y.is_finite()) {
        return;
    }
    let first_row = min_y.floor().max(0.0) as i64;
    let last_row = max_y.ceil().min(image.size.y as f64 - 1.0) as i64;

    let mut crossings = Vec::with_capacity(points.len());
    for row in first_row..=last_row {
        let yc = row as f64 + 0.5;
        crossings.clear();
        for (i, &p) in points.iter().enumerate() {
            let q = points[(i + 1) % points.len()];
            if (p.y <= yc && q.y > yc) || (q.y <= yc && p.y > yc) {
                crossings.push(p.x + (yc - p.y) * (q.x - p.x) / (q.y - p.y));
            }
        }
        crossings.sort_by(|a, b| a.total_cmp(b));
        for span in crossings.chunks_exact(2) {
            let start = (span[0] - 0.5).ceil().max(0.0) as i64;
            let end = (span[1] - 0.5).floor().min(image.size.x as f64 - 1.0) as i64;
            for col in start..=end {
                image.blend(col, row, color, alpha);
            }
        }
    }
}
