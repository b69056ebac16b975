use {
    crate::{PerspectiveTransform, Quadrilateral},
    base::Vec2,
    image::Image,
};

/// Resample `frame` through `transform` into a `size` image.
///
/// Every output pixel is pulled back through the inverse transform and
/// sampled bilinearly; anything that falls outside the frame is black. A
/// transform that cannot be inverted gives an all-black image.
pub fn warp_perspective(frame: &Image, transform: &PerspectiveTransform, size: Vec2<usize>) -> Image {
    let mut output = Image::black(size);
    let Some(inverse) = transform.inverse() else {
        log::warn!("warp: transform is not invertible, output left black");
        return output;
    };
    for y in 0..size.y {
        for x in 0..size.x {
            if let Some(src) = inverse.map_point(Vec2::new(x as f64, y as f64)) {
                let color = frame.sample_bilinear(src.x, src.y);
                output.put(x as i64, y as i64, color);
            }
        }
    }
    output
}

/// Top-down view of the region inside `quad`, stretched to `size`.
pub fn top_down(frame: &Image, quad: &Quadrilateral, size: Vec2<usize>) -> Image {
    let corners = quad.corners().map(Vec2::as_f64);
    match PerspectiveTransform::to_rectangle(corners, size) {
        Some(transform) => warp_perspective(frame, &transform, size),
        None => {
            log::warn!("warp: degenerate quadrilateral {:?}, output left black", quad.corners());
            Image::black(size)
        }
    }
}
