use {
    crate::Quadrilateral,
    image::{GREEN, Image, RED, Rgb, draw_line},
};

pub const REFERENCE_COLOR: Rgb = RED;
pub const ADJUSTED_COLOR: Rgb = GREEN;
pub const LINE_THICKNESS: u32 = 2;

pub fn draw_quad(image: &mut Image, quad: &Quadrilateral, color: Rgb, thickness: u32) {
    for (from, to) in quad.edges() {
        draw_line(image, from, to, color, thickness);
    }
}

/// Copy of `frame` with the reference outline drawn first and the
/// adjusted outline on top of it.
pub fn annotate(frame: &Image, reference: &Quadrilateral, adjusted: &Quadrilateral) -> Image {
    let mut annotated = frame.clone();
    draw_quad(&mut annotated, reference, REFERENCE_COLOR, LINE_THICKNESS);
    draw_quad(&mut annotated, adjusted, ADJUSTED_COLOR, LINE_THICKNESS);
    annotated
}
