use crate::Image;

fn pack_u32(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Pack an RGB image into the 0xAARRGGBB buffer minifb expects.
pub fn image_to_u32(image: &Image) -> Vec<u32> {
    let mut buf = Vec::with_capacity(image.size.area());
    for chunk in image.data.chunks_exact(3) {
        buf.push(pack_u32(chunk[0], chunk[1], chunk[2]));
    }
    buf
}
