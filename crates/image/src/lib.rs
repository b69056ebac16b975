//! RGB frame buffers for the imu-view pipeline.
//!
//! Every frame moving between the video source, the overlay engine and the
//! display sinks is an `Image`: tightly packed 8-bit RGB, row-major, no
//! padding. Decoding and resampling lean on the `image` crate (imported
//! here as `crates_image` so this crate can keep the short name).

pub mod draw;
pub mod error;
pub mod image;
pub mod jpeg;
pub mod pack;

pub use draw::*;
pub use error::ImageError;
pub use image::{Image, Rgb};
pub use jpeg::*;
pub use pack::*;

use base::Vec2;

/// Decode any format the `image` crate understands into an RGB `Image`.
pub fn decode_image(data: &[u8]) -> Result<Image, ImageError> {
    let decoded = crates_image::load_from_memory(data)?;
    Ok(from_dynamic(decoded))
}

/// Convert a decoded `image` crate buffer of any pixel layout to RGB.
pub fn from_dynamic(decoded: crates_image::DynamicImage) -> Image {
    let rgb = decoded.into_rgb8();
    let size = Vec2::new(rgb.width() as usize, rgb.height() as usize);
    Image {
        size,
        data: rgb.into_raw(),
    }
}

/// Resample to `size` with a triangle (bilinear) filter.
pub fn resize(image: &Image, size: Vec2<usize>) -> Image {
    if image.size == size {
        return image.clone();
    }
    let Some(buffer) = crates_image::RgbImage::from_raw(
        image.size.x as u32,
        image.size.y as u32,
        image.data.clone(),
    ) else {
        // malformed buffer, nothing sensible to resample
        return Image::black(size);
    };
    let resized = crates_image::imageops::resize(
        &buffer,
        size.x as u32,
        size.y as u32,
        crates_image::imageops::FilterType::Triangle,
    );
    Image {
        size,
        data: resized.into_raw(),
    }
}
