use {
    crate::{Image, ImageError},
    crates_image::ImageEncoder,
};

/// Encode an RGB image as JPEG, quality 1..=100.
pub fn encode_jpeg(image: &Image, quality: u8) -> Result<Vec<u8>, ImageError> {
    let mut buffer = Vec::new();
    crates_image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(
            &image.data,
            image.size.x as u32,
            image.size.y as u32,
            crates_image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| ImageError::Encode(e.to_string()))?;
    Ok(buffer)
}
