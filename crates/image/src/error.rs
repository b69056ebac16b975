use std::fmt;

#[derive(Debug)]
pub enum ImageError {
    Decode(crates_image::ImageError),
    Encode(String),
    Size { expected: usize, actual: usize },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Decode(err) => write!(f, "decode error: {err}"),
            ImageError::Encode(msg) => write!(f, "encode error: {msg}"),
            ImageError::Size { expected, actual } => {
                write!(f, "size mismatch: expected {expected} bytes, got {actual}")
            }
        }
    }
}

impl std::error::Error for ImageError {}

impl From<crates_image::ImageError> for ImageError {
    fn from(err: crates_image::ImageError) -> Self {
        ImageError::Decode(err)
    }
}
