use std::fmt;

#[derive(Debug)]
pub enum VideoError {
    Io(std::io::Error),
    Decode(image::ImageError),
    Empty(String),
    Unsupported(String),
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::Io(err) => write!(f, "io error: {err}"),
            VideoError::Decode(err) => write!(f, "decode error: {err}"),
            VideoError::Empty(what) => write!(f, "no frames in {what}"),
            VideoError::Unsupported(what) => write!(f, "unsupported video source: {what}"),
        }
    }
}

impl std::error::Error for VideoError {}

impl From<std::io::Error> for VideoError {
    fn from(err: std::io::Error) -> Self {
        VideoError::Io(err)
    }
}

impl From<image::ImageError> for VideoError {
    fn from(err: image::ImageError) -> Self {
        VideoError::Decode(err)
    }
}

impl From<crates_image::ImageError> for VideoError {
    fn from(err: crates_image::ImageError) -> Self {
        VideoError::Decode(image::ImageError::Decode(err))
    }
}
