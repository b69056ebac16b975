use {
    crate::*,
    std::path::Path,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoFormat {
    ImageSequence,
    Mjpeg,
    Gif,
}

impl VideoFormat {
    /// Pick a backend from the path: directories are image sequences,
    /// files go by extension.
    pub fn from_path(path: &Path) -> Result<Self, VideoError> {
        if path.is_dir() {
            return Ok(VideoFormat::ImageSequence);
        }
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match ext.as_deref() {
            Some("mjpeg") | Some("mjpg") => Ok(VideoFormat::Mjpeg),
            Some("gif") => Ok(VideoFormat::Gif),
            _ => Err(VideoError::Unsupported(path.display().to_string())),
        }
    }
}

/// Open the video at `path` with whichever backend fits it.
pub fn open(path: impl AsRef<Path>) -> Result<Box<dyn VideoSource + Send>, VideoError> {
    let path = path.as_ref();
    match VideoFormat::from_path(path)? {
        VideoFormat::ImageSequence => Ok(Box::new(ImageSequence::open(path)?)),
        VideoFormat::Mjpeg => Ok(Box::new(MjpegFile::open(path)?)),
        VideoFormat::Gif => Ok(Box::new(GifFile::open(path)?)),
    }
}
