use {
    crate::{VideoError, VideoSource},
    image::{Image, decode_image},
    std::path::{Path, PathBuf},
};

const FRAME_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "bmp", "gif"];

/// A directory of still images played back in file-name order.
pub struct ImageSequence {
    frames: Vec<PathBuf>,
    position: usize,
}

impl ImageSequence {
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, VideoError> {
        let dir = dir.as_ref();
        let mut frames = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            let is_frame = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| FRAME_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
                .unwrap_or(false);
            if is_frame && path.is_file() {
                frames.push(path);
            }
        }
        if frames.is_empty() {
            return Err(VideoError::Empty(dir.display().to_string()));
        }
        frames.sort();
        log::info!("image sequence {}: {} frames", dir.display(), frames.len());
        Ok(Self { frames, position: 0 })
    }
}

impl VideoSource for ImageSequence {
    fn read(&mut self) -> Result<Option<Image>, VideoError> {
        let Some(path) = self.frames.get(self.position) else {
            return Ok(None);
        };
        // advance first so a bad frame is skipped next time
        self.position += 1;
        let bytes = std::fs::read(path)?;
        Ok(Some(decode_image(&bytes)?))
    }

    fn rewind(&mut self) -> Result<(), VideoError> {
        self.position = 0;
        Ok(())
    }

    fn frame_count(&self) -> Option<usize> {
        Some(self.frames.len())
    }
}
