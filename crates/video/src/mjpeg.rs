use {
    crate::{VideoError, VideoSource},
    image::{Image, decode_image},
    std::{ops::Range, path::Path},
};

const SOI: [u8; 2] = [0xFF, 0xD8];
const EOI: [u8; 2] = [0xFF, 0xD9];

fn find(haystack: &[u8], needle: [u8; 2], from: usize) -> Option<usize> {
    haystack
        .get(from..)?
        .windows(2)
        .position(|w| w == needle)
        .map(|i| i + from)
}

/// Byte ranges of every complete JPEG in a concatenated stream. A trailing
/// frame with no end marker is dropped.
pub fn index_frames(data: &[u8]) -> Vec<Range<usize>> {
    let mut frames = Vec::new();
    let mut cursor = 0;
    while let Some(start) = find(data, SOI, cursor) {
        let Some(end) = find(data, EOI, start + 2) else {
            break;
        };
        frames.push(start..end + 2);
        cursor = end + 2;
    }
    frames
}

/// Motion-JPEG file: JPEG images back to back. The file is held in memory
/// and each frame is decoded on demand.
pub struct MjpegFile {
    data: Vec<u8>,
    frames: Vec<Range<usize>>,
    position: usize,
}

impl MjpegFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, VideoError> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let file = Self::from_bytes(data).map_err(|err| match err {
            VideoError::Empty(_) => VideoError::Empty(path.display().to_string()),
            other => other,
        })?;
        log::info!("mjpeg {}: {} frames", path.display(), file.frames.len());
        Ok(file)
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self, VideoError> {
        let frames = index_frames(&data);
        if frames.is_empty() {
            return Err(VideoError::Empty("mjpeg stream".to_string()));
        }
        Ok(Self {
            data,
            frames,
            position: 0,
        })
    }
}

impl VideoSource for MjpegFile {
    fn read(&mut self) -> Result<Option<Image>, VideoError> {
        let Some(range) = self.frames.get(self.position).cloned() else {
            return Ok(None);
        };
        self.position += 1;
        Ok(Some(decode_image(&self.data[range])?))
    }

    fn rewind(&mut self) -> Result<(), VideoError> {
        self.position = 0;
        Ok(())
    }

    fn frame_count(&self) -> Option<usize> {
        Some(self.frames.len())
    }
}
