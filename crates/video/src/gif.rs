use {
    crate::{VideoError, VideoSource},
    crates_image::{AnimationDecoder, DynamicImage, codecs::gif::GifDecoder},
    image::{Image, from_dynamic},
    std::{
        fs::File,
        io::{BufRead, BufReader, Cursor, Seek},
        path::Path,
    },
};

/// Animated GIF, fully decoded at open.
pub struct GifFile {
    frames: Vec<Image>,
    position: usize,
}

impl GifFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, VideoError> {
        let path = path.as_ref();
        let frames = decode_frames(BufReader::new(File::open(path)?))?;
        if frames.is_empty() {
            return Err(VideoError::Empty(path.display().to_string()));
        }
        log::info!("gif {}: {} frames", path.display(), frames.len());
        Ok(Self {
            frames,
            position: 0,
        })
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, VideoError> {
        let frames = decode_frames(Cursor::new(data))?;
        if frames.is_empty() {
            return Err(VideoError::Empty("gif stream".to_string()));
        }
        Ok(Self {
            frames,
            position: 0,
        })
    }
}

fn decode_frames<R: BufRead + Seek>(reader: R) -> Result<Vec<Image>, VideoError> {
    let decoder = GifDecoder::new(reader)?;
    let frames = decoder.into_frames().collect_frames()?;
    Ok(frames
        .into_iter()
        .map(|frame| from_dynamic(DynamicImage::ImageRgba8(frame.into_buffer())))
        .collect())
}

impl VideoSource for GifFile {
    fn read(&mut self) -> Result<Option<Image>, VideoError> {
        let frame = self.frames.get(self.position).cloned();
        if frame.is_some() {
            self.position += 1;
        }
        Ok(frame)
    }

    fn rewind(&mut self) -> Result<(), VideoError> {
        self.position = 0;
        Ok(())
    }

    fn frame_count(&self) -> Option<usize> {
        Some(self.frames.len())
    }
}
