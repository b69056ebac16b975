use {crate::VideoError, image::Image};

pub trait VideoSource {
    /// Decode the next frame. `Ok(None)` means the source is exhausted;
    /// that is not an error.
    fn read(&mut self) -> Result<Option<Image>, VideoError>;

    /// Seek back to the first frame.
    fn rewind(&mut self) -> Result<(), VideoError>;

    /// Number of frames, if known up front.
    fn frame_count(&self) -> Option<usize>;

    /// Read the next frame, wrapping around to the first one when the
    /// source runs out.
    fn read_looping(&mut self) -> Result<Image, VideoError> {
        if let Some(frame) = self.read()? {
            return Ok(frame);
        }
        log::debug!("video source exhausted, rewinding");
        self.rewind()?;
        self.read()?
            .ok_or_else(|| VideoError::Empty("source after rewind".to_string()))
    }
}

impl<S: VideoSource + ?Sized> VideoSource for Box<S> {
    fn read(&mut self) -> Result<Option<Image>, VideoError> {
        (**self).read()
    }

    fn rewind(&mut self) -> Result<(), VideoError> {
        (**self).rewind()
    }

    fn frame_count(&self) -> Option<usize> {
        (**self).frame_count()
    }
}
