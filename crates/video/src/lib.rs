//! Seekable video sources.
//!
//! A source hands out decoded RGB frames one at a time and can be rewound
//! to its first frame, which is all the playback loop needs to play a clip
//! forever.

pub mod error;
pub mod file;
pub mod gif;
pub mod mjpeg;
pub mod sequence;
pub mod source;

pub use error::VideoError;
pub use file::{VideoFormat, open};
pub use gif::GifFile;
pub use mjpeg::MjpegFile;
pub use sequence::ImageSequence;
pub use source::VideoSource;
