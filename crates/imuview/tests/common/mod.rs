#![allow(dead_code)]

use {
    base::{Mat3, Vec2},
    image::{Image, Rgb},
    imu::TelemetryConfig,
    imuview::{Host, Scheduler, SchedulerConfig, UserAction, VideoSink},
    std::collections::VecDeque,
    video::{VideoError, VideoSource},
};

pub const SIZE: Vec2<usize> = Vec2::new(40, 30);

/// Plays a fixed list of frames in order.
pub struct FakeSource {
    frames: Vec<Image>,
    position: usize,
}

impl FakeSource {
    pub fn new(frames: Vec<Image>) -> Self {
        Self {
            frames,
            position: 0,
        }
    }

    pub fn solid(colors: &[Rgb]) -> Self {
        Self::new(colors.iter().map(|&c| Image::filled(SIZE, c)).collect())
    }
}

impl VideoSource for FakeSource {
    fn read(&mut self) -> Result<Option<Image>, VideoError> {
        let Some(frame) = self.frames.get(self.position) else {
            return Ok(None);
        };
        self.position += 1;
        Ok(Some(frame.clone()))
    }

    fn rewind(&mut self) -> Result<(), VideoError> {
        self.position = 0;
        Ok(())
    }

    fn frame_count(&self) -> Option<usize> {
        Some(self.frames.len())
    }
}

/// A serial port that never sends anything.
pub struct SilentPort;

impl std::io::Read for SilentPort {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        std::thread::sleep(std::time::Duration::from_millis(2));
        Err(std::io::Error::new(std::io::ErrorKind::TimedOut, "no data"))
    }
}

/// A source whose every read fails.
pub struct BrokenSource;

impl VideoSource for BrokenSource {
    fn read(&mut self) -> Result<Option<Image>, VideoError> {
        Err(VideoError::Unsupported("broken".to_string()))
    }

    fn rewind(&mut self) -> Result<(), VideoError> {
        Ok(())
    }

    fn frame_count(&self) -> Option<usize> {
        None
    }
}

/// Records everything pushed to it. Dies after `lifetime` liveness checks.
pub struct RecordingHost {
    pub lifetime: usize,
    pub dead: bool,
    pub actions: VecDeque<Vec<UserAction>>,
    pub models: Vec<Mat3<f64>>,
    pub frames: Vec<(VideoSink, Image)>,
    pub lines: Vec<String>,
    pub pushed_after_death: usize,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::with_lifetime(usize::MAX)
    }

    pub fn with_lifetime(lifetime: usize) -> Self {
        Self {
            lifetime,
            dead: false,
            actions: VecDeque::new(),
            models: Vec::new(),
            frames: Vec::new(),
            lines: Vec::new(),
            pushed_after_death: 0,
        }
    }

    pub fn frames_for(&self, sink: VideoSink) -> Vec<&Image> {
        self.frames
            .iter()
            .filter(|(s, _)| *s == sink)
            .map(|(_, image)| image)
            .collect()
    }

    pub fn logged(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }
}

impl Host for RecordingHost {
    fn is_alive(&mut self) -> bool {
        if self.lifetime == 0 {
            self.dead = true;
        } else {
            self.lifetime -= 1;
        }
        !self.dead
    }

    fn poll_actions(&mut self) -> Vec<UserAction> {
        self.actions.pop_front().unwrap_or_default()
    }

    fn show_model(&mut self, rotation: &Mat3<f64>, _view: &Image) {
        if self.dead {
            self.pushed_after_death += 1;
        }
        self.models.push(*rotation);
    }

    fn show_frame(&mut self, sink: VideoSink, frame: &Image) {
        if self.dead {
            self.pushed_after_death += 1;
        }
        self.frames.push((sink, frame.clone()));
    }

    fn log(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

pub fn test_config() -> SchedulerConfig {
    SchedulerConfig::default()
        .with_display_size(SIZE)
        .with_warp_size(SIZE)
}

pub fn missing_port() -> TelemetryConfig {
    TelemetryConfig::default().with_path("/dev/imuview-no-such-port")
}

pub fn scheduler_with(source: impl VideoSource + Send + 'static, config: &SchedulerConfig) -> Scheduler {
    Scheduler::new(config, Box::new(source), missing_port())
}
