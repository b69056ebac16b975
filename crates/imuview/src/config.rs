use {base::Vec2, std::time::Duration};

#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    pub video_interval: Duration,
    pub orientation_interval: Duration,
    /// Orientation delta to pixel scale for the adjusted quadrilateral.
    pub ratio: f64,
    /// Every image is resized to this before it reaches a sink.
    pub display_size: Vec2<usize>,
    /// Size of the two warped views.
    pub warp_size: Vec2<usize>,
    pub autoplay: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            video_interval: Duration::from_millis(10),
            orientation_interval: Duration::from_millis(10),
            ratio: 1.0,
            display_size: Vec2::new(800, 600),
            warp_size: overlay::OUTPUT_SIZE,
            autoplay: false,
        }
    }
}

impl SchedulerConfig {
    pub fn with_video_interval(mut self, interval: Duration) -> Self {
        self.video_interval = interval;
        self
    }

    pub fn with_orientation_interval(mut self, interval: Duration) -> Self {
        self.orientation_interval = interval;
        self
    }

    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    pub fn with_display_size(mut self, size: Vec2<usize>) -> Self {
        self.display_size = size;
        self
    }

    pub fn with_warp_size(mut self, size: Vec2<usize>) -> Self {
        self.warp_size = size;
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }
}
