use {
    crate::SchedulerConfig,
    clap::Parser,
    imu::TelemetryConfig,
    std::{path::PathBuf, time::Duration},
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Serial device to read orientation from; connects at startup
    #[arg(long)]
    pub port: Option<String>,

    /// Serial baud rate
    #[arg(long, default_value_t = 115_200)]
    pub baud: u32,

    /// Video to play: .mjpeg, .gif, or a directory of frames
    #[arg(long, default_value = "samples/front_camera.mjpeg")]
    pub video: PathBuf,

    /// Pixels of corner shift per degree of orientation delta
    #[arg(long, default_value_t = 1.0)]
    pub ratio: f64,

    /// Video tick period in milliseconds
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub video_interval_ms: u64,

    /// Orientation tick period in milliseconds
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub orientation_interval_ms: u64,

    /// Start the video without waiting for the play key
    #[arg(long, default_value_t = false)]
    pub autoplay: bool,

    /// Write dated log files here instead of logging to stdout
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// List available serial ports and exit
    #[arg(long)]
    pub list_ports: bool,
}

impl Args {
    pub fn telemetry_config(&self) -> TelemetryConfig {
        let config = TelemetryConfig::default().with_baud_rate(self.baud);
        match &self.port {
            Some(port) => config.with_path(port.clone()),
            None => config,
        }
    }

    pub fn scheduler_config(&self) -> SchedulerConfig {
        SchedulerConfig::default()
            .with_ratio(self.ratio)
            .with_video_interval(Duration::from_millis(self.video_interval_ms))
            .with_orientation_interval(Duration::from_millis(self.orientation_interval_ms))
            .with_autoplay(self.autoplay)
    }
}
