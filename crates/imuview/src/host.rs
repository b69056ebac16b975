use {base::Mat3, image::Image};

/// Something the user asked for through the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    /// Connect the telemetry port, or close it if it is open.
    ToggleConnection,
    /// Make the current orientation the zero reference.
    ResetZero,
    /// Start the video cadence.
    PlayVideo,
    Quit,
}

/// Which of the three video views a frame is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoSink {
    Annotated,
    ReferenceTopDown,
    AdjustedTopDown,
}

/// The surface the scheduler draws into.
///
/// Sinks only display; all images arrive finished and at display size.
pub trait Host {
    /// `false` once the surface is gone. Nothing is pushed after that.
    fn is_alive(&mut self) -> bool;

    /// Actions collected since the last call.
    fn poll_actions(&mut self) -> Vec<UserAction>;

    fn show_model(&mut self, rotation: &Mat3<f64>, view: &Image);

    fn show_frame(&mut self, sink: VideoSink, frame: &Image);

    /// Diagnostic text sink.
    fn log(&mut self, line: &str);
}
