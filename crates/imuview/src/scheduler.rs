use {
    crate::*,
    base::Vec2,
    image::resize,
    imu::{
        GeometricModel, LinkStatus, OrientationState, TelemetryConfig, TelemetryIn, apply,
        rotation_matrix,
    },
    overlay::OverlayEngine,
    std::{ops::ControlFlow, sync::Arc},
    video::VideoSource,
};

/// Owns everything the two cadences need and turns ticks into images.
///
/// The only link to the telemetry worker is the shared
/// `OrientationState`; the scheduler never calls into the worker apart
/// from opening and closing it.
pub struct Scheduler {
    state: Arc<OrientationState>,
    model: GeometricModel,
    renderer: CubeRenderer,
    overlay: OverlayEngine,
    video: Box<dyn VideoSource + Send>,
    telemetry_config: TelemetryConfig,
    link: Option<TelemetryIn>,
    playing: bool,
    display_size: Vec2<usize>,
}

impl Scheduler {
    pub fn new(
        config: &SchedulerConfig,
        video: Box<dyn VideoSource + Send>,
        telemetry_config: TelemetryConfig,
    ) -> Self {
        Self {
            state: Arc::new(OrientationState::new()),
            model: GeometricModel::cube(),
            renderer: CubeRenderer::new(config.display_size),
            overlay: OverlayEngine::new()
                .with_ratio(config.ratio)
                .with_output_size(config.warp_size),
            video,
            telemetry_config,
            link: None,
            playing: config.autoplay,
            display_size: config.display_size,
        }
    }

    pub fn state(&self) -> &Arc<OrientationState> {
        &self.state
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_connected(&self) -> bool {
        self.link.is_some()
    }

    /// Take over an already running link. A previous link is dropped,
    /// which cancels its worker.
    pub fn attach(&mut self, link: TelemetryIn) {
        self.link = Some(link);
    }

    /// Open the configured serial port. Must run inside a tokio runtime.
    pub fn connect<H: Host>(&mut self, host: &mut H) -> bool {
        match TelemetryIn::open(&self.telemetry_config, Arc::clone(&self.state)) {
            Ok(link) => {
                host.log(&format!("Connected to {}", link.name()));
                self.link = Some(link);
                true
            }
            Err(error) => {
                host.log(&format!("Failed to connect: {error}"));
                false
            }
        }
    }

    /// Drop the telemetry link. The worker is told to stop right away and
    /// joined in the background, so the ticks keep running meanwhile.
    pub fn disconnect<H: Host>(&mut self, host: &mut H) {
        if let Some(link) = self.link.take() {
            link.cancel();
            tokio::spawn(async move {
                let status = link.close().await;
                log::info!("telemetry closed: {status:?}");
            });
            host.log("Port closed");
        }
    }

    /// Report and forget a link whose worker has stopped on its own.
    pub fn check_link<H: Host>(&mut self, host: &mut H) {
        let status = match &self.link {
            Some(link) => link.status(),
            None => return,
        };
        match status {
            LinkStatus::Connected => {}
            LinkStatus::Closed => {
                host.log("Serial error: connection closed");
                self.link = None;
            }
            LinkStatus::Failed(error) => {
                host.log(&format!("Serial error: {error}"));
                self.link = None;
            }
        }
    }

    /// Redraw the cube if a sample arrived since the last call. Returns
    /// whether anything was drawn.
    pub fn orientation_tick<H: Host>(&mut self, host: &mut H) -> bool {
        let Some(sample) = self.state.take_if_ready() else {
            return false;
        };
        let rotation = rotation_matrix(sample.roll, sample.pitch, sample.yaw);
        let vertices = apply(&self.model, rotation);
        let view = self.renderer.render(&self.model, &vertices);
        host.show_model(&rotation, &view);
        host.log(&sample.to_string());
        true
    }

    /// Show the next video frame and its two warped views. The overlay
    /// always uses the current delta, new sample or not.
    pub fn video_tick<H: Host>(&mut self, host: &mut H) -> bool {
        if !self.playing {
            return false;
        }
        let frame = match self.video.read_looping() {
            Ok(frame) => frame,
            Err(error) => {
                log::error!("video: {error}");
                host.log(&format!("Video error: {error}"));
                self.playing = false;
                return false;
            }
        };
        let outputs = self.overlay.render(&frame, self.state.delta());
        for (sink, image) in [
            (VideoSink::Annotated, &outputs.annotated),
            (VideoSink::ReferenceTopDown, &outputs.reference_topdown),
            (VideoSink::AdjustedTopDown, &outputs.adjusted_topdown),
        ] {
            host.show_frame(sink, &resize(image, self.display_size));
        }
        true
    }

    pub fn handle_action<H: Host>(
        &mut self,
        action: UserAction,
        host: &mut H,
    ) -> ControlFlow<()> {
        match action {
            UserAction::ToggleConnection => {
                if self.link.is_some() {
                    self.disconnect(host);
                } else {
                    self.connect(host);
                }
            }
            UserAction::ResetZero => {
                let zero = self.state.reset_zero();
                host.log(&format!(
                    "IMU Reset to Roll:{:.2} Pitch:{:.2} Yaw:{:.2}",
                    zero.roll, zero.pitch, zero.yaw
                ));
            }
            UserAction::PlayVideo => {
                if !self.playing {
                    self.playing = true;
                    host.log("Video Started");
                }
            }
            UserAction::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    /// Close the telemetry link, if any.
    pub async fn shutdown(&mut self) {
        if let Some(link) = self.link.take() {
            let status = link.close().await;
            log::info!("telemetry closed: {status:?}");
        }
    }
}
