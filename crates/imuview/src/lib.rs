//! imu-view: a live cube and a perspective-corrected road view, both
//! driven by one serial orientation stream.
//!
//! The telemetry worker (in `imu`) only ever writes the shared
//! `OrientationState`. Everything here runs on one task: the scheduler
//! reads that state on two independent cadences and pushes finished
//! images to a `Host`, which owns whatever is on screen.

pub mod args;
pub mod config;
pub mod cube_view;
pub mod host;
pub mod run;
pub mod scheduler;
pub mod window;

pub use args::Args;
pub use config::SchedulerConfig;
pub use cube_view::CubeRenderer;
pub use host::{Host, UserAction, VideoSink};
pub use run::run;
pub use scheduler::Scheduler;
pub use window::WindowHost;
