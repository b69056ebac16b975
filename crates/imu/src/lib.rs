//! Orientation side of imu-view: turning `roll*pitch*yaw` telemetry lines
//! into samples, holding the latest one for the renderers, and rotating
//! the reference cube.

pub mod error;
pub mod model;
pub mod rotation;
pub mod sample;
pub mod state;
pub mod telemetry;

pub use error::{ParseError, TelemetryError};
pub use model::GeometricModel;
pub use rotation::{apply, rotation_matrix};
pub use sample::OrientationSample;
pub use state::OrientationState;
pub use telemetry::{LinkStatus, TelemetryConfig, TelemetryIn, list_ports, run_reader};
