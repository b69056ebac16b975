//! Shared building blocks for the imu-view workspace: small generic vector
//! and matrix types, and the `log` backends every binary installs.

pub mod logging;
pub use logging::*;

mod mat3;
pub use mat3::*;

mod vec2;
pub use vec2::*;

mod vec3;
pub use vec3::*;
