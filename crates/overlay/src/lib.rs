//! Homography overlay: shifting the reference quadrilateral by the
//! orientation delta, warping frames to a top-down view, and drawing the
//! two quadrilaterals over the camera frame.

pub mod annotate;
pub mod engine;
pub mod quad;
pub mod transform;
pub mod warp;

pub use annotate::*;
pub use engine::{OverlayEngine, VideoOutputs};
pub use quad::Quadrilateral;
pub use transform::PerspectiveTransform;
pub use warp::*;

use base::Vec2;

/// Size of every warped top-down view.
pub const OUTPUT_SIZE: Vec2<usize> = Vec2::new(800, 600);
