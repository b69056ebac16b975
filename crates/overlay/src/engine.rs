use {
    crate::*,
    base::Vec2,
    image::Image,
    imu::OrientationSample,
};

/// The three images produced from one video frame.
#[derive(Debug, Clone)]
pub struct VideoOutputs {
    /// The frame with both quadrilaterals drawn on it.
    pub annotated: Image,
    pub reference_topdown: Image,
    pub adjusted_topdown: Image,
    /// The quadrilateral the adjusted view was warped from.
    pub adjusted: Quadrilateral,
}

#[derive(Debug, Clone)]
pub struct OverlayEngine {
    reference: Quadrilateral,
    ratio: f64,
    output_size: Vec2<usize>,
}

impl Default for OverlayEngine {
    fn default() -> Self {
        Self {
            reference: Quadrilateral::REFERENCE,
            ratio: 1.0,
            output_size: OUTPUT_SIZE,
        }
    }
}

impl OverlayEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reference(mut self, reference: Quadrilateral) -> Self {
        self.reference = reference;
        self
    }

    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    pub fn with_output_size(mut self, output_size: Vec2<usize>) -> Self {
        self.output_size = output_size;
        self
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn adjusted(&self, delta: OrientationSample) -> Quadrilateral {
        self.reference.adjusted(delta, self.ratio)
    }

    pub fn render(&self, frame: &Image, delta: OrientationSample) -> VideoOutputs {
        let adjusted = self.adjusted(delta);
        VideoOutputs {
            annotated: annotate(frame, &self.reference, &adjusted),
            reference_topdown: top_down(frame, &self.reference, self.output_size),
            adjusted_topdown: top_down(frame, &adjusted, self.output_size),
            adjusted,
        }
    }
}
