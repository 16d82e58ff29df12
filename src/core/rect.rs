//! Measured container geometry.
//!
//! The bounding rectangle (fractional CSS pixels) sizes the walls; the
//! client size (integer pixels) sizes the debug canvas.

/// Container size as measured at mount time
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerMetrics {
    /// `getBoundingClientRect().width`
    pub width: f32,
    /// `getBoundingClientRect().height`
    pub height: f32,
    /// `clientWidth`
    pub client_width: u32,
    /// `clientHeight`
    pub client_height: u32,
}

impl ContainerMetrics {
    /// Metrics for a container whose bounding box equals its client box
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            client_width: width.max(0.0).round() as u32,
            client_height: height.max(0.0).round() as u32,
        }
    }

    pub fn with_client_size(mut self, client_width: u32, client_height: u32) -> Self {
        self.client_width = client_width;
        self.client_height = client_height;
        self
    }
}

/// Axis-aligned bounding box (min/max corners)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Aabb {
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }
}
