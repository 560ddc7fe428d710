#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationLimits {
    /// Zoom change per wheel event.
    pub zoom_step: f64,
    /// Zoom never drops below this.
    pub min_zoom: f64,
    /// Offset change, in zoom-1 pixels, per screen pixel of drag at zoom 1.
    pub pan_step_per_pixel: f64,
}

impl Default for NavigationLimits {
    fn default() -> Self {
        Self {
            zoom_step: 0.03,
            min_zoom: 0.03,
            pan_step_per_pixel: 1.0,
        }
    }
}
