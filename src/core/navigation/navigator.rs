use crate::core::data::viewport::Viewport;
use crate::core::errors::RenderError;
use crate::core::navigation::limits::NavigationLimits;

/// Pan and zoom state driven by wheel and drag gestures.
///
/// Offsets are kept in zoom-1 pixels, the unit [`Viewport`] expects. A drag is
/// divided by the current zoom before it is applied, so the plane point under
/// the pointer stays under the pointer at every zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Navigator {
    zoom: f64,
    offset_x: f64,
    offset_y: f64,
    limits: NavigationLimits,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(NavigationLimits::default())
    }
}

impl Navigator {
    #[must_use]
    pub fn new(limits: NavigationLimits) -> Self {
        Self {
            zoom: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            limits,
        }
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    /// One wheel event. Positive `delta_y` zooms in, negative zooms out.
    pub fn scroll(&mut self, delta_y: f64) {
        if delta_y > 0.0 {
            self.zoom += self.limits.zoom_step;
        } else if delta_y < 0.0 {
            self.zoom = (self.zoom - self.limits.zoom_step).max(self.limits.min_zoom);
        }
    }

    /// Pointer moved by `(dx, dy)` screen pixels while dragging.
    pub fn drag(&mut self, dx: f64, dy: f64) {
        if !dx.is_finite() || !dy.is_finite() {
            return;
        }

        let scale = self.limits.pan_step_per_pixel / self.zoom;
        self.offset_x -= dx * scale;
        self.offset_y -= dy * scale;
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.limits);
    }

    pub fn viewport(&self, pixel_width: u32, pixel_height: u32) -> Result<Viewport, RenderError> {
        Ok(Viewport::new(
            pixel_width,
            pixel_height,
            self.zoom,
            self.offset_x,
            self.offset_y,
        )?)
    }
}
