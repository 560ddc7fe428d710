use crate::core::errors::InvalidParameter;

/// Maps a pixel grid onto the complex plane.
///
/// Offsets are measured in pixels at zoom 1 and are converted to plane units
/// by the same `max(width, height)` scale the transform uses for pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pixel_width: u32,
    pixel_height: u32,
    zoom: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Viewport {
    pub fn new(
        pixel_width: u32,
        pixel_height: u32,
        zoom: f64,
        offset_x: f64,
        offset_y: f64,
    ) -> Result<Self, InvalidParameter> {
        if pixel_width == 0 {
            return Err(InvalidParameter::ZeroWidth);
        }

        if pixel_height == 0 {
            return Err(InvalidParameter::ZeroHeight);
        }

        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(InvalidParameter::Zoom(zoom));
        }

        if !offset_x.is_finite() || !offset_y.is_finite() {
            return Err(InvalidParameter::Offset {
                x: offset_x,
                y: offset_y,
            });
        }

        Ok(Self {
            pixel_width,
            pixel_height,
            zoom,
            offset_x,
            offset_y,
        })
    }

    /// A zoom-1, unpanned viewport of the given size.
    pub fn centred(pixel_width: u32, pixel_height: u32) -> Result<Self, InvalidParameter> {
        Self::new(pixel_width, pixel_height, 1.0, 0.0, 0.0)
    }

    #[must_use]
    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    #[must_use]
    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    #[must_use]
    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    /// The larger of the two dimensions; keeps the plane scale isotropic.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.pixel_width.max(self.pixel_height)
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.pixel_width as usize * self.pixel_height as usize
    }
}
