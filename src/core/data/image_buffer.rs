use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageBufferError {
    #[error("image of {width}x{height} needs {expected} pixels, got {actual}")]
    BoundsMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// A finished, row-major RGBA image. Read-only once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Colour>,
}

impl ImageBuffer {
    pub fn from_pixels(
        width: u32,
        height: u32,
        pixels: Vec<Colour>,
    ) -> Result<Self, ImageBufferError> {
        let expected = width as usize * height as usize;

        if expected != pixels.len() {
            return Err(ImageBufferError::BoundsMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    // callers guarantee one pixel per viewport cell
    pub(crate) fn from_grid(viewport: Viewport, pixels: Vec<Colour>) -> Self {
        debug_assert_eq!(pixels.len(), viewport.pixel_count());

        Self {
            width: viewport.pixel_width(),
            height: viewport.pixel_height(),
            pixels,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[must_use]
    pub fn pixel(&self, point: Point) -> Option<Colour> {
        if point.x >= self.width || point.y >= self.height {
            return None;
        }

        let index = point.y as usize * self.width as usize + point.x as usize;
        self.pixels.get(index).copied()
    }

    /// Flattens to `[r, g, b, a, r, g, b, a, ...]`, the layout canvas image data expects.
    #[must_use]
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|colour| [colour.r, colour.g, colour.b, colour.a])
            .collect()
    }

    /// Flattens to `[r, g, b, ...]`, dropping alpha.
    #[must_use]
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|colour| [colour.r, colour.g, colour.b])
            .collect()
    }
}
