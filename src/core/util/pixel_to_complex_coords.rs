use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;

/// Width and height of the plane region visible at zoom 1, in plane units.
pub const PLANE_SPAN: f64 = 4.0;

/// Maps a (possibly fractional) pixel position onto the complex plane.
///
/// The canvas centre maps to the panned origin. Both axes share the scale
/// `PLANE_SPAN / max(width, height)`, so non-square canvases are not stretched.
#[must_use]
pub fn pixel_to_complex_coords(px: f64, py: f64, viewport: Viewport) -> Complex {
    let size = viewport.size() as f64;
    let nx = (px - viewport.pixel_width() as f64 / 2.0) / size;
    let ny = (py - viewport.pixel_height() as f64 / 2.0) / size;

    Complex {
        real: nx * PLANE_SPAN / viewport.zoom() + viewport.offset_x() * PLANE_SPAN / size,
        imag: ny * PLANE_SPAN / viewport.zoom() + viewport.offset_y() * PLANE_SPAN / size,
    }
}
