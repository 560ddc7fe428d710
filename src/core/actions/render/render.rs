use std::time::Instant;

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render::ports::colour_map::ColourMap;
use crate::core::actions::render::render_request::{RenderRequest, ValidRenderRequest};
use crate::core::colour_mapping::factory::colour_map_factory;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::data::colour::Colour;
use crate::core::data::image_buffer::ImageBuffer;
use crate::core::data::iteration_cap::IterationCap;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::errors::RenderError;
use crate::core::fractals::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::fractal_mode::FractalMode;

/// Escape-time classification followed by colouring, as one pure per-pixel step.
struct ColouredEscapeTime<'a, CMap: ?Sized> {
    algorithm: EscapeTimeAlgorithm,
    colour_map: &'a CMap,
}

impl<CMap: ColourMap + ?Sized> FractalAlgorithm for ColouredEscapeTime<'_, CMap> {
    type Success = Colour;

    #[inline]
    fn compute(&self, pixel: Point) -> Colour {
        self.colour_map.map(self.algorithm.compute(pixel))
    }

    fn width(&self) -> u32 {
        self.algorithm.width()
    }

    fn height(&self) -> u32 {
        self.algorithm.height()
    }
}

/// Validates `request` and renders it. Nothing is computed if validation fails.
pub fn render(request: &RenderRequest) -> Result<ImageBuffer, RenderError> {
    let ValidRenderRequest {
        mode,
        viewport,
        cap,
        palette,
    } = request.validate()?;

    Ok(render_validated(mode, viewport, cap, palette))
}

/// Renders already-validated parameters with the given palette.
#[must_use]
pub fn render_validated(
    mode: FractalMode,
    viewport: Viewport,
    cap: IterationCap,
    palette: ColourMapKinds,
) -> ImageBuffer {
    let colour_map = colour_map_factory(palette, cap);
    render_with_colour_map(mode, viewport, cap, &colour_map)
}

/// Renders with the default palette.
#[must_use]
pub fn render_with_defaults(mode: FractalMode, viewport: Viewport, cap: IterationCap) -> ImageBuffer {
    render_validated(mode, viewport, cap, ColourMapKinds::default())
}

/// Renders with a caller-supplied colour map.
#[must_use]
pub fn render_with_colour_map<CMap>(
    mode: FractalMode,
    viewport: Viewport,
    cap: IterationCap,
    colour_map: &CMap,
) -> ImageBuffer
where
    CMap: ColourMap + Sync + ?Sized,
{
    let coloured = ColouredEscapeTime {
        algorithm: EscapeTimeAlgorithm::new(viewport, mode, cap),
        colour_map,
    };

    let start = Instant::now();
    let pixels = generate_fractal_parallel_rayon(&coloured);

    log::debug!(
        "rendered {} {}x{} (zoom {}, cap {}, palette {}) in {:?}",
        mode.display_name(),
        viewport.pixel_width(),
        viewport.pixel_height(),
        viewport.zoom(),
        cap.get(),
        colour_map.display_name(),
        start.elapsed()
    );

    ImageBuffer::from_grid(viewport, pixels)
}
