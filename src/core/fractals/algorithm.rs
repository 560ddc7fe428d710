use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::iteration_cap::IterationCap;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::evaluate;
use crate::core::fractals::fractal_mode::FractalMode;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// Escape-time classification of every pixel in a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTimeAlgorithm {
    viewport: Viewport,
    mode: FractalMode,
    cap: IterationCap,
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, mode: FractalMode, cap: IterationCap) -> Self {
        Self {
            viewport,
            mode,
            cap,
        }
    }
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = EscapeResult;

    #[inline]
    fn compute(&self, pixel: Point) -> EscapeResult {
        let coord = pixel_to_complex_coords(pixel.x as f64, pixel.y as f64, self.viewport);
        let (z0, c) = self.mode.start_and_constant(coord);

        evaluate(z0, c, self.cap)
    }

    fn width(&self) -> u32 {
        self.viewport.pixel_width()
    }

    fn height(&self) -> u32 {
        self.viewport.pixel_height()
    }
}
