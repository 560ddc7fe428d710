use serde::{Deserialize, Serialize};

use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::data::fractal_constant::FractalConstant;
use crate::core::data::iteration_cap::IterationCap;
use crate::core::data::viewport::Viewport;
use crate::core::errors::RenderError;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::fractal_mode::FractalMode;

const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 600;
const DEFAULT_MAX_ITERATIONS: u32 = 256;

/// Unvalidated render parameters, as they arrive from a caller or a config file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderRequest {
    pub kind: FractalKinds,
    pub real: f64,
    pub imaginary: f64,
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub zoom: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub palette: ColourMapKinds,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            kind: FractalKinds::default(),
            real: 0.0,
            imaginary: 0.0,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            zoom: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            palette: ColourMapKinds::default(),
        }
    }
}

/// A request whose every invariant has been checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidRenderRequest {
    pub mode: FractalMode,
    pub viewport: Viewport,
    pub cap: IterationCap,
    pub palette: ColourMapKinds,
}

impl RenderRequest {
    /// Checks dimensions, zoom, offsets and the iteration cap, then the Julia
    /// constant. The constant is ignored in Mandelbrot mode.
    pub fn validate(&self) -> Result<ValidRenderRequest, RenderError> {
        let viewport = Viewport::new(
            self.width,
            self.height,
            self.zoom,
            self.offset_x,
            self.offset_y,
        )?;
        let cap = IterationCap::new(self.max_iterations)?;

        let mode = match self.kind {
            FractalKinds::Mandelbrot => FractalMode::Mandelbrot,
            FractalKinds::Julia => {
                FractalMode::Julia(FractalConstant::new(self.real, self.imaginary)?)
            }
        };

        Ok(ValidRenderRequest {
            mode,
            viewport,
            cap,
            palette: self.palette,
        })
    }
}
