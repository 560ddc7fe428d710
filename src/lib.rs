mod controllers;
mod core;
mod presenters;

pub use controllers::cli::args::{Cli, CliError, DEFAULT_OUTPUT};
pub use controllers::cli::config::{ConfigError, load_config};
pub use controllers::cli::controller::CliController;
pub use controllers::image::{
    ImageError, generate_julia_image, generate_mandelbrot_image, present_request,
};
pub use controllers::ports::surface::{Surface, SurfaceError};

pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
pub use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render::ports::colour_map::ColourMap;
pub use crate::core::actions::render::render::{
    render, render_validated, render_with_colour_map, render_with_defaults,
};
pub use crate::core::actions::render::render_request::{RenderRequest, ValidRenderRequest};
pub use crate::core::colour_mapping::factory::colour_map_factory;
pub use crate::core::colour_mapping::kinds::{ColourMapKinds, UnknownColourMapKind};
pub use crate::core::colour_mapping::map::{EscapeColourMap, INTERIOR_COLOUR};
pub use crate::core::colour_mapping::maps::blue_white_gradient::BlueWhiteGradient;
pub use crate::core::colour_mapping::maps::fire_gradient::FireGradient;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::escape_result::EscapeResult;
pub use crate::core::data::fractal_constant::FractalConstant;
pub use crate::core::data::image_buffer::{ImageBuffer, ImageBufferError};
pub use crate::core::data::iteration_cap::IterationCap;
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::errors::{InvalidParameter, RenderError};
pub use crate::core::fractals::algorithm::EscapeTimeAlgorithm;
pub use crate::core::fractals::escape_time::{BAILOUT_SQUARED, evaluate};
pub use crate::core::fractals::fractal_kinds::{FractalKinds, UnknownFractalKind};
pub use crate::core::fractals::fractal_mode::FractalMode;
pub use crate::core::fractals::presets::{JULIA_PRESETS, JuliaPreset, find_julia_preset};
pub use crate::core::navigation::limits::NavigationLimits;
pub use crate::core::navigation::navigator::Navigator;
pub use crate::core::util::pixel_to_complex_coords::{PLANE_SPAN, pixel_to_complex_coords};

pub use presenters::file::ppm::{PpmFilePresenter, write_ppm};
pub use presenters::memory::MemorySurface;
