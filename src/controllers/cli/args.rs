use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::controllers::cli::config::{ConfigError, load_config};
use crate::core::actions::render::render_request::RenderRequest;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::presets::find_julia_preset;

pub const DEFAULT_OUTPUT: &str = "output/fractal.ppm";

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("unknown Julia preset \"{0}\" (try --list-presets)")]
    UnknownPreset(String),
}

/// Render a Mandelbrot or Julia set to a PPM image.
///
/// Flags override values loaded with --config.
#[derive(Parser, Debug)]
#[command(name = "escape_fractals", version)]
pub struct Cli {
    /// JSON render settings to start from
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// mandelbrot or julia
    #[arg(long)]
    pub mode: Option<FractalKinds>,

    /// Named Julia constant, e.g. "-0.8 + 0.156i"
    #[arg(long, allow_hyphen_values = true)]
    pub preset: Option<String>,

    /// Real part of the Julia constant
    #[arg(long, allow_negative_numbers = true)]
    pub real: Option<f64>,

    /// Imaginary part of the Julia constant
    #[arg(long, allow_negative_numbers = true)]
    pub imaginary: Option<f64>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    /// Iteration cap per pixel
    #[arg(long)]
    pub iterations: Option<u32>,

    #[arg(long)]
    pub zoom: Option<f64>,

    /// Horizontal pan in zoom-1 pixels
    #[arg(long, allow_negative_numbers = true)]
    pub offset_x: Option<f64>,

    /// Vertical pan in zoom-1 pixels
    #[arg(long, allow_negative_numbers = true)]
    pub offset_y: Option<f64>,

    /// fire-gradient or blue-white-gradient
    #[arg(long)]
    pub palette: Option<ColourMapKinds>,

    #[arg(long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Print the named Julia constants and exit
    #[arg(long)]
    pub list_presets: bool,
}

impl Cli {
    /// Builds the request: defaults or --config first, then --preset, then
    /// the individual flags.
    pub fn to_request(&self) -> Result<RenderRequest, CliError> {
        let mut request = match &self.config {
            Some(path) => load_config(path)?,
            None => RenderRequest::default(),
        };

        if let Some(name) = &self.preset {
            let preset =
                find_julia_preset(name).ok_or_else(|| CliError::UnknownPreset(name.clone()))?;
            request.kind = FractalKinds::Julia;
            request.real = preset.constant().real();
            request.imaginary = preset.constant().imaginary();
        }

        if let Some(kind) = self.mode {
            request.kind = kind;
        }
        if let Some(real) = self.real {
            request.real = real;
        }
        if let Some(imaginary) = self.imaginary {
            request.imaginary = imaginary;
        }
        if let Some(width) = self.width {
            request.width = width;
        }
        if let Some(height) = self.height {
            request.height = height;
        }
        if let Some(iterations) = self.iterations {
            request.max_iterations = iterations;
        }
        if let Some(zoom) = self.zoom {
            request.zoom = zoom;
        }
        if let Some(offset_x) = self.offset_x {
            request.offset_x = offset_x;
        }
        if let Some(offset_y) = self.offset_y {
            request.offset_y = offset_y;
        }
        if let Some(palette) = self.palette {
            request.palette = palette;
        }

        Ok(request)
    }
}
