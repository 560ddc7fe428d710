//! The two entry points UI glue calls to draw a fractal onto a surface.

use thiserror::Error;

use crate::controllers::ports::surface::{Surface, SurfaceError};
use crate::core::actions::render::render::render;
use crate::core::actions::render::render_request::RenderRequest;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::errors::RenderError;
use crate::core::fractals::fractal_kinds::FractalKinds;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Renders `request` and hands the whole image to `surface`.
///
/// Nothing reaches the surface when validation fails.
pub fn present_request<S>(surface: &mut S, request: &RenderRequest) -> Result<(), ImageError>
where
    S: Surface + ?Sized,
{
    let image = render(request)?;
    surface.present(&image)?;

    Ok(())
}

pub fn generate_mandelbrot_image<S>(
    surface: &mut S,
    width: u32,
    height: u32,
    max_iterations: u32,
    zoom: f64,
    offset_x: f64,
    offset_y: f64,
) -> Result<(), ImageError>
where
    S: Surface + ?Sized,
{
    let request = RenderRequest {
        kind: FractalKinds::Mandelbrot,
        real: 0.0,
        imaginary: 0.0,
        width,
        height,
        max_iterations,
        zoom,
        offset_x,
        offset_y,
        palette: ColourMapKinds::default(),
    };

    present_request(surface, &request)
}

#[allow(clippy::too_many_arguments)]
pub fn generate_julia_image<S>(
    surface: &mut S,
    width: u32,
    height: u32,
    real: f64,
    imaginary: f64,
    max_iterations: u32,
    zoom: f64,
    offset_x: f64,
    offset_y: f64,
) -> Result<(), ImageError>
where
    S: Surface + ?Sized,
{
    let request = RenderRequest {
        kind: FractalKinds::Julia,
        real,
        imaginary,
        width,
        height,
        max_iterations,
        zoom,
        offset_x,
        offset_y,
        palette: ColourMapKinds::default(),
    };

    present_request(surface, &request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour_mapping::map::INTERIOR_COLOUR;
    use crate::core::data::image_buffer::ImageBuffer;
    use crate::core::data::point::Point;
    use crate::core::errors::InvalidParameter;
    use crate::presenters::memory::MemorySurface;

    struct FailingSurface {}

    impl Surface for FailingSurface {
        fn present(&mut self, _: &ImageBuffer) -> Result<(), SurfaceError> {
            Err(SurfaceError::Io(std::io::Error::other("surface gone")))
        }
    }

    #[test]
    fn mandelbrot_image_reaches_the_surface() {
        let mut surface = MemorySurface::new();

        generate_mandelbrot_image(&mut surface, 100, 100, 50, 1.0, 0.0, 0.0).unwrap();

        let image = surface.last_image().unwrap();
        assert_eq!(image.width(), 100);
        assert_eq!(image.height(), 100);
        assert_eq!(image.pixel(Point { x: 50, y: 50 }), Some(INTERIOR_COLOUR));
        assert_eq!(surface.presented_count(), 1);
    }

    #[test]
    fn julia_image_reaches_the_surface() {
        let mut surface = MemorySurface::new();

        generate_julia_image(&mut surface, 40, 30, -0.8, 0.156, 64, 1.0, 0.0, 0.0).unwrap();

        let image = surface.last_image().unwrap();
        assert_eq!(image.len(), 40 * 30);
    }

    #[test]
    fn zero_iterations_from_bad_input_is_rejected() {
        let mut surface = MemorySurface::new();

        let result = generate_mandelbrot_image(&mut surface, 100, 100, 0, 1.0, 0.0, 0.0);

        assert!(matches!(
            result,
            Err(ImageError::Render(RenderError::InvalidParameters(
                InvalidParameter::ZeroMaxIterations
            )))
        ));
        assert!(surface.last_image().is_none());
    }

    #[test]
    fn non_finite_julia_constant_never_reaches_the_surface() {
        let mut surface = MemorySurface::new();

        let result =
            generate_julia_image(&mut surface, 10, 10, f64::NAN, 0.0, 10, 1.0, 0.0, 0.0);

        assert!(matches!(
            result,
            Err(ImageError::Render(RenderError::NonFiniteInput { .. }))
        ));
        assert_eq!(surface.presented_count(), 0);
    }

    #[test]
    fn surface_failure_is_reported() {
        let mut surface = FailingSurface {};

        let result = generate_mandelbrot_image(&mut surface, 8, 8, 10, 1.0, 0.0, 0.0);

        assert!(matches!(result, Err(ImageError::Surface(SurfaceError::Io(_)))));
    }
}
