use std::time::Instant;

use crate::controllers::image::ImageError;
use crate::controllers::ports::surface::Surface;
use crate::core::actions::render::render::render_validated;
use crate::core::actions::render::render_request::{RenderRequest, ValidRenderRequest};
use crate::core::data::image_buffer::ImageBuffer;

/// Renders one request, reports progress on stdout, then hands the image to
/// its surface.
pub struct CliController<S: Surface> {
    surface: S,
    image: Option<ImageBuffer>,
}

impl<S: Surface> CliController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            image: None,
        }
    }

    /// Validates and renders `request`. On failure the previous image is
    /// discarded, so a later `write` presents nothing.
    pub fn generate(&mut self, request: &RenderRequest) -> Result<(), ImageError> {
        self.image = None;

        let ValidRenderRequest {
            mode,
            viewport,
            cap,
            palette,
        } = request.validate()?;

        println!("Rendering {} set...", mode.kind());
        println!(
            "Image size: {}x{}",
            viewport.pixel_width(),
            viewport.pixel_height()
        );
        println!("Max iterations: {}", cap.get());

        let start = Instant::now();
        let image = render_validated(mode, viewport, cap, palette);
        let duration = start.elapsed();

        println!("Duration:   {:?}", duration);

        self.image = Some(image);

        Ok(())
    }

    pub fn write(&mut self) -> Result<(), ImageError> {
        if let Some(image) = &self.image {
            self.surface.present(image)?;
        }

        Ok(())
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageBuffer> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
