use crate::controllers::ports::surface::{Surface, SurfaceError};
use crate::core::data::image_buffer::ImageBuffer;

/// Keeps a copy of the most recently presented image.
#[derive(Debug, Default)]
pub struct MemorySurface {
    last_image: Option<ImageBuffer>,
    presented_count: usize,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last_image(&self) -> Option<&ImageBuffer> {
        self.last_image.as_ref()
    }

    #[must_use]
    pub fn presented_count(&self) -> usize {
        self.presented_count
    }

    pub fn take_image(&mut self) -> Option<ImageBuffer> {
        self.last_image.take()
    }
}

impl Surface for MemorySurface {
    fn present(&mut self, image: &ImageBuffer) -> Result<(), SurfaceError> {
        self.last_image = Some(image.clone());
        self.presented_count += 1;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;

    #[test]
    fn stores_latest_image() {
        let mut surface = MemorySurface::new();
        let first = ImageBuffer::from_pixels(1, 1, vec![Colour::BLACK]).unwrap();
        let second = ImageBuffer::from_pixels(1, 1, vec![Colour::opaque(9, 9, 9)]).unwrap();

        surface.present(&first).unwrap();
        surface.present(&second).unwrap();

        assert_eq!(surface.last_image(), Some(&second));
        assert_eq!(surface.presented_count(), 2);
    }

    #[test]
    fn take_image_empties_the_surface() {
        let mut surface = MemorySurface::new();
        let image = ImageBuffer::from_pixels(1, 1, vec![Colour::BLACK]).unwrap();
        surface.present(&image).unwrap();

        assert_eq!(surface.take_image(), Some(image));
        assert!(surface.last_image().is_none());
    }
}
