use thiserror::Error;

use crate::core::data::image_buffer::ImageBuffer;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

/// Caller-owned destination for finished images.
///
/// Implementations must not assume the image outlives the call.
pub trait Surface {
    fn present(&mut self, image: &ImageBuffer) -> Result<(), SurfaceError>;
}
