//! Validation errors raised before any pixel work begins.

use thiserror::Error;

/// The specific parameter that made a render request invalid.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidParameter {
    #[error("pixel width must be greater than zero")]
    ZeroWidth,

    #[error("pixel height must be greater than zero")]
    ZeroHeight,

    #[error("zoom must be a positive finite number, got {0}")]
    Zoom(f64),

    #[error("offset must be finite, got ({x}, {y})")]
    Offset { x: f64, y: f64 },

    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RenderError {
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[from] InvalidParameter),

    #[error("fractal constant must be finite, got {real} + {imaginary}i")]
    NonFiniteInput { real: f64, imaginary: f64 },
}
