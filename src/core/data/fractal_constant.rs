use crate::core::data::complex::Complex;
use crate::core::errors::RenderError;

/// The fixed `c` of a Julia set. Both parts are guaranteed finite.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FractalConstant {
    real: f64,
    imaginary: f64,
}

impl FractalConstant {
    pub fn new(real: f64, imaginary: f64) -> Result<Self, RenderError> {
        if !real.is_finite() || !imaginary.is_finite() {
            return Err(RenderError::NonFiniteInput { real, imaginary });
        }

        Ok(Self { real, imaginary })
    }

    // only for compile-time tables of known finite values
    pub(crate) const fn from_finite(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    #[must_use]
    pub fn real(&self) -> f64 {
        self.real
    }

    #[must_use]
    pub fn imaginary(&self) -> f64 {
        self.imaginary
    }

    #[must_use]
    pub fn as_complex(&self) -> Complex {
        Complex::new(self.real, self.imaginary)
    }
}
