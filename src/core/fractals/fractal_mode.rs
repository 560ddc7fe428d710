use crate::core::data::complex::Complex;
use crate::core::data::fractal_constant::FractalConstant;
use crate::core::fractals::fractal_kinds::FractalKinds;

/// Selects which half of the `(z0, c)` pair varies per pixel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FractalMode {
    Mandelbrot,
    Julia(FractalConstant),
}

impl FractalMode {
    /// Returns `(z0, c)` for the evaluator given the pixel's plane coordinate.
    #[inline]
    #[must_use]
    pub fn start_and_constant(&self, coord: Complex) -> (Complex, Complex) {
        match self {
            Self::Mandelbrot => (Complex::ZERO, coord),
            Self::Julia(constant) => (coord, constant.as_complex()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> FractalKinds {
        match self {
            Self::Mandelbrot => FractalKinds::Mandelbrot,
            Self::Julia(_) => FractalKinds::Julia,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        self.kind().display_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mandelbrot_varies_the_constant() {
        let coord = Complex::new(0.25, -0.5);

        assert_eq!(
            FractalMode::Mandelbrot.start_and_constant(coord),
            (Complex::ZERO, coord)
        );
    }

    #[test]
    fn julia_varies_the_start() {
        let coord = Complex::new(0.25, -0.5);
        let constant = FractalConstant::new(-0.4, 0.6).unwrap();

        assert_eq!(
            FractalMode::Julia(constant).start_and_constant(coord),
            (coord, Complex::new(-0.4, 0.6))
        );
    }

    #[test]
    fn kind_matches_variant() {
        let constant = FractalConstant::new(0.0, 0.0).unwrap();

        assert_eq!(FractalMode::Mandelbrot.kind(), FractalKinds::Mandelbrot);
        assert_eq!(FractalMode::Julia(constant).kind(), FractalKinds::Julia);
        assert_eq!(FractalMode::Julia(constant).display_name(), "Julia");
    }
}
