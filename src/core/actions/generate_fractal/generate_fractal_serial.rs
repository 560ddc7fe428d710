use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Computes every pixel on the calling thread, in row-major order.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(algorithm: &Alg) -> Vec<Alg::Success> {
    let width = algorithm.width();

    (0..algorithm.height())
        .flat_map(|y| (0..width).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct IndexAlgorithm {
        width: u32,
        height: u32,
    }

    impl FractalAlgorithm for IndexAlgorithm {
        type Success = u32;

        fn compute(&self, pixel: Point) -> u32 {
            pixel.y * self.width + pixel.x
        }

        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }
    }

    #[test]
    fn test_results_are_row_major() {
        let algorithm = IndexAlgorithm { width: 4, height: 3 };
        let results = generate_fractal_serial(&algorithm);

        assert_eq!(results, (0..12).collect::<Vec<u32>>());
    }

    #[test]
    fn test_single_pixel() {
        let algorithm = IndexAlgorithm { width: 1, height: 1 };

        assert_eq!(generate_fractal_serial(&algorithm), vec![0]);
    }
}
