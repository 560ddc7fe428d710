use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Each row is an independent task writing only its own slice of the output,
/// so no synchronisation is needed beyond rayon's join. Results are in
/// row-major order and identical to [`generate_fractal_serial`].
///
/// [`generate_fractal_serial`]: crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial
pub fn generate_fractal_parallel_rayon<Alg>(algorithm: &Alg) -> Vec<Alg::Success>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send + Clone + Default,
{
    let width = algorithm.width() as usize;
    let height = algorithm.height() as usize;
    let mut results = vec![Alg::Success::default(); width * height];

    if width == 0 {
        return results;
    }

    results
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, slot) in row.iter_mut().enumerate() {
                *slot = algorithm.compute(Point {
                    x: x as u32,
                    y: y as u32,
                });
            }
        });

    results
}
