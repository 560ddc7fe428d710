use crate::core::data::point::Point;

/// A pure per-pixel computation over a fixed grid.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, pixel: Point) -> Self::Success;

    fn width(&self) -> u32;

    fn height(&self) -> u32;
}
