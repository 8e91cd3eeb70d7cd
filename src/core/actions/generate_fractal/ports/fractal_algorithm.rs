use crate::core::data::point::Point;

/// Per-pixel computation of a fractal field. Implementations are pure, so any
/// partition of the grid across workers yields the same values.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, pixel: Point) -> Self::Success;
}
