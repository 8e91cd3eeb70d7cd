use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use crate::core::util::try_allocate::{AllocationError, try_with_capacity};

/// Computes every cell on the calling thread, in row-major order.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    size: GridSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, AllocationError> {
    let mut values = try_with_capacity(size.len())?;

    values.extend(
        (0..size.height())
            .flat_map(|y| (0..size.width()).map(move |x| Point { x, y }))
            .map(|pixel| algorithm.compute(pixel)),
    );

    Ok(values)
}
