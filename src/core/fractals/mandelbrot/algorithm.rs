use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// Bailout radius of the quadratic map.
const ESCAPE_RADIUS: f64 = 2.0;

const ESCAPE_RADIUS_SQUARED: f64 = ESCAPE_RADIUS * ESCAPE_RADIUS;

/// Default iteration budget of the renderer.
pub const DEFAULT_MAX_ITERATIONS: u32 = 2000;

/// Counts the iterations of `z -> z² + c`, starting from `z = c` at count 1,
/// until `|z|² > 4` or the count reaches `max_iterations`.
///
/// The divergence test runs before each update. Points that exhaust the budget
/// are reported as `0`, so every result lies in `[0, max_iterations)`.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = c;
    let mut iteration = 1;

    while z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED && iteration < max_iterations {
        z = z.square_add(c);
        iteration += 1;
    }

    if iteration == max_iterations {
        0
    } else {
        iteration
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    size: GridSize,
    complex_rect: ComplexRect,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    fn compute(&self, pixel: Point) -> u32 {
        let c = pixel_to_complex_coords(pixel, self.size, self.complex_rect);

        escape_time(c, self.max_iterations)
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        size: GridSize,
        complex_rect: ComplexRect,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self {
            size,
            complex_rect,
            max_iterations,
        })
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }
}
