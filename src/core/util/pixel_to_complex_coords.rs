use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;

/// Samples the window linearly: column `x` maps to `rmin + (rmax - rmin) * x / width`,
/// row `y` to `imin + (imax - imin) * y / height`. The far edges are never sampled.
#[must_use]
pub fn pixel_to_complex_coords(pixel: Point, size: GridSize, complex_rect: ComplexRect) -> Complex {
    let real = complex_rect.min().real
        + complex_rect.width() * (pixel.x as f64 / size.width() as f64);
    let imag = complex_rect.min().imag
        + complex_rect.height() * (pixel.y as f64 / size.height() as f64);

    Complex { real, imag }
}
