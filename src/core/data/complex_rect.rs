use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    NonFinite { min: Complex, max: Complex },
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { min, max } => {
                write!(
                    f,
                    "complex rect bounds must be finite: real {}..{}, imag {}..{}",
                    min.real, max.real, min.imag, max.imag
                )
            }
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex rect size must be positive (rmin < rmax, imin < imax): {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// Axis-aligned window of the complex plane, `min` holding `(rmin, imin)` and
/// `max` holding `(rmax, imax)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    min: Complex,
    max: Complex,
}

impl ComplexRect {
    pub fn new(min: Complex, max: Complex) -> Result<Self, ComplexRectError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ComplexRectError::NonFinite { min, max });
        }

        let width = max.real - min.real;
        let height = max.imag - min.imag;

        if width <= 0.0 || height <= 0.0 {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self { min, max })
    }

    /// Builds the window from the bound order used on the command line.
    pub fn from_bounds(rmin: f64, rmax: f64, imin: f64, imax: f64) -> Result<Self, ComplexRectError> {
        Self::new(Complex::new(rmin, imin), Complex::new(rmax, imax))
    }

    #[must_use]
    pub fn min(&self) -> Complex {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Complex {
        self.max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.real - self.min.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.imag - self.min.imag
    }
}
