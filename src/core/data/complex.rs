/// A sample point in the complex plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// One step of the quadratic map, `self² + c`.
    ///
    /// Evaluated as `(r² - i²) + cr` and `(2r)i + ci`. Escape counts near the
    /// boundary depend on this operation order.
    #[must_use]
    pub fn square_add(self, c: Self) -> Self {
        Self {
            real: self.real * self.real - self.imag * self.imag + c.real,
            imag: 2.0 * self.real * self.imag + c.imag,
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }
}
