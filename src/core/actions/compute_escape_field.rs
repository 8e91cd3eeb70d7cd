use rayon::ThreadPool;
use std::error::Error;
use std::fmt;

use crate::config::schedule::Schedule;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    GenerateFractalError, generate_fractal_parallel_rayon,
};
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::grid_size::{GridSize, GridSizeError};
use crate::core::data::iteration_grid::{IterationGrid, IterationGridError};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

#[derive(Debug, Clone, PartialEq)]
pub enum ComputeEscapeFieldError {
    GridSize(GridSizeError),
    ComplexRect(ComplexRectError),
    Mandelbrot(MandelbrotError),
    Generate(GenerateFractalError),
    IterationGrid(IterationGridError),
}

impl fmt::Display for ComputeEscapeFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridSize(err) => write!(f, "invalid grid: {}", err),
            Self::ComplexRect(err) => write!(f, "invalid plane window: {}", err),
            Self::Mandelbrot(err) => write!(f, "invalid iteration bound: {}", err),
            Self::Generate(err) => write!(f, "{}", err),
            Self::IterationGrid(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ComputeEscapeFieldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::GridSize(err) => Some(err),
            Self::ComplexRect(err) => Some(err),
            Self::Mandelbrot(err) => Some(err),
            Self::Generate(err) => Some(err),
            Self::IterationGrid(err) => Some(err),
        }
    }
}

impl From<GridSizeError> for ComputeEscapeFieldError {
    fn from(err: GridSizeError) -> Self {
        Self::GridSize(err)
    }
}

impl From<ComplexRectError> for ComputeEscapeFieldError {
    fn from(err: ComplexRectError) -> Self {
        Self::ComplexRect(err)
    }
}

impl From<MandelbrotError> for ComputeEscapeFieldError {
    fn from(err: MandelbrotError) -> Self {
        Self::Mandelbrot(err)
    }
}

impl From<GenerateFractalError> for ComputeEscapeFieldError {
    fn from(err: GenerateFractalError) -> Self {
        Self::Generate(err)
    }
}

impl From<IterationGridError> for ComputeEscapeFieldError {
    fn from(err: IterationGridError) -> Self {
        Self::IterationGrid(err)
    }
}

/// Plain-number description of one escape-time field.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeFieldRequest {
    pub width: u32,
    pub height: u32,
    pub rmin: f64,
    pub rmax: f64,
    pub imin: f64,
    pub imax: f64,
    pub max_iterations: u32,
}

impl EscapeFieldRequest {
    /// Validates the request into the algorithm that computes it.
    pub fn algorithm(&self) -> Result<MandelbrotAlgorithm, ComputeEscapeFieldError> {
        let size = GridSize::new(self.width, self.height)?;
        let complex_rect = ComplexRect::from_bounds(self.rmin, self.rmax, self.imin, self.imax)?;

        Ok(MandelbrotAlgorithm::new(size, complex_rect, self.max_iterations)?)
    }
}

/// Computes the escape-time field for `request`, returning a row-major grid of
/// counts in `[0, max_iterations)`.
pub fn compute_escape_field(
    request: &EscapeFieldRequest,
    pool: &ThreadPool,
    schedule: Schedule,
) -> Result<IterationGrid, ComputeEscapeFieldError> {
    let algorithm = request.algorithm()?;
    let values = generate_fractal_parallel_rayon(algorithm.size(), &algorithm, pool, schedule)?;

    Ok(IterationGrid::from_data(algorithm.size(), values)?)
}
