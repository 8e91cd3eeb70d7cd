use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::config::schedule::Schedule;
use crate::config::worker_pool::WorkerPoolConfig;
use crate::core::actions::compute_escape_field::EscapeFieldRequest;
use crate::core::fractals::mandelbrot::algorithm::DEFAULT_MAX_ITERATIONS;

/// Render the Mandelbrot escape-time field of a rectangle of the complex
/// plane to a 24-bit BMP.
#[derive(Debug, Parser)]
#[command(name = "mandel", version)]
pub struct RenderArgs {
    /// Grid width in pixels
    pub width: u32,
    /// Grid height in pixels
    pub height: u32,
    /// Real coordinate of the left edge
    #[arg(allow_negative_numbers = true)]
    pub rmin: f32,
    /// Real coordinate one column past the last
    #[arg(allow_negative_numbers = true)]
    pub rmax: f32,
    /// Imaginary coordinate of the first row
    #[arg(allow_negative_numbers = true)]
    pub imin: f32,
    /// Imaginary coordinate one row past the last
    #[arg(allow_negative_numbers = true)]
    pub imax: f32,

    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    #[arg(short, long, default_value = "result.bmp")]
    pub output: PathBuf,

    /// Also write the raw iteration counts to this file
    #[arg(long, value_name = "FILE")]
    pub raw: Option<PathBuf>,

    /// Worker threads [default: one per core]
    #[arg(long, env = "MANDEL_NUM_THREADS")]
    pub threads: Option<NonZeroUsize>,

    /// Row scheduling, `static[,chunk]` or `dynamic[,chunk]`
    #[arg(long, env = "MANDEL_SCHEDULE", default_value = "static")]
    pub schedule: Schedule,
}

impl RenderArgs {
    /// Bounds are parsed at single precision, then widened.
    #[must_use]
    pub fn request(&self) -> EscapeFieldRequest {
        EscapeFieldRequest {
            width: self.width,
            height: self.height,
            rmin: f64::from(self.rmin),
            rmax: f64::from(self.rmax),
            imin: f64::from(self.imin),
            imax: f64::from(self.imax),
            max_iterations: self.max_iterations,
        }
    }

    #[must_use]
    pub fn pool_config(&self) -> WorkerPoolConfig {
        WorkerPoolConfig::new(self.threads, self.schedule)
    }
}
