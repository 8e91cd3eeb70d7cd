mod config;
mod controllers;
mod core;
mod presenters;
mod storage;

pub use config::schedule::{Schedule, ScheduleKind, ScheduleParseError};
pub use config::worker_pool::WorkerPoolConfig;
pub use controllers::cli::convert_args::ConvertArgs;
pub use controllers::cli::render_args::RenderArgs;
pub use controllers::convert::convert_raw_file;
pub use controllers::errors::{ConvertError, RenderError};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::render::{RenderController, RenderReport};
pub use crate::core::actions::compute_escape_field::{
    ComputeEscapeFieldError, EscapeFieldRequest, compute_escape_field,
};
pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
pub use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
pub use crate::core::actions::generate_raster_buffer::generate_raster_buffer::generate_raster_buffer;
pub use crate::core::data::colour::Bgr;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::ComplexRect;
pub use crate::core::data::grid_size::GridSize;
pub use crate::core::data::iteration_grid::IterationGrid;
pub use crate::core::data::point::Point;
pub use crate::core::data::raster_buffer::RasterBuffer;
pub use crate::core::fractals::mandelbrot::algorithm::{
    DEFAULT_MAX_ITERATIONS, MandelbrotAlgorithm, escape_time,
};
pub use crate::core::fractals::mandelbrot::palette::{BandedPalette, colour_of};
pub use presenters::file::bmp::{BmpFilePresenter, write_bmp};
pub use storage::raw_iterations::{
    RawIterationReader, RawStreamError, convert_raw_stream, write_raw_iterations,
};
