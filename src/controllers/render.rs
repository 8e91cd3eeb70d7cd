use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use crate::config::worker_pool::WorkerPoolConfig;
use crate::controllers::errors::RenderError;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::compute_escape_field::{EscapeFieldRequest, compute_escape_field};
use crate::core::actions::generate_raster_buffer::generate_raster_buffer::generate_raster_buffer;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::raster_buffer::RasterBuffer;
use crate::core::fractals::mandelbrot::palette::BandedPalette;
use crate::storage::raw_iterations::write_raw_iterations;

/// What a completed [`RenderController::generate`] call did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub threads: usize,
    /// Wall-clock time of the escape-time computation alone.
    pub elapsed: Duration,
}

pub struct RenderController<P: FilePresenterPort> {
    presenter: P,
    pool_config: WorkerPoolConfig,
    grid: Option<IterationGrid>,
    buffer: Option<RasterBuffer>,
}

impl<P: FilePresenterPort> RenderController<P> {
    pub fn new(presenter: P, pool_config: WorkerPoolConfig) -> Self {
        Self {
            presenter,
            pool_config,
            grid: None,
            buffer: None,
        }
    }

    pub fn generate(&mut self, request: &EscapeFieldRequest) -> Result<RenderReport, RenderError> {
        let pool = self.pool_config.build_pool()?;

        let start = Instant::now();
        let grid = compute_escape_field(request, &pool, self.pool_config.schedule)?;
        let elapsed = start.elapsed();

        debug!("escape field computed in {:?}", elapsed);

        let buffer = generate_raster_buffer(&grid, &BandedPalette, &pool)?;

        self.grid = Some(grid);
        self.buffer = Some(buffer);

        Ok(RenderReport {
            threads: pool.current_num_threads(),
            elapsed,
        })
    }

    #[must_use]
    pub fn grid(&self) -> Option<&IterationGrid> {
        self.grid.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = filepath.as_ref();
        let buffer = self.buffer.as_ref().ok_or(RenderError::NothingRendered)?;

        self.presenter
            .present(buffer, path)
            .map_err(|source| RenderError::io(path, source))
    }

    /// Persists the iteration grid in the format `raw_to_colour` reads.
    pub fn write_raw(&self, filepath: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = filepath.as_ref();
        let grid = self.grid.as_ref().ok_or(RenderError::NothingRendered)?;
        let file = File::create(path).map_err(|source| RenderError::io(path, source))?;
        let mut writer = BufWriter::new(file);

        write_raw_iterations(grid, &mut writer)
            .and_then(|()| writer.flush())
            .map_err(|source| RenderError::io(path, source))
    }
}
