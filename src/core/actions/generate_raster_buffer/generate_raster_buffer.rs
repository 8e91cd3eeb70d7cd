use crate::core::actions::generate_raster_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Bgr;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::raster_buffer::{RasterBuffer, RasterBufferError};
use crate::core::util::try_allocate::{AllocationError, try_filled};
use log::debug;
use rayon::ThreadPool;
use rayon::prelude::*;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GenerateRasterBufferError {
    Allocation(AllocationError),
    RasterBuffer(RasterBufferError),
}

impl fmt::Display for GenerateRasterBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation(err) => write!(f, "cannot allocate raster buffer: {}", err),
            Self::RasterBuffer(err) => write!(f, "raster buffer error: {}", err),
        }
    }
}

impl Error for GenerateRasterBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Allocation(err) => Some(err),
            Self::RasterBuffer(err) => Some(err),
        }
    }
}

impl From<AllocationError> for GenerateRasterBufferError {
    fn from(err: AllocationError) -> Self {
        Self::Allocation(err)
    }
}

impl From<RasterBufferError> for GenerateRasterBufferError {
    fn from(err: RasterBufferError) -> Self {
        Self::RasterBuffer(err)
    }
}

/// Colours every cell of a fully computed grid on `pool`.
///
/// Each cell is mapped independently into its own three bytes of the output,
/// keeping the grid's row-major layout.
pub fn generate_raster_buffer<CMap>(
    grid: &IterationGrid,
    mapper: &CMap,
    pool: &ThreadPool,
) -> Result<RasterBuffer, GenerateRasterBufferError>
where
    CMap: ColourMap<T = u32> + Sync,
{
    let mut data = try_filled(grid.values().len().saturating_mul(Bgr::BYTES), 0u8)?;

    debug!(
        "colouring {} cells with {}",
        grid.values().len(),
        mapper.display_name()
    );

    pool.install(|| {
        data.par_chunks_exact_mut(Bgr::BYTES)
            .zip(grid.values().par_iter())
            .for_each(|(sample, &iterations)| {
                sample.copy_from_slice(&mapper.map(iterations).to_bytes());
            });
    });

    Ok(RasterBuffer::from_data(grid.size(), data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::worker_pool::WorkerPoolConfig;
    use crate::core::data::grid_size::GridSize;
    use crate::core::data::point::Point;
    use crate::core::fractals::mandelbrot::palette::{BandedPalette, colour_of};

    struct StubColourMap {}

    impl ColourMap for StubColourMap {
        type T = u32;

        fn map(&self, value: u32) -> Bgr {
            Bgr::new(value as u8, (value * 2) as u8, (value * 3) as u8)
        }

        fn display_name(&self) -> &str {
            "Stub"
        }
    }

    fn pool() -> ThreadPool {
        WorkerPoolConfig::default().build_pool().unwrap()
    }

    #[test]
    fn test_maps_each_cell_in_place() {
        let size = GridSize::new(2, 2).unwrap();
        let grid = IterationGrid::from_data(size, vec![1, 2, 3, 4]).unwrap();

        let buffer = generate_raster_buffer(&grid, &StubColourMap {}, &pool()).unwrap();

        assert_eq!(
            buffer.buffer(),
            &[1, 2, 3, 2, 4, 6, 3, 6, 9, 4, 8, 12]
        );
    }

    #[test]
    fn test_raster_keeps_grid_dimensions() {
        let size = GridSize::new(5, 3).unwrap();
        let grid = IterationGrid::from_data(size, vec![0; 15]).unwrap();

        let buffer = generate_raster_buffer(&grid, &BandedPalette, &pool()).unwrap();

        assert_eq!(buffer.size(), size);
        assert_eq!(buffer.buffer_size(), 45);
    }

    #[test]
    fn test_palette_output_matches_per_cell_colour() {
        let size = GridSize::new(4, 3).unwrap();
        let values: Vec<u32> = vec![0, 1, 2, 199, 200, 201, 500, 0, 7, 1999, 128, 64];
        let grid = IterationGrid::from_data(size, values.clone()).unwrap();

        let buffer = generate_raster_buffer(&grid, &BandedPalette, &pool()).unwrap();

        for y in 0..3 {
            for x in 0..4 {
                let iterations = values[y as usize * 4 + x as usize];

                assert_eq!(buffer.pixel(Point { x, y }), Some(colour_of(iterations)));
            }
        }
        assert_eq!(buffer.pixel(Point { x: 0, y: 0 }), Some(Bgr::BLACK));
    }
}
