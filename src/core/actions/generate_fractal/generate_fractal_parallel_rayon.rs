use log::{debug, trace};
use rayon::ThreadPool;
use rayon::prelude::*;
use std::error::Error;
use std::fmt;

use crate::config::schedule::Schedule;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use crate::core::util::try_allocate::{AllocationError, try_filled};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateFractalError {
    Allocation(AllocationError),
}

impl fmt::Display for GenerateFractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation(err) => write!(f, "cannot allocate iteration grid: {}", err),
        }
    }
}

impl Error for GenerateFractalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Allocation(err) => Some(err),
        }
    }
}

impl From<AllocationError> for GenerateFractalError {
    fn from(err: AllocationError) -> Self {
        Self::Allocation(err)
    }
}

/// Generates fractal data on `pool`, one task per band of whole rows.
///
/// The output is pre-sized and each task owns a disjoint slice of it, so the
/// only synchronization is the join at the end of `install`. Results are
/// row-major and identical to [`generate_fractal_serial`] for any pool size
/// or schedule.
///
/// [`generate_fractal_serial`]: crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial
pub fn generate_fractal_parallel_rayon<Alg>(
    size: GridSize,
    algorithm: &Alg,
    pool: &ThreadPool,
    schedule: Schedule,
) -> Result<Vec<Alg::Success>, GenerateFractalError>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send + Clone + Default,
{
    let width = size.width() as usize;
    let rows_per_task = schedule.rows_per_task(size.height() as usize, pool.current_num_threads());
    let mut values = try_filled(size.len(), Alg::Success::default())?;

    debug!(
        "generating {}x{} field on {} threads, {} rows per task ({})",
        size.width(),
        size.height(),
        pool.current_num_threads(),
        rows_per_task,
        schedule
    );

    pool.install(|| {
        values
            .par_chunks_mut(rows_per_task.saturating_mul(width))
            .enumerate()
            .for_each(|(band, cells)| {
                let first_row = band * rows_per_task;
                trace!("band {} starts at row {}", band, first_row);
                fill_band(algorithm, first_row, width, cells);
            });
    });

    Ok(values)
}

fn fill_band<Alg: FractalAlgorithm>(
    algorithm: &Alg,
    first_row: usize,
    width: usize,
    cells: &mut [Alg::Success],
) {
    for (offset, row) in cells.chunks_mut(width).enumerate() {
        let y = (first_row + offset) as u32;

        for (x, cell) in row.iter_mut().enumerate() {
            *cell = algorithm.compute(Point { x: x as u32, y });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schedule::ScheduleKind;
    use crate::config::worker_pool::WorkerPoolConfig;
    use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
    use std::num::NonZeroUsize;

    #[derive(Debug)]
    struct StubAlgorithm {}

    impl FractalAlgorithm for StubAlgorithm {
        type Success = u64;

        fn compute(&self, pixel: Point) -> Self::Success {
            (pixel.y as u64) * 1000 + pixel.x as u64
        }
    }

    fn pool(threads: usize) -> ThreadPool {
        WorkerPoolConfig::new(NonZeroUsize::new(threads), Schedule::default())
            .build_pool()
            .unwrap()
    }

    fn schedules() -> Vec<Schedule> {
        vec![
            Schedule::default(),
            Schedule::new(ScheduleKind::Dynamic, None),
            Schedule::new(ScheduleKind::Static, NonZeroUsize::new(3)),
            Schedule::new(ScheduleKind::Dynamic, NonZeroUsize::new(1000)),
        ]
    }

    #[test]
    fn test_rayon_generates_same_results_as_serial() {
        let size = GridSize::new(11, 9).unwrap();
        let serial = generate_fractal_serial(size, &StubAlgorithm {}).unwrap();

        for threads in [1, 2, 3, 8] {
            let pool = pool(threads);

            for schedule in schedules() {
                let parallel =
                    generate_fractal_parallel_rayon(size, &StubAlgorithm {}, &pool, schedule).unwrap();

                assert_eq!(parallel, serial, "threads {} schedule {}", threads, schedule);
            }
        }
    }

    #[test]
    fn test_rayon_with_single_pixel() {
        let size = GridSize::new(1, 1).unwrap();

        let result =
            generate_fractal_parallel_rayon(size, &StubAlgorithm {}, &pool(4), Schedule::default())
                .unwrap();

        assert_eq!(result, vec![0]);
    }

    #[test]
    fn test_rayon_with_more_workers_than_rows() {
        let size = GridSize::new(5, 2).unwrap();
        let serial = generate_fractal_serial(size, &StubAlgorithm {}).unwrap();

        let parallel =
            generate_fractal_parallel_rayon(size, &StubAlgorithm {}, &pool(8), Schedule::default())
                .unwrap();

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_rayon_with_large_grid() {
        let size = GridSize::new(101, 101).unwrap();
        let serial = generate_fractal_serial(size, &StubAlgorithm {}).unwrap();

        let parallel = generate_fractal_parallel_rayon(
            size,
            &StubAlgorithm {},
            &pool(4),
            Schedule::new(ScheduleKind::Dynamic, NonZeroUsize::new(7)),
        )
        .unwrap();

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_generate_fractal_error_display() {
        let err = GenerateFractalError::Allocation(AllocationError {
            elements: 10,
            element_size: 4,
        });

        assert_eq!(
            err.to_string(),
            "cannot allocate iteration grid: out of memory: cannot allocate 10 elements of 4 bytes"
        );
    }
}
