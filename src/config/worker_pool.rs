use crate::config::schedule::Schedule;
use log::info;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use std::num::NonZeroUsize;

/// Size and scheduling policy of the worker pool used for both render stages.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct WorkerPoolConfig {
    /// Worker count; `None` uses one worker per available core.
    pub threads: Option<NonZeroUsize>,
    pub schedule: Schedule,
}

impl WorkerPoolConfig {
    #[must_use]
    pub fn new(threads: Option<NonZeroUsize>, schedule: Schedule) -> Self {
        Self { threads, schedule }
    }

    pub fn build_pool(&self) -> Result<ThreadPool, ThreadPoolBuildError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.threads.map_or(0, NonZeroUsize::get))
            .thread_name(|index| format!("escape-field-{}", index))
            .build()?;

        info!(
            "built worker pool with {} threads, schedule {}",
            pool.current_num_threads(),
            self.schedule
        );

        Ok(pool)
    }
}
