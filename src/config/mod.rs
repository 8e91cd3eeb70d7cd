//! Runtime tuning read from the command line and the environment.
//!
//! Nothing here changes computed values; it only decides how the work is
//! spread across the worker pool.

pub mod schedule;
pub mod worker_pool;
