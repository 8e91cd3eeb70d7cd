pub mod raw_iterations;
