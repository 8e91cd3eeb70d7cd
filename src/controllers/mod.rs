pub mod cli;
pub mod convert;
pub mod errors;
pub mod ports;
pub mod render;
