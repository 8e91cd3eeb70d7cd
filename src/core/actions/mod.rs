pub mod compute_escape_field;
pub mod generate_fractal;
pub mod generate_raster_buffer;
