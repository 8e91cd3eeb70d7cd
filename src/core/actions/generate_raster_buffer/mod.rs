pub mod generate_raster_buffer;
pub mod ports;
