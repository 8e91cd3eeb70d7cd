pub mod colour;
pub mod complex;
pub mod complex_rect;
pub mod grid_size;
pub mod iteration_grid;
pub mod point;
pub mod raster_buffer;
