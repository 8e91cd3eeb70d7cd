pub mod pixel_to_complex_coords;
pub mod try_allocate;
