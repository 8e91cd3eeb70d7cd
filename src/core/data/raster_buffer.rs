use crate::core::data::colour::Bgr;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

fn grid_to_buffer_size(size: GridSize) -> usize {
    size.len().saturating_mul(Bgr::BYTES)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterBufferError {
    BoundsMismatch { grid_bytes: usize, buffer_bytes: usize },
}

impl fmt::Display for RasterBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                grid_bytes,
                buffer_bytes,
            } => {
                write!(
                    f,
                    "grid needs {} bytes but raster buffer holds {}",
                    grid_bytes, buffer_bytes
                )
            }
        }
    }
}

impl Error for RasterBufferError {}

pub type RasterBufferData = Vec<u8>;

/// Row-major BGR samples, three bytes per pixel, ready for serialization.
#[derive(Debug)]
pub struct RasterBuffer {
    size: GridSize,
    buffer: RasterBufferData,
}

impl RasterBuffer {
    pub fn from_data(size: GridSize, buffer: RasterBufferData) -> Result<Self, RasterBufferError> {
        let grid_bytes = grid_to_buffer_size(size);

        if grid_bytes != buffer.len() {
            return Err(RasterBufferError::BoundsMismatch {
                grid_bytes,
                buffer_bytes: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Bgr> {
        if !self.size.contains_point(pixel) {
            return None;
        }

        let index = self.size.index_of(pixel) * Bgr::BYTES;

        Some(Bgr::new(
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
        ))
    }
}
