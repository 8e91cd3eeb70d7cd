use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationGridError {
    BoundsMismatch { grid_len: usize, data_len: usize },
}

impl fmt::Display for IterationGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch { grid_len, data_len } => {
                write!(
                    f,
                    "grid of {} cells does not match {} iteration values",
                    grid_len, data_len
                )
            }
        }
    }
}

impl Error for IterationGridError {}

/// Escape-time results laid out row-major; `0` marks a point that never escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationGrid {
    size: GridSize,
    values: Vec<u32>,
}

impl IterationGrid {
    pub fn from_data(size: GridSize, values: Vec<u32>) -> Result<Self, IterationGridError> {
        if size.len() != values.len() {
            return Err(IterationGridError::BoundsMismatch {
                grid_len: size.len(),
                data_len: values.len(),
            });
        }

        Ok(Self { size, values })
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    #[must_use]
    pub fn get(&self, point: Point) -> Option<u32> {
        if !self.size.contains_point(point) {
            return None;
        }

        Some(self.values[self.size.index_of(point)])
    }
}
