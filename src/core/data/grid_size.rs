use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridSizeError {
    ZeroSize { width: u32, height: u32 },
    TooLarge { width: u32, height: u32 },
}

impl fmt::Display for GridSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize { width, height } => {
                write!(f, "grid size must be positive: {}x{}", width, height)
            }
            Self::TooLarge { width, height } => {
                write!(f, "grid size {}x{} overflows the addressable pixel count", width, height)
            }
        }
    }
}

impl Error for GridSizeError {}

/// Dimensions of a row-major pixel grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridSize {
    width: u32,
    height: u32,
}

impl GridSize {
    pub fn new(width: u32, height: u32) -> Result<Self, GridSizeError> {
        if width == 0 || height == 0 {
            return Err(GridSizeError::ZeroSize { width, height });
        }

        (width as usize)
            .checked_mul(height as usize)
            .ok_or(GridSizeError::TooLarge { width, height })?;

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells; cannot overflow, `new` rejects sizes that would.
    #[must_use]
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Row-major index of `point`, `y * width + x`.
    #[must_use]
    pub fn index_of(&self, point: Point) -> usize {
        point.y as usize * self.width as usize + point.x as usize
    }
}
