use std::error::Error;
use std::fmt;
use std::mem::size_of;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AllocationError {
    pub elements: usize,
    pub element_size: usize,
}

impl fmt::Display for AllocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "out of memory: cannot allocate {} elements of {} bytes",
            self.elements, self.element_size
        )
    }
}

impl Error for AllocationError {}

/// Reserves room for exactly `len` elements, reporting exhaustion instead of aborting.
pub fn try_with_capacity<T>(len: usize) -> Result<Vec<T>, AllocationError> {
    let mut buffer = Vec::new();

    buffer
        .try_reserve_exact(len)
        .map_err(|_| AllocationError {
            elements: len,
            element_size: size_of::<T>(),
        })?;

    Ok(buffer)
}

/// Allocates `len` copies of `fill`.
pub fn try_filled<T: Clone>(len: usize, fill: T) -> Result<Vec<T>, AllocationError> {
    let mut buffer = try_with_capacity(len)?;
    buffer.resize(len, fill);

    Ok(buffer)
}
