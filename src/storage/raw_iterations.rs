//! Flat stream of escape counts, one little-endian `u32` per cell in row-major order.

use crate::core::actions::generate_raster_buffer::ports::colour_map::ColourMap;
use crate::core::data::iteration_grid::IterationGrid;
use log::warn;
use std::error::Error;
use std::fmt;
use std::io::{self, ErrorKind, Read, Write};

pub const RAW_VALUE_BYTES: usize = size_of::<u32>();

#[derive(Debug)]
pub enum RawStreamError {
    Read(io::Error),
    Write(io::Error),
}

impl fmt::Display for RawStreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(err) => write!(f, "read failed: {}", err),
            Self::Write(err) => write!(f, "write failed: {}", err),
        }
    }
}

impl Error for RawStreamError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read(err) => Some(err),
            Self::Write(err) => Some(err),
        }
    }
}

pub fn write_raw_iterations<W: Write>(grid: &IterationGrid, writer: &mut W) -> io::Result<()> {
    for value in grid.values() {
        writer.write_all(&value.to_le_bytes())?;
    }

    Ok(())
}

/// Reads one value at a time from `reader`.
///
/// Iteration stops at the first short read; the number of bytes left over is
/// available from [`RawIterationReader::trailing_bytes`].
pub struct RawIterationReader<R> {
    reader: R,
    trailing_bytes: usize,
    finished: bool,
}

impl<R: Read> RawIterationReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            trailing_bytes: 0,
            finished: false,
        }
    }

    #[must_use]
    pub fn trailing_bytes(&self) -> usize {
        self.trailing_bytes
    }

    fn read_value(&mut self) -> io::Result<Option<u32>> {
        let mut bytes = [0u8; RAW_VALUE_BYTES];
        let mut filled = 0;

        while filled < RAW_VALUE_BYTES {
            match self.reader.read(&mut bytes[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }

        if filled < RAW_VALUE_BYTES {
            self.trailing_bytes = filled;
            return Ok(None);
        }

        Ok(Some(u32::from_le_bytes(bytes)))
    }
}

impl<R: Read> Iterator for RawIterationReader<R> {
    type Item = io::Result<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.read_value() {
            Ok(Some(value)) => Some(Ok(value)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

/// Colours a raw stream value by value, writing three bytes per input value.
///
/// Returns the number of samples written. Nothing beyond a single value is
/// held in memory.
pub fn convert_raw_stream<R, W, CMap>(
    reader: R,
    writer: &mut W,
    mapper: &CMap,
) -> Result<u64, RawStreamError>
where
    R: Read,
    W: Write,
    CMap: ColourMap<T = u32>,
{
    let mut values = RawIterationReader::new(reader);
    let mut samples = 0u64;

    for value in values.by_ref() {
        let colour = mapper.map(value.map_err(RawStreamError::Read)?);
        writer
            .write_all(&colour.to_bytes())
            .map_err(RawStreamError::Write)?;
        samples += 1;
    }

    if values.trailing_bytes() > 0 {
        warn!(
            "ignoring {} trailing bytes that do not form a whole value",
            values.trailing_bytes()
        );
    }

    Ok(samples)
}
