use std::error::Error;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleParseError {
    UnknownKind(String),
    InvalidChunkSize(String),
}

impl fmt::Display for ScheduleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKind(kind) => {
                write!(f, "unknown schedule kind '{}', expected 'static' or 'dynamic'", kind)
            }
            Self::InvalidChunkSize(chunk) => {
                write!(f, "chunk size '{}' must be a positive integer", chunk)
            }
        }
    }
}

impl Error for ScheduleParseError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ScheduleKind {
    /// One contiguous band of rows per worker unless a chunk size is given.
    #[default]
    Static,
    /// Small bands handed out as workers become free.
    Dynamic,
}

impl fmt::Display for ScheduleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static => f.write_str("static"),
            Self::Dynamic => f.write_str("dynamic"),
        }
    }
}

/// How rows are grouped into tasks, written `kind[,chunk]` (e.g. `dynamic,4`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Schedule {
    kind: ScheduleKind,
    chunk_rows: Option<NonZeroUsize>,
}

impl Schedule {
    #[must_use]
    pub const fn new(kind: ScheduleKind, chunk_rows: Option<NonZeroUsize>) -> Self {
        Self { kind, chunk_rows }
    }

    /// Rows in each task for a grid of `height` rows spread over `workers` threads.
    #[must_use]
    pub fn rows_per_task(&self, height: usize, workers: usize) -> usize {
        if let Some(chunk) = self.chunk_rows {
            return chunk.get();
        }

        match self.kind {
            ScheduleKind::Static => height.div_ceil(workers.max(1)).max(1),
            ScheduleKind::Dynamic => 1,
        }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.chunk_rows {
            Some(chunk) => write!(f, "{},{}", self.kind, chunk),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl FromStr for Schedule {
    type Err = ScheduleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, chunk) = match s.split_once(',') {
            Some((kind, chunk)) => (kind.trim(), Some(chunk.trim())),
            None => (s.trim(), None),
        };

        let kind = match kind.to_ascii_lowercase().as_str() {
            "static" => ScheduleKind::Static,
            "dynamic" => ScheduleKind::Dynamic,
            _ => return Err(ScheduleParseError::UnknownKind(kind.to_string())),
        };

        let chunk_rows = chunk
            .map(|chunk| {
                chunk
                    .parse::<NonZeroUsize>()
                    .map_err(|_| ScheduleParseError::InvalidChunkSize(chunk.to_string()))
            })
            .transpose()?;

        Ok(Self { kind, chunk_rows })
    }
}
