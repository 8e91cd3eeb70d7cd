use rayon::ThreadPoolBuildError;
use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::actions::compute_escape_field::ComputeEscapeFieldError;
use crate::core::actions::generate_raster_buffer::generate_raster_buffer::GenerateRasterBufferError;

#[derive(Debug)]
pub enum RenderError {
    ThreadPool(ThreadPoolBuildError),
    Compute(ComputeEscapeFieldError),
    Raster(GenerateRasterBufferError),
    NothingRendered,
    Io { path: PathBuf, source: io::Error },
}

impl RenderError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThreadPool(err) => write!(f, "cannot start worker pool: {}", err),
            Self::Compute(err) => write!(f, "{}", err),
            Self::Raster(err) => write!(f, "{}", err),
            Self::NothingRendered => write!(f, "nothing has been rendered yet"),
            Self::Io { path, source } => {
                write!(f, "cannot write {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ThreadPool(err) => Some(err),
            Self::Compute(err) => Some(err),
            Self::Raster(err) => Some(err),
            Self::NothingRendered => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ThreadPoolBuildError> for RenderError {
    fn from(err: ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err)
    }
}

impl From<ComputeEscapeFieldError> for RenderError {
    fn from(err: ComputeEscapeFieldError) -> Self {
        Self::Compute(err)
    }
}

impl From<GenerateRasterBufferError> for RenderError {
    fn from(err: GenerateRasterBufferError) -> Self {
        Self::Raster(err)
    }
}

#[derive(Debug)]
pub enum ConvertError {
    Input { path: PathBuf, source: io::Error },
    Output { path: PathBuf, source: io::Error },
}

impl ConvertError {
    pub(crate) fn input(path: &Path, source: io::Error) -> Self {
        Self::Input {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn output(path: &Path, source: io::Error) -> Self {
        Self::Output {
            path: path.to_path_buf(),
            source,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Input { path, .. } | Self::Output { path, .. } => path,
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input { path, source } => write!(f, "cannot read {}: {}", path.display(), source),
            Self::Output { path, source } => {
                write!(f, "cannot write {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for ConvertError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Input { source, .. } | Self::Output { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_name_the_file() {
        let err = RenderError::io(
            Path::new("out/result.bmp"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );

        assert_eq!(err.to_string(), "cannot write out/result.bmp: denied");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_convert_error_keeps_offending_path() {
        let err = ConvertError::input(
            Path::new("missing.raw"),
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );

        assert_eq!(err.path(), Path::new("missing.raw"));
        assert_eq!(err.to_string(), "cannot read missing.raw: no such file");
    }
}
