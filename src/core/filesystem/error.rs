//! Filesystem driver error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a [`FileSystem`](super::FileSystem) implementation.
#[derive(Debug, Error)]
pub enum FsError {
    /// The directory could not be enumerated.
    #[error("cannot read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file could not be read as UTF-8 text.
    #[error("cannot read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file could not be created or overwritten.
    #[error("cannot write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    pub fn read_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// The underlying I/O error kind.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::ReadDir { source, .. }
            | Self::Read { source, .. }
            | Self::Write { source, .. } => source.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path_and_cause() {
        let err = FsError::read(
            "/missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/missing.txt"));
        assert!(msg.contains("no such file"));
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
