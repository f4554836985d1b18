use std::path::PathBuf;

/// Appending would push the buffer past its capacity. Nothing was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("buffer full: {requested} bytes requested, {available} available")]
pub struct BufferFull {
    pub requested: usize,
    pub available: usize,
}

/// The buffer's storage could not be reserved at startup.
#[derive(Debug, thiserror::Error)]
#[error("cannot allocate a buffer of {capacity} bytes")]
pub struct AllocError {
    pub capacity: usize,
    #[source]
    pub source: std::collections::TryReserveError,
}

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("bad filename")]
    InvalidPath,

    #[error("error creating file {}", path.display())]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error writing file {}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error opening file {}", path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading file {}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
