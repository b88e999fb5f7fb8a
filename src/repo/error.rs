use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::object::MalformedFrame;

/// Describes the potential error conditions that might arise from `Repo` operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no object at {0}")]
    NotFound(PathBuf),

    /// The object file exists but isn't a complete zlib stream.
    #[error("corrupt object at {path}: {source}")]
    CorruptObject {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    MalformedFrame(#[from] MalformedFrame),

    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("store root {0} doesn't exist")]
    RootDoesntExist(PathBuf),
}

impl Error {
    pub(crate) fn io<P: Into<PathBuf>>(path: P) -> impl FnOnce(io::Error) -> Error {
        let path = path.into();
        move |source| Error::IoError { path, source }
    }
}

/// A specialized `Result` type for `Repo` operations.
pub type Result<T> = std::result::Result<T, Error>;
