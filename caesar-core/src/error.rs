//! Error types for persisting candidate sets

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The one failure a [`Store`](crate::store::Store) reports.
///
/// A missing directory, a permission problem, a full disk or a failed
/// rename all surface as `DestinationUnavailable`; the caller only needs
/// to know the record was not written and where it was headed.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The record could not be written to (or read from) `path`.
    #[error("cannot use {}: {source}", .path.display())]
    DestinationUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    pub fn destination_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::DestinationUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Path the failed operation was aimed at
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::DestinationUnavailable { path, .. } => path,
        }
    }

    /// Underlying I/O error kind
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::DestinationUnavailable { source, .. } => source.kind(),
        }
    }
}
