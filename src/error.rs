//! Error types for tree walking and rendering.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every failure a tree render can hit. Nothing is skipped silently:
/// listing, metadata, pattern and output errors all end the walk.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("cannot access '{}': No such file or directory", .0.display())]
    RootNotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot read directory '{}': {source}", path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    #[error("cannot stat '{}': {source}", path.display())]
    Metadata { path: PathBuf, source: io::Error },

    #[error("cannot compute size of '{}': {source}", path.display())]
    DirectorySize {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("invalid --{option} pattern '{pattern}': {source}")]
    InvalidPattern {
        option: &'static str,
        pattern: String,
        source: regex::Error,
    },

    #[error("cannot open output file '{}': {source}", path.display())]
    Output { path: PathBuf, source: io::Error },

    #[error("error writing output: {0}")]
    Write(#[source] io::Error),
}

/// Output sinks report through `io::Error`; a `TreeError` they wrapped
/// with `io::Error::other` comes back out unchanged.
impl From<io::Error> for TreeError {
    fn from(e: io::Error) -> Self {
        if !e.get_ref().is_some_and(|inner| inner.is::<TreeError>()) {
            return TreeError::Write(e);
        }
        let kind = e.kind();
        match e.into_inner().map(|inner| inner.downcast::<TreeError>()) {
            Some(Ok(err)) => *err,
            Some(Err(inner)) => TreeError::Write(io::Error::new(kind, inner)),
            None => TreeError::Write(io::Error::from(kind)),
        }
    }
}

impl TreeError {
    pub(crate) fn read_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn metadata(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Metadata {
            path: path.into(),
            source,
        }
    }
}
