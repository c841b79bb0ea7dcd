//! Error types for report loading and batch comparison.

use oxrdfio::{RdfFormat, RdfSyntaxError};
use std::io;
use std::path::{Path, PathBuf};

/// Error returned when a report file cannot be turned into a graph.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LoadError {
    /// The file is missing or unreadable.
    #[error("Failed to load {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file content is not valid in the format guessed from its extension.
    #[error("Failed to load {} as {}: {source}", path.display(), format.name())]
    Syntax {
        path: PathBuf,
        format: RdfFormat,
        #[source]
        source: RdfSyntaxError,
    },
}

impl LoadError {
    /// Creates an I/O error for the given file.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a syntax error for the given file.
    pub fn syntax(path: impl Into<PathBuf>, format: RdfFormat, source: RdfSyntaxError) -> Self {
        Self::Syntax {
            path: path.into(),
            format,
            source,
        }
    }

    /// The file that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Syntax { path, .. } => path,
        }
    }
}

/// Error returned when the test case directories cannot be listed.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BatchError {
    /// The base directory does not exist.
    #[error("Directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    /// The base directory exists but listing it failed.
    #[error("Failed to list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
