use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while generating a lookup table.
#[derive(Debug, Error)]
pub enum GenError {
    /// The input could not be read or the output could not be written.
    #[error("failed to {action} {}", .path.display())]
    FileAccess {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Every entry was filtered out, so there is nothing to emit.
    #[error("no enumerators left after prefix stripping and filtering")]
    EmptyInput,

    /// The JSON config file is unreadable or malformed.
    #[error("invalid config file {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl GenError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileAccess {
            action: "read",
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileAccess {
            action: "write",
            path: path.into(),
            source,
        }
    }
}
