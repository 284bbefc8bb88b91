// src/error.rs
use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListError {
    #[error("Unable to open current directory")]
    OpenDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read entry of '{path}': {source}")]
    ReadEntry {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{source}")]
    Metadata {
        name: OsString,
        #[source]
        source: std::io::Error,
    },

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl ListError {
    /// Whether the error ends the whole run rather than a single file's report.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::OpenDirectory { .. } | Self::Output(_))
    }
}

pub type Result<T> = std::result::Result<T, ListError>;
