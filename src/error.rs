use std::path::PathBuf;

use thiserror::Error;

/// Caller mistakes. Raised before any prompt is shown.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContractError {
    #[error("maxNameLength must be equal to or greater than 1")]
    InvalidMaxNameLength,
    #[error("directoryName must be non-empty")]
    EmptyDirectoryName,
    #[error("directoryName must be relative to the storage root: {0}")]
    DirectoryEscapesRoot(String),
}

/// Why a candidate filename was refused on confirm.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilenameError {
    #[error("filename is empty")]
    Empty,
    #[error("filename contains invalid character {0:?}")]
    InvalidCharacter(char),
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed settings {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// A second export was started while one is still waiting on its dialog.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("export already in progress")]
pub struct ExportInProgress;
