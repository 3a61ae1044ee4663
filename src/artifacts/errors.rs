use std::path::PathBuf;

/// Problems reading or writing the persisted configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed configuration {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write configuration {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Why a user-supplied path was rejected as the project directory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("path is empty")]
    Empty,

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("not a Git repository (missing .git): {}", .0.display())]
    NotARepository(PathBuf),
}

/// Raised when an action needs a selected project directory and none is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PreconditionError {
    #[error("no project directory selected")]
    NoProjectSelected,
}
