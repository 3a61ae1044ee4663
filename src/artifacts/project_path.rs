use crate::artifacts::errors::SelectionError;
use std::path::{Path, PathBuf};

const GIT_DIR: &str = ".git";

/// Directory of the local repository the menu operates on.
///
/// The path is kept exactly as the user typed it, so the persisted value matches
/// what was entered rather than a canonicalized form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectPath(PathBuf);

impl ProjectPath {
    /// Validates user input: the path must be an existing directory holding a
    /// `.git` subdirectory.
    pub fn try_parse(input: &str) -> Result<Self, SelectionError> {
        if input.is_empty() {
            return Err(SelectionError::Empty);
        }

        let path = PathBuf::from(input);
        if !path.is_dir() {
            return Err(SelectionError::NotADirectory(path));
        }

        if !path.join(GIT_DIR).is_dir() {
            return Err(SelectionError::NotARepository(path));
        }

        Ok(Self(path))
    }

    /// Accepts a previously saved path as long as it is still a directory.
    pub fn from_saved(path: PathBuf) -> Option<Self> {
        path.is_dir().then_some(Self(path))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for ProjectPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl std::fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
