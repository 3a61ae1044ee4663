//! Persisted project selection
//!
//! The configuration is a JSON object with a single recognized key,
//! `projeto_path`. Unknown keys are ignored when reading and the file is fully
//! overwritten when saving.

use crate::artifacts::errors::ConfigError;
use crate::artifacts::project_path::ProjectPath;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_CONFIG_FILE: &str = "config.json";

#[derive(Debug, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(rename = "projeto_path")]
    project_path: PathBuf,
}

#[derive(Debug, Clone, new)]
pub struct ConfigStore {
    path: PathBuf,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_CONFIG_FILE))
    }
}

impl ConfigStore {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the saved project directory if it still exists.
    ///
    /// Never fails: a missing file or stale path yields `None`, an unreadable or
    /// malformed file is logged as a warning and also yields `None`.
    pub fn load(&self) -> Option<ProjectPath> {
        self.try_load().unwrap_or_else(|err| {
            warn!("failed to load configuration: {err}");
            None
        })
    }

    /// Like [`Self::load`] but hands unreadable or malformed files back to the
    /// caller so it can tell the user. Missing files and stale paths are still `Ok(None)`.
    pub fn try_load(&self) -> Result<Option<ProjectPath>, ConfigError> {
        let Some(saved) = self.read()? else {
            return Ok(None);
        };

        let project = ProjectPath::from_saved(saved.clone());
        if project.is_none() {
            debug!(path = %saved.display(), "saved project directory no longer exists");
        }
        Ok(project)
    }

    pub fn save(&self, project: &ProjectPath) -> Result<(), ConfigError> {
        let content = serde_json::to_string(&ConfigFile {
            project_path: project.as_path().to_path_buf(),
        })
        .map_err(ConfigError::Serialize)?;

        std::fs::write(&self.path, content).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })?;

        debug!(config = %self.path.display(), project = %project, "saved project directory");
        Ok(())
    }

    fn read(&self) -> Result<Option<PathBuf>, ConfigError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;

        let config: ConfigFile =
            serde_json::from_str(&content).map_err(|source| ConfigError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        Ok(Some(config.project_path))
    }
}
