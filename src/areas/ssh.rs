use crate::areas::runner::CommandRunner;
use crate::artifacts::invocation::Invocation;
use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const KEYGEN_PROGRAM: &str = "ssh-keygen";
const DEFAULT_KEY_FILE: &str = "id_ed25519";

/// Where the hosting provider lists registered SSH keys.
pub const KEY_SETTINGS_URL: &str = "https://github.com/settings/keys";

/// Result of [`SshKeyManager::ensure_keypair`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// `output` is what ssh-keygen printed on stdout (fingerprint, randomart).
    Generated { public_key: PathBuf, output: String },
    Existing(PathBuf),
    /// `ssh-keygen` ran but no private key appeared afterwards; `output` is its stderr.
    Missing { public_key: PathBuf, output: String },
}

impl KeyOutcome {
    pub fn public_key_path(&self) -> &Path {
        match self {
            KeyOutcome::Generated { public_key, .. }
            | KeyOutcome::Missing { public_key, .. }
            | KeyOutcome::Existing(public_key) => public_key,
        }
    }
}

/// Owns the location of the ed25519 keypair used for Git over SSH.
#[derive(Debug, Clone, new)]
pub struct SshKeyManager {
    private_key: PathBuf,
}

impl SshKeyManager {
    /// `~/.ssh/id_ed25519`
    pub fn default_key_path() -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir().context("could not determine the home directory")?;
        Ok(home.join(".ssh").join(DEFAULT_KEY_FILE))
    }

    pub fn private_key(&self) -> &Path {
        &self.private_key
    }

    pub fn public_key(&self) -> PathBuf {
        let mut name = self.private_key.as_os_str().to_owned();
        name.push(".pub");
        PathBuf::from(name)
    }

    pub fn keygen_invocation(&self, email: &str) -> Invocation {
        Invocation::new(
            KEYGEN_PROGRAM.to_string(),
            vec![
                "-t".to_string(),
                "ed25519".to_string(),
                "-C".to_string(),
                email.to_string(),
                "-f".to_string(),
                self.private_key.to_string_lossy().into_owned(),
                "-N".to_string(),
                String::new(),
            ],
            None,
        )
    }

    /// Generates the keypair unless the private key already exists.
    pub async fn ensure_keypair<R: CommandRunner>(
        &self,
        runner: &R,
        email: &str,
    ) -> anyhow::Result<KeyOutcome> {
        let public_key = self.public_key();

        if self.private_key.exists() {
            debug!(key = %self.private_key.display(), "reusing existing ssh key");
            return Ok(KeyOutcome::Existing(public_key));
        }

        if let Some(parent) = self.private_key.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let result = runner.run(&self.keygen_invocation(email)).await?;
        if !result.success {
            warn!(stderr = %result.stderr.trim(), "ssh-keygen exited with failure");
        }

        if self.private_key.exists() {
            Ok(KeyOutcome::Generated {
                public_key,
                output: result.stdout,
            })
        } else {
            Ok(KeyOutcome::Missing {
                public_key,
                output: result.stderr,
            })
        }
    }

    pub fn read_public_key(path: &Path) -> anyhow::Result<String> {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read public key {}", path.display()))
    }
}
