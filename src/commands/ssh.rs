use crate::areas::controller::Controller;
use crate::areas::runner::CommandRunner;
use crate::areas::ssh::{KEY_SETTINGS_URL, KeyOutcome, SshKeyManager};
use std::path::Path;

impl<R: CommandRunner> Controller<R> {
    /// Makes sure an SSH key exists, shows it for registration and, when a
    /// project is selected, points `origin` at the SSH URL the user pastes.
    pub async fn configure_ssh(&mut self) -> anyhow::Result<()> {
        let Some(email) = self.prompt("GitHub e-mail: ")? else {
            return Ok(());
        };

        let outcome = match self.ssh.ensure_keypair(&self.runner, &email).await {
            Ok(outcome) => outcome,
            Err(err) => {
                return self.error(&format!("Failed to prepare SSH key: {err:#}"));
            }
        };

        match &outcome {
            KeyOutcome::Generated { output, .. } => {
                if !output.trim().is_empty() {
                    self.line(output.trim_end())?;
                }
                self.success("SSH key generated.")?;
            }
            KeyOutcome::Existing(_) => self.info("SSH key already exists.")?,
            KeyOutcome::Missing { output, .. } => {
                let private_key = self.ssh.private_key().display().to_string();
                self.error(&format!("ssh-keygen did not create {private_key}."))?;
                if !output.trim().is_empty() {
                    self.line(output.trim_end())?;
                }
                return Ok(());
            }
        }

        if !self.display_public_key(outcome.public_key_path())? {
            return Ok(());
        }

        if self.project.is_none() {
            return self.warn("Select the project directory first.");
        }

        let Some(url) =
            self.prompt("Repository SSH URL (e.g. git@github.com:user/repo.git): ")?
        else {
            return Ok(());
        };

        if self.run_step(&["remote", "set-url", "origin", url.as_str()]).await? {
            self.success("Repository configured for SSH.")?;
        }

        Ok(())
    }

    /// Prints the public key with registration instructions and waits for ENTER.
    ///
    /// Returns `false` when the key could not be read.
    pub fn display_public_key(&mut self, path: &Path) -> anyhow::Result<bool> {
        let key = match SshKeyManager::read_public_key(path) {
            Ok(key) => key,
            Err(err) => {
                self.error(&format!("{err:#}"))?;
                return Ok(false);
            }
        };

        self.line("")?;
        self.info("Copy and paste this public key into your GitHub account:")?;
        self.line(key.trim_end())?;
        self.line(&format!("Visit: {KEY_SETTINGS_URL}"))?;
        self.line("")?;
        self.prompt("Press ENTER after adding the key...")?;

        Ok(true)
    }
}
