use crate::areas::controller::Controller;
use crate::areas::runner::CommandRunner;
use crate::artifacts::invocation::Invocation;
use crate::artifacts::remote;

pub const HTTPS_WARNING: &str = "Your repository is configured with HTTPS.";
pub const HTTPS_HINT: &str = "Switching to SSH with option 7 (Configure SSH) is recommended.";

impl<R: CommandRunner> Controller<R> {
    /// Warns when `git remote -v` mentions an `https://` URL.
    ///
    /// Returns whether the warning was shown. Never blocks the caller: a failing
    /// `git remote -v` is reported and treated as "no warning".
    pub async fn verify_ssh_url(&mut self) -> anyhow::Result<bool> {
        let Ok(project) = self.require_project() else {
            return Ok(false);
        };

        let invocation = Invocation::git(["remote", "-v"], project.as_path());
        let output = match self.runner.run(&invocation).await {
            Ok(result) if result.success => result.stdout,
            Ok(result) => {
                self.error(&format!(
                    "Could not check remote URL: {}",
                    result.stderr.trim()
                ))?;
                return Ok(false);
            }
            Err(err) => {
                self.error(&format!("Could not check remote URL: {err:#}"))?;
                return Ok(false);
            }
        };

        if !remote::uses_https(&output) {
            return Ok(false);
        }

        self.warn(HTTPS_WARNING)?;
        for entry in remote::https_remotes(&output)? {
            self.line(&format!("  {} -> {}", entry.name, entry.url))?;
        }
        self.warn(HTTPS_HINT)?;

        Ok(true)
    }
}
