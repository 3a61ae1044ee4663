use crate::areas::controller::Controller;
use crate::areas::runner::CommandRunner;

impl<R: CommandRunner> Controller<R> {
    /// Stages everything, commits and pushes.
    ///
    /// The chain is not transactional: every step runs even if an earlier one
    /// failed, unless fail-fast mode is on. The HTTPS check before the push is
    /// advisory and never stops the chain.
    pub async fn commit_and_push(&mut self) -> anyhow::Result<()> {
        let Some(message) = self.prompt("Commit message: ")? else {
            return Ok(());
        };

        let added = self.run_step(&["add", "."]).await?;
        if self.should_halt(added)? {
            return Ok(());
        }

        let committed = self.run_step(&["commit", "-m", message.as_str()]).await?;
        if self.should_halt(committed)? {
            return Ok(());
        }

        self.verify_ssh_url().await?;
        self.run_step(&["push"]).await?;

        Ok(())
    }
}
