use crate::areas::controller::Controller;
use crate::areas::runner::CommandRunner;

impl<R: CommandRunner> Controller<R> {
    /// Uncommitted changes, as reported by `git status`.
    pub async fn show_changes(&mut self) -> anyhow::Result<()> {
        self.run_in_project(&["status"]).await?;
        Ok(())
    }

    pub async fn status(&mut self) -> anyhow::Result<()> {
        self.run_in_project(&["status"]).await?;
        Ok(())
    }
}
