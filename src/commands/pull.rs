use crate::areas::controller::Controller;
use crate::areas::runner::CommandRunner;

impl<R: CommandRunner> Controller<R> {
    pub async fn pull(&mut self) -> anyhow::Result<()> {
        self.verify_ssh_url().await?;
        self.run_in_project(&["pull"]).await?;
        Ok(())
    }
}
