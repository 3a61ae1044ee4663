use crate::areas::controller::Controller;
use crate::areas::runner::CommandRunner;

impl<R: CommandRunner> Controller<R> {
    /// Creates a lightweight tag and pushes it to `origin`.
    pub async fn create_tag(&mut self) -> anyhow::Result<()> {
        let Some(tag) = self.prompt("New version tag (e.g. v1.0.0): ")? else {
            return Ok(());
        };

        let tagged = self.run_step(&["tag", tag.as_str()]).await?;
        if self.should_halt(tagged)? {
            return Ok(());
        }

        self.run_step(&["push", "origin", tag.as_str()]).await?;

        Ok(())
    }
}
