use crate::areas::controller::Controller;
use crate::areas::runner::CommandRunner;
use crate::artifacts::project_path::ProjectPath;
use tracing::debug;

impl<R: CommandRunner> Controller<R> {
    /// Asks for a repository path; on success it becomes the current project
    /// and is persisted. An invalid path leaves state and configuration as-is.
    pub fn select_directory(&mut self) -> anyhow::Result<()> {
        let Some(input) = self.prompt("Project path (e.g. /home/me/project): ")? else {
            return Ok(());
        };

        let project = match ProjectPath::try_parse(&input) {
            Ok(project) => project,
            Err(err) => {
                debug!("rejected project directory: {err}");
                return self.error("Invalid path or not a Git repository.");
            }
        };

        if let Err(err) = self.config.save(&project) {
            self.warn(&format!("Failed to save configuration: {err}"))?;
        }

        self.success(&format!("Project directory set: {project}"))?;
        self.project = Some(project);

        Ok(())
    }
}
