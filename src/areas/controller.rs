use crate::areas::config::ConfigStore;
use crate::areas::runner::{CommandRunner, ProcessRunner};
use crate::areas::ssh::SshKeyManager;
use crate::artifacts::errors::PreconditionError;
use crate::artifacts::invocation::{CommandResult, Invocation};
use crate::artifacts::project_path::ProjectPath;
use crate::artifacts::tools;
use colored::Colorize;
use derive_new::new;
use std::io::{BufRead, Write};
use tracing::debug;

pub const NO_PROJECT_WARNING: &str = "Select the project directory first (option 0).";
pub const COMMAND_FAILED: &str = "Error running command:";
pub const FAIL_FAST_STOP: &str = "Stopping: previous step failed (--fail-fast).";

/// Behaviour switches set from the command line.
#[derive(Debug, Clone, Copy, Default, new)]
pub struct ControllerOptions {
    /// Stop multi-step actions at the first failing step.
    pub fail_fast: bool,
}

/// Interactive state of the menu: the selected repository plus the
/// collaborators every action needs.
pub struct Controller<R: CommandRunner = ProcessRunner> {
    pub(crate) project: Option<ProjectPath>,
    pub(crate) config: ConfigStore,
    pub(crate) ssh: SshKeyManager,
    pub(crate) runner: R,
    pub(crate) options: ControllerOptions,
    reader: Box<dyn BufRead>,
    writer: Box<dyn Write>,
}

impl<R: CommandRunner> Controller<R> {
    /// Builds the controller and restores the saved project directory, if any.
    pub fn new(
        config: ConfigStore,
        ssh: SshKeyManager,
        runner: R,
        options: ControllerOptions,
        reader: Box<dyn BufRead>,
        writer: Box<dyn Write>,
    ) -> anyhow::Result<Self> {
        let (project, load_error) = match config.try_load() {
            Ok(project) => (project, None),
            Err(err) => (None, Some(err)),
        };

        let mut controller = Controller {
            project,
            config,
            ssh,
            runner,
            options,
            reader,
            writer,
        };

        if let Some(err) = load_error {
            controller.warn(&format!("Failed to load configuration: {err}"))?;
        }

        if let Some(project) = controller.project.clone() {
            controller.info(&format!("Restored project directory: {project}"))?;
        }

        Ok(controller)
    }

    pub fn project(&self) -> Option<&ProjectPath> {
        self.project.as_ref()
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Warns about every required program that is not on `PATH`.
    pub fn check_tools(&mut self) -> anyhow::Result<()> {
        for tool in tools::missing_tools() {
            self.warn(&format!("`{tool}` was not found on PATH; related actions will fail."))?;
        }
        Ok(())
    }

    pub(crate) fn require_project(&self) -> Result<ProjectPath, PreconditionError> {
        self.project
            .clone()
            .ok_or(PreconditionError::NoProjectSelected)
    }

    /// Runs `git <args>` inside the selected project.
    ///
    /// Returns `None` without spawning anything when no project is selected.
    /// Output of a successful command is echoed; a failed or unspawnable
    /// command has its error shown but is still returned to the caller.
    pub async fn run_in_project(&mut self, args: &[&str]) -> anyhow::Result<Option<CommandResult>> {
        let project = match self.require_project() {
            Ok(project) => project,
            Err(err) => {
                debug!(command = ?args, "refused: {err}");
                self.warn(NO_PROJECT_WARNING)?;
                return Ok(None);
            }
        };

        let invocation = Invocation::git(args.iter().copied(), project.as_path());
        let result = match self.runner.run(&invocation).await {
            Ok(result) => result,
            Err(err) => CommandResult::failed(format!("{err:#}")),
        };

        if result.success {
            if !result.stdout.is_empty() {
                write!(self.writer, "{}", result.stdout)?;
                if !result.stdout.ends_with('\n') {
                    writeln!(self.writer)?;
                }
            }
        } else {
            self.error(COMMAND_FAILED)?;
            writeln!(self.writer, "{}", result.stderr.trim_end())?;
        }

        Ok(Some(result))
    }

    /// Like [`Self::run_in_project`] but only reports whether the step succeeded.
    pub(crate) async fn run_step(&mut self, args: &[&str]) -> anyhow::Result<bool> {
        Ok(self
            .run_in_project(args)
            .await?
            .is_some_and(|result| result.success))
    }

    /// True when a chain of steps must stop after a failed step.
    pub(crate) fn should_halt(&mut self, step_succeeded: bool) -> anyhow::Result<bool> {
        if !step_succeeded && self.options.fail_fast {
            self.warn(FAIL_FAST_STOP)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Prints `label` and reads one trimmed line. `None` means stdin is closed.
    pub(crate) fn prompt(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        write!(self.writer, "{label}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    pub(crate) fn line(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{message}")?;
        Ok(())
    }

    pub(crate) fn info(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", message.cyan())?;
        Ok(())
    }

    pub(crate) fn success(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", message.green())?;
        Ok(())
    }

    pub(crate) fn warn(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", message.yellow())?;
        Ok(())
    }

    pub(crate) fn error(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", message.red())?;
        Ok(())
    }
}
