use crate::areas::controller::{Controller, NO_PROJECT_WARNING};
use crate::areas::runner::CommandRunner;
use crate::artifacts::menu::{Flow, MENU_FOOTER, MENU_ORDER, MENU_TITLE, MenuCommand};
use tracing::debug;

pub const INVALID_OPTION: &str = "Invalid option!";

impl<R: CommandRunner> Controller<R> {
    /// Shows the menu and runs actions until exit is chosen or stdin closes.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.render_menu()?;

            let Some(choice) = self.prompt("Choose an option: ")? else {
                debug!("stdin closed, leaving menu");
                return Ok(());
            };

            let Some(command) = MenuCommand::parse(&choice) else {
                self.error(INVALID_OPTION)?;
                continue;
            };

            if self.dispatch(command).await? == Flow::Exit {
                return Ok(());
            }
        }
    }

    pub async fn dispatch(&mut self, command: MenuCommand) -> anyhow::Result<Flow> {
        debug!(?command, "dispatching");

        if command.requires_project()
            && let Err(err) = self.require_project()
        {
            debug!("refused {command:?}: {err}");
            self.warn(NO_PROJECT_WARNING)?;
            return Ok(Flow::Continue);
        }

        match command {
            MenuCommand::SelectDirectory => self.select_directory()?,
            MenuCommand::ShowChanges => self.show_changes().await?,
            MenuCommand::CommitAndPush => self.commit_and_push().await?,
            MenuCommand::Pull => self.pull().await?,
            MenuCommand::CreateTag => self.create_tag().await?,
            MenuCommand::Status => self.status().await?,
            MenuCommand::ConfigureSsh => self.configure_ssh().await?,
            MenuCommand::Exit => return self.exit(),
        }

        Ok(Flow::Continue)
    }

    pub fn exit(&mut self) -> anyhow::Result<Flow> {
        self.info("Exiting...")?;
        Ok(Flow::Exit)
    }

    fn render_menu(&mut self) -> anyhow::Result<()> {
        self.line("")?;
        self.line(MENU_TITLE)?;
        for command in MENU_ORDER {
            self.line(&command.to_string())?;
        }
        self.line(MENU_FOOTER)
    }
}
