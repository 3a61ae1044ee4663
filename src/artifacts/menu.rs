use phf::phf_map;

/// Every action reachable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    SelectDirectory,
    ShowChanges,
    CommitAndPush,
    Pull,
    CreateTag,
    Status,
    Exit,
    ConfigureSsh,
}

/// What the menu loop does after an action returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

static MENU_KEYS: phf::Map<&'static str, MenuCommand> = phf_map! {
    "0" => MenuCommand::SelectDirectory,
    "1" => MenuCommand::ShowChanges,
    "2" => MenuCommand::CommitAndPush,
    "3" => MenuCommand::Pull,
    "4" => MenuCommand::CreateTag,
    "5" => MenuCommand::Status,
    "6" => MenuCommand::Exit,
    "7" => MenuCommand::ConfigureSsh,
};

pub const MENU_TITLE: &str = "===== GIT MENU =====";
pub const MENU_FOOTER: &str = "====================";

/// Menu entries in display order.
pub const MENU_ORDER: [MenuCommand; 8] = [
    MenuCommand::SelectDirectory,
    MenuCommand::ShowChanges,
    MenuCommand::CommitAndPush,
    MenuCommand::Pull,
    MenuCommand::CreateTag,
    MenuCommand::Status,
    MenuCommand::Exit,
    MenuCommand::ConfigureSsh,
];

impl MenuCommand {
    /// Looks up a trimmed input line; only the exact keys `0`..`7` match.
    pub fn parse(choice: &str) -> Option<Self> {
        MENU_KEYS.get(choice).copied()
    }

    pub fn key(&self) -> &'static str {
        match self {
            MenuCommand::SelectDirectory => "0",
            MenuCommand::ShowChanges => "1",
            MenuCommand::CommitAndPush => "2",
            MenuCommand::Pull => "3",
            MenuCommand::CreateTag => "4",
            MenuCommand::Status => "5",
            MenuCommand::Exit => "6",
            MenuCommand::ConfigureSsh => "7",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuCommand::SelectDirectory => "Select project directory",
            MenuCommand::ShowChanges => "Show changes",
            MenuCommand::CommitAndPush => "Commit and push",
            MenuCommand::Pull => "Pull (update local copy)",
            MenuCommand::CreateTag => "Create new version tag",
            MenuCommand::Status => "Show status",
            MenuCommand::Exit => "Exit",
            MenuCommand::ConfigureSsh => "Configure SSH authentication",
        }
    }

    pub fn requires_project(&self) -> bool {
        !matches!(
            self,
            MenuCommand::SelectDirectory | MenuCommand::Exit | MenuCommand::ConfigureSsh
        )
    }
}

impl std::fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.key(), self.label())
    }
}
