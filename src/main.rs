use anyhow::Result;
use clap::Parser;
use gitmenu::areas::config::{ConfigStore, DEFAULT_CONFIG_FILE};
use gitmenu::areas::controller::{Controller, ControllerOptions};
use gitmenu::areas::runner::ProcessRunner;
use gitmenu::areas::ssh::SshKeyManager;
use is_terminal::IsTerminal;
use std::io::BufReader;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gitmenu",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "An interactive menu for everyday git tasks",
    long_about = "This is a small interactive menu around the git and ssh-keygen executables. \
    It remembers one local repository and offers status, commit and push, pull, \
    tagging and SSH key setup from a numbered menu.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        env = "GITMENU_CONFIG",
        default_value = DEFAULT_CONFIG_FILE,
        help = "The file where the selected project directory is saved"
    )]
    config: PathBuf,
    #[arg(
        long,
        env = "GITMENU_SSH_KEY",
        help = "The private SSH key to create or reuse [default: ~/.ssh/id_ed25519]"
    )]
    ssh_key: Option<PathBuf>,
    #[arg(long, help = "Stop commit/push and tag chains at the first failing step")]
    fail_fast: bool,
    #[arg(long, help = "Disable coloured output")]
    no_color: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // RUST_LOG=debug shows every spawned command
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let ssh_key = match cli.ssh_key {
        Some(path) => path,
        None => SshKeyManager::default_key_path()?,
    };

    let mut controller = Controller::new(
        ConfigStore::new(cli.config),
        SshKeyManager::new(ssh_key),
        ProcessRunner,
        ControllerOptions::new(cli.fail_fast),
        Box::new(BufReader::new(std::io::stdin())),
        Box::new(std::io::stdout()),
    )?;

    controller.check_tools()?;
    controller.run().await
}
