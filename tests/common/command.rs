use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn workspace_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

/// A workspace holding a freshly `git init`-ed repository under `repo/`.
#[fixture]
pub fn git_repository_dir(workspace_dir: TempDir) -> TempDir {
    let repo = workspace_dir.path().join("repo");
    std::fs::create_dir_all(&repo).expect("Failed to create repo dir");

    run_git_command(&repo, &["init", "--quiet"])
        .assert()
        .success();
    run_git_command(&repo, &["config", "user.name", "fake_user"])
        .assert()
        .success();
    run_git_command(&repo, &["config", "user.email", "fake_email@email.com"])
        .assert()
        .success();

    workspace_dir
}

/// Runs the menu binary inside `dir`, with its config and SSH key kept there too.
pub fn run_gitmenu(dir: &Path, input: &str) -> Command {
    let mut cmd = Command::cargo_bin("gitmenu").expect("Failed to find gitmenu binary");
    cmd.current_dir(dir);
    cmd.envs(vec![
        ("GITMENU_SSH_KEY", dir.join("ssh").join("id_ed25519").into_os_string()),
        ("GIT_TERMINAL_PROMPT", "0".into()),
        ("NO_COLOR", "1".into()),
    ]);
    cmd.env_remove("GITMENU_CONFIG");
    cmd.arg("--no-color");
    cmd.write_stdin(input.to_string());
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn git_stdout(dir: &Path, args: &[&str]) -> String {
    let output = run_git_command(dir, args)
        .output()
        .expect("Failed to run git");
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
