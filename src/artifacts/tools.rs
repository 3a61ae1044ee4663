use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// External programs the menu shells out to.
pub const REQUIRED_TOOLS: [&str; 2] = ["git", "ssh-keygen"];

/// Finds `program` in the directories of `path_var`, honouring `PATHEXT` on Windows.
pub fn find_in_path(program: &str, path_var: Option<&OsStr>, cwd: &Path) -> Option<PathBuf> {
    which::which_in(program, path_var, cwd).ok()
}

/// Returns the required tools that cannot be found on the current `PATH`.
pub fn missing_tools() -> Vec<&'static str> {
    REQUIRED_TOOLS
        .into_iter()
        .filter(|tool| which::which(tool).is_err())
        .collect()
}
