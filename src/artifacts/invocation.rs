use derive_new::new;
use std::path::{Path, PathBuf};

const GIT_PROGRAM: &str = "git";

/// One external command: program, arguments and the directory it runs in.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl Invocation {
    /// A `git` command run inside `cwd`.
    pub fn git<I, S>(args: I, cwd: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            GIT_PROGRAM.to_string(),
            args.into_iter().map(Into::into).collect(),
            Some(cwd.to_path_buf()),
        )
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    /// True when this is `git <args...>` with exactly the given arguments.
    pub fn is_git(&self, args: &[&str]) -> bool {
        self.program == GIT_PROGRAM && self.args.iter().map(String::as_str).eq(args.iter().copied())
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " {:?}", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Captured outcome of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

impl CommandResult {
    pub fn succeeded(stdout: impl Into<String>) -> Self {
        Self::new(stdout.into(), String::new(), true)
    }

    pub fn failed(stderr: impl Into<String>) -> Self {
        Self::new(String::new(), stderr.into(), false)
    }
}
