//! Interactive menu for everyday Git chores on a single local repository.
//!
//! The menu shells out to `git` and `ssh-keygen`; it never talks to a remote
//! itself. See [`areas::controller::Controller`] for the entry point.

pub mod areas;
pub mod artifacts;
pub mod commands;
