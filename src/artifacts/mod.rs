//! Value types shared by the menu
//!
//! - `errors`: error kinds reported to the user
//! - `invocation`: external command description and its captured result
//! - `menu`: the closed set of menu actions and their keys
//! - `project_path`: validated repository directory
//! - `remote`: `git remote -v` inspection (HTTPS detection)
//! - `tools`: lookup of required executables on `PATH`

pub mod errors;
pub mod invocation;
pub mod menu;
pub mod project_path;
pub mod remote;
pub mod tools;
