//! Menu actions
//!
//! Each file extends [`Controller`](crate::areas::controller::Controller) with
//! the actions behind one or more menu entries:
//!
//! - `menu`: the input loop, dispatch and exit
//! - `select_directory`: choose and persist the repository
//! - `status`: `git status` (options 1 and 5)
//! - `commit`: add, commit and push
//! - `pull`: pull from the upstream
//! - `tag`: create and push a version tag
//! - `remote`: HTTPS remote detection
//! - `ssh`: SSH key bootstrap and remote URL switch

pub mod commit;
pub mod menu;
pub mod pull;
pub mod remote;
pub mod select_directory;
pub mod ssh;
pub mod status;
pub mod tag;
