//! Stateful components behind the menu
//!
//! - `config`: persisted project selection (JSON file)
//! - `controller`: menu state and shared helpers for running commands
//! - `runner`: external process execution
//! - `ssh`: SSH keypair generation and lookup

pub mod config;
pub mod controller;
pub mod runner;
pub mod ssh;
