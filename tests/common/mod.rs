#![allow(dead_code)]

pub mod command;
pub mod file;
pub mod runner;

const TMPDIR: &str = "../playground";

/// Points temp directories at an absolute `../playground`, so paths typed into
/// the menu stay valid whatever the child process's working directory is.
pub fn redirect_temp_dir() {
    // Ensure the TMPDIR exists
    if !std::path::Path::new(TMPDIR).exists() {
        std::fs::create_dir_all(TMPDIR).expect("Failed to create TMPDIR");
    }

    let absolute = std::fs::canonicalize(TMPDIR).expect("Failed to resolve TMPDIR");
    unsafe {
        std::env::set_var("TMPDIR", absolute);
    }
}

/// Byte offset of `needle` in `haystack`, panicking with the full output if absent.
pub fn position_of(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("expected {needle:?} in output:\n{haystack}"))
}
