//! Inspection of `git remote -v` output
//!
//! Only the URL scheme matters here: the menu nudges users away from HTTPS
//! remotes towards SSH. Detection is a plain, case-sensitive substring match on
//! the whole output; the parsed entries only serve to name the offending remotes.

use anyhow::Context;
use derive_new::new;

const HTTPS_MARKER: &str = "https://";

/// `<name> <url> (fetch|push)`
const REMOTE_LINE_REGEX: &str = r"^(\S+)\s+(\S+)\s+\((fetch|push)\)$";

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RemoteEntry {
    pub name: String,
    pub url: String,
}

pub fn uses_https(remote_output: &str) -> bool {
    remote_output.contains(HTTPS_MARKER)
}

/// Parses `git remote -v` lines, collapsing the fetch/push pair of each remote.
pub fn parse_remotes(remote_output: &str) -> anyhow::Result<Vec<RemoteEntry>> {
    let re = regex::Regex::new(REMOTE_LINE_REGEX)
        .with_context(|| format!("invalid remote line regex: {REMOTE_LINE_REGEX}"))?;
    let mut entries: Vec<RemoteEntry> = Vec::new();

    for line in remote_output.lines() {
        let Some(captures) = re.captures(line.trim()) else {
            continue;
        };

        let entry = RemoteEntry::new(captures[1].to_string(), captures[2].to_string());
        if !entries.contains(&entry) {
            entries.push(entry);
        }
    }

    Ok(entries)
}

pub fn https_remotes(remote_output: &str) -> anyhow::Result<Vec<RemoteEntry>> {
    Ok(parse_remotes(remote_output)?
        .into_iter()
        .filter(|entry| uses_https(&entry.url))
        .collect())
}
