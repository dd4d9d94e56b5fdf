//! `.so` source redirection targets.
//!
//! A target like `man1/ls.1` is relative to a manual search-path directory.
//! Installed pages are usually compressed, so `man1/ls.1.gz` is tried
//! before `man1/ls.1` in each directory.

use crate::source::COMPRESSED_SUFFIX;
use std::path::{Path, PathBuf};

/// A resolved redirection target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub path: PathBuf,
    /// Section implied by the target's file name suffix.
    pub section: String,
}

/// Find the first existing file for `token` along `manpath`.
pub fn resolve(token: &str, manpath: &[PathBuf]) -> Option<Target> {
    let stem = token.strip_suffix(COMPRESSED_SUFFIX).unwrap_or(token);
    let section = target_section(stem);

    manpath
        .iter()
        .flat_map(|dir| {
            [
                dir.join(format!("{}{}", stem, COMPRESSED_SUFFIX)),
                dir.join(stem),
            ]
        })
        .find(|candidate| candidate.is_file())
        .map(|path| Target {
            path,
            section: section.clone(),
        })
}

/// `man1/ls.1` → `1`
fn target_section(stem: &str) -> String {
    Path::new(stem)
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, section)| section.to_string())
        .unwrap_or_default()
}
