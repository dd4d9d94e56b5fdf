//! Manual search path and section directory listing.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

/// Checked in order when `MANPATH` is unset.
#[cfg(unix)]
const DEFAULT_DIRECTORIES: &[&str] = &["/usr/share/man", "/usr/local/man", "/usr/local/share/man"];

/// Directories listed in `MANPATH`, or the platform defaults that exist.
pub fn search_path() -> Vec<PathBuf> {
    from_env(env::var_os("MANPATH"))
}

fn from_env(value: Option<OsString>) -> Vec<PathBuf> {
    match value {
        Some(value) => env::split_paths(&value)
            .filter(|dir| !dir.as_os_str().is_empty())
            .collect(),
        None => default_directories(),
    }
}

#[cfg(unix)]
fn default_directories() -> Vec<PathBuf> {
    DEFAULT_DIRECTORIES
        .iter()
        .map(PathBuf::from)
        .filter(|dir| dir.is_dir())
        .collect()
}

#[cfg(not(unix))]
fn default_directories() -> Vec<PathBuf> {
    Vec::new()
}

/// Every page file in `<dir>/man<section>` for each search-path directory.
///
/// Directories are visited in search-path order and files sorted by name
/// within each. Missing or unreadable directories are skipped.
pub fn section_pages(manpath: &[PathBuf], section: &str) -> Vec<PathBuf> {
    let mut pages = Vec::new();
    for dir in manpath {
        let section_dir = dir.join(format!("man{}", section));
        let entries = match fs::read_dir(&section_dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(dir = %section_dir.display(), "skipping: {}", e);
                continue;
            }
        };
        let mut files: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        files.sort();
        pages.extend(files);
    }
    pages
}
