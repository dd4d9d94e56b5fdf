//! Error types for page extraction.
//!
//! Parsing itself never fails: malformed markup degrades to an `other`
//! classification or a dropped escape. Only I/O and run-level limits
//! surface here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MtocError {
    /// A page could not be opened or decompressed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `.so` chain tried to take a fourth hop.
    #[error("too many .so source file redirections while following {}", path.display())]
    TooManyRedirections { path: PathBuf },

    /// An explicitly requested file (or pattern) matched nothing.
    #[error("the \"{}\" file does not exist", path.display())]
    MissingFile { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, MtocError>;
