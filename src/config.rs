//! Run configuration, built once and threaded through every scan.

use std::path::PathBuf;

/// Quoting applied to `.Pa` path arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PathQuote {
    #[default]
    None,
    Single,
    Double,
}

impl PathQuote {
    pub fn as_str(self) -> &'static str {
        match self {
            PathQuote::None => "",
            PathQuote::Single => "'",
            PathQuote::Double => "\"",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Ignore `.SH NAME` sections.
    pub no_man: bool,
    /// Ignore `.Sh NAME` sections.
    pub no_mdoc: bool,
    /// Wrap `.Dq` text in double quotes.
    pub interpret_dq: bool,
    pub path_quote: PathQuote,
    /// Render `.Xr name section` as `name(section)`.
    pub interpret_xr: bool,
    /// Append `|man`, `|mdoc`, `|so(N):...` or `|other` to each line.
    pub print_type: bool,
    /// Directories searched for `.so` targets and section listings.
    pub manpath: Vec<PathBuf>,
}
