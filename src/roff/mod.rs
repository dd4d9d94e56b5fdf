//! Low-level *roff(7) text handling shared by both macro dialects.
//!
//! Each submodule is a pure line transform; the scanner decides which ones
//! run on which lines.

pub mod comment;
pub mod font;
pub mod special;
pub mod strings;
pub mod words;

pub use comment::strip_comments;
pub use font::strip_font_macro;
pub use special::replace_special_characters;
pub use strings::{expand_user_strings, UserStrings};
pub use words::split_words;

/// Split a request line into its macro name and the (left-trimmed) rest.
///
/// `".Nm ls, dir"` → `Some(("Nm", "ls, dir"))`. Text lines yield `None`.
pub fn request(line: &str) -> Option<(&str, &str)> {
    let body = line.strip_prefix('.')?;
    match body.find(|c: char| c == ' ' || c == '\t') {
        Some(end) => Some((&body[..end], body[end..].trim_start())),
        None => Some((body, "")),
    }
}

/// Strip one pair of surrounding double quotes, if present.
pub fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text)
}
