//! Comment removal.
//!
//! - A control character followed only by blanks is an empty request.
//! - `.\"` at line start discards the whole line.
//! - An unescaped `\"` or `\#` anywhere discards the rest of the line.

/// Remove *roff comments from one input line.
pub fn strip_comments(line: &str) -> String {
    let mut chars = line.chars();
    match chars.next() {
        Some('.') | Some('\'') => {
            let rest = chars.as_str();
            if rest.trim().is_empty() || rest.starts_with("\\\"") {
                return String::new();
            }
        }
        _ => {}
    }

    match comment_start(line) {
        Some(at) => line[..at].trim_end().to_string(),
        None => line.to_string(),
    }
}

/// Byte offset of the first comment escape not itself escaped.
fn comment_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' {
            match bytes.get(i + 1) {
                Some(b'"') | Some(b'#') => return Some(i),
                // `\\` and every other escape consume two bytes
                _ => i += 2,
            }
        } else {
            i += 1;
        }
    }
    None
}
