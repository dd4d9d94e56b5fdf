//! User defined strings: `.ds` definitions and `\*` references.
//!
//! References come in three shapes: `\*X` (one character), `\*(XY` (two
//! characters) and `\*[name]`. Definitions are recorded in a single forward
//! pass, so a reference only sees definitions made before it, and a later
//! `.ds` for the same key replaces the earlier value.

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use std::collections::HashMap;

/// Per-page table of `.ds` definitions.
#[derive(Debug, Default)]
pub struct UserStrings {
    defined: HashMap<String, String>,
}

impl UserStrings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a definition; last one wins.
    pub fn define(&mut self, key: &str, value: &str) {
        self.defined.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.defined.get(key).map(String::as_str)
    }

    /// Record a `.ds` request from its argument text.
    ///
    /// Only the first word after the key is kept as the value.
    pub fn define_from_request(&mut self, args: &str) {
        let mut parts = args.split_whitespace();
        if let Some(key) = parts.next() {
            self.define(key, parts.next().unwrap_or(""));
        }
    }
}

enum State {
    Normal,
    /// previous character was `\`
    Escape,
    /// previous characters were `\*`
    Star,
    ShortKey(String),
    LongKey(String),
}

/// Replace every `\*` reference in `line` using `strings`, then built-ins.
///
/// Unknown keys are removed from the text and reported to `sink`.
pub fn expand_user_strings(
    line: &str,
    strings: &UserStrings,
    sink: &mut dyn DiagnosticSink,
) -> String {
    if !line.contains("\\*") {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len());
    let mut state = State::Normal;

    for ch in line.chars() {
        state = match state {
            State::Normal => {
                if ch == '\\' {
                    State::Escape
                } else {
                    out.push(ch);
                    State::Normal
                }
            }
            State::Escape => {
                if ch == '*' {
                    State::Star
                } else {
                    // not ours: keep the escape for later passes
                    out.push('\\');
                    out.push(ch);
                    State::Normal
                }
            }
            State::Star => match ch {
                '(' => State::ShortKey(String::with_capacity(2)),
                '[' => State::LongKey(String::new()),
                _ => {
                    let key = ch.to_string();
                    resolve(&key, strings, sink, &mut out, builtin_one);
                    State::Normal
                }
            },
            State::ShortKey(mut key) => {
                key.push(ch);
                if key.chars().count() == 2 {
                    resolve(&key, strings, sink, &mut out, builtin_two);
                    State::Normal
                } else {
                    State::ShortKey(key)
                }
            }
            State::LongKey(mut key) => {
                if ch == ']' {
                    resolve(&key, strings, sink, &mut out, |_| None);
                    State::Normal
                } else {
                    key.push(ch);
                    State::LongKey(key)
                }
            }
        };
    }

    match state {
        State::Normal => {}
        State::Escape => out.push('\\'),
        State::Star => sink.emit(Diagnostic::UnterminatedString { key: String::new() }),
        State::ShortKey(key) | State::LongKey(key) => {
            sink.emit(Diagnostic::UnterminatedString { key })
        }
    }

    out
}

fn resolve(
    key: &str,
    strings: &UserStrings,
    sink: &mut dyn DiagnosticSink,
    out: &mut String,
    builtin: fn(&str) -> Option<&'static str>,
) {
    if let Some(value) = strings.get(key) {
        out.push_str(value);
    } else if let Some(value) = builtin(key) {
        out.push_str(value);
    } else {
        sink.emit(Diagnostic::UndefinedString {
            key: key.to_string(),
        });
    }
}

fn builtin_one(key: &str) -> Option<&'static str> {
    match key {
        "R" => Some("(Reg.)"),
        // \*S resets the point size: nothing to print
        "S" => Some(""),
        _ => None,
    }
}

fn builtin_two(key: &str) -> Option<&'static str> {
    match key {
        "lq" | "rq" => Some("\""),
        "Tm" => Some("(TM)"),
        _ => None,
    }
}
