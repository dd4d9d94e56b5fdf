//! NAME section scanner, a line-by-line state machine.
//!
//! Walks a page's comment-stripped lines looking for `.SH NAME` (man) or
//! `.Sh NAME` (mdoc), then hands each body line to the dialect handler
//! until the next section heading finalizes the summary. Title lines,
//! `.ds` definitions and `.so` redirections are only honoured before the
//! NAME section starts.

mod man;
mod mdoc;

use crate::config::Config;
use crate::diagnostics::DiagnosticSink;
use crate::model::{Dialect, NameList, PageClass, PageResult};
use crate::roff::{self, UserStrings};
use regex::Regex;
use std::sync::LazyLock;

static RE_BLANKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());

static RE_HYPHENS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());

/// How a scan ended.
#[derive(Debug, PartialEq, Eq)]
pub enum ScanOutcome {
    /// NAME section found and finalized.
    Found(PageResult),
    /// Input ended without a finalized NAME section.
    Other,
    /// A `.so`/`.SO` request: the page is the named file.
    Redirect(String),
}

/// Result of one body line inside a NAME section.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Finish,
}

#[derive(Clone, Copy)]
enum State {
    Searching,
    InSection(Dialect),
    /// Inside `.ig`/`.de` until the next `..`.
    Skipping(Dialect),
}

struct Scanner<'a> {
    config: &'a Config,
    sink: &'a mut dyn DiagnosticSink,
    basename: String,
    section: String,
    names: NameList,
    description: String,
    in_description: bool,
    strings: UserStrings,
    state: State,
}

/// Scan one page's lines for its whatis summary.
///
/// `basename` always becomes the first alias; `section` is the section
/// implied by the file name and may be widened by the title line.
pub fn scan<I, S>(
    lines: I,
    basename: &str,
    section: &str,
    config: &Config,
    sink: &mut dyn DiagnosticSink,
) -> ScanOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut names = NameList::new();
    names.insert(basename);
    let mut scanner = Scanner {
        config,
        sink,
        basename: basename.to_string(),
        section: section.to_string(),
        names,
        description: String::new(),
        in_description: false,
        strings: UserStrings::new(),
        state: State::Searching,
    };

    for line in lines {
        if let Some(outcome) = scanner.process_line(line.as_ref()) {
            return outcome;
        }
    }
    ScanOutcome::Other
}

impl Scanner<'_> {
    fn process_line(&mut self, raw: &str) -> Option<ScanOutcome> {
        let line = roff::strip_comments(raw);
        if line.is_empty() {
            return None;
        }

        match self.state {
            State::Searching => self.search(&line),
            State::InSection(dialect) => {
                let text = self.prepare(&line);
                tracing::debug!(dialect = %dialect, "{}", text);
                let step = match dialect {
                    Dialect::Man => man::body_line(self, &text),
                    Dialect::Mdoc => mdoc::body_line(self, &text),
                };
                match step {
                    Step::Continue => None,
                    Step::Finish => Some(ScanOutcome::Found(self.finish(dialect))),
                }
            }
            State::Skipping(resume) => {
                if line.starts_with("..") {
                    self.state = State::InSection(resume);
                }
                None
            }
        }
    }

    /// Lines seen before any NAME section.
    fn search(&mut self, line: &str) -> Option<ScanOutcome> {
        let (name, args) = roff::request(line)?;
        match name {
            "SH" if !self.config.no_man && is_name_heading(args) => {
                tracing::debug!("{}", line);
                self.state = State::InSection(Dialect::Man);
            }
            "Sh" if !self.config.no_mdoc && is_name_heading(args) => {
                tracing::debug!("{}", line);
                self.state = State::InSection(Dialect::Mdoc);
            }
            "TH" | "Dt" => {
                tracing::debug!("{}", line);
                self.title_line(line);
            }
            "so" | "SO" => {
                tracing::debug!("{}", line);
                if let Some(target) = args.split_whitespace().next() {
                    return Some(ScanOutcome::Redirect(target.to_string()));
                }
            }
            // only honoured at line start, though *roff accepts them elsewhere
            "ds" => {
                tracing::debug!("{}", line);
                self.strings.define_from_request(args);
            }
            _ => {}
        }
        None
    }

    /// `.TH NAME SECTION ...` / `.Dt NAME SECTION ...`
    fn title_line(&mut self, line: &str) {
        let text = roff::expand_user_strings(line, &self.strings, &mut *self.sink);
        let text = roff::replace_special_characters(&text.to_lowercase());
        let text = text.replace("\\\\_", "_");
        let words = roff::split_words(&text);

        if let Some(name) = words.get(1) {
            self.names.insert(&name.replace('"', ""));
        }
        if let Some(section) = words.get(2) {
            self.section = merge_section(&self.section, &section.replace('"', ""));
        }
    }

    /// Normalize a NAME section body line before dialect handling.
    fn prepare(&mut self, line: &str) -> String {
        let text = roff::strip_font_macro(line);
        let text = roff::replace_special_characters(&text);
        let text = roff::expand_user_strings(&text, &self.strings, &mut *self.sink);
        // `\..` is what is left of `.if`/`.ie` bodies (groff_hdtbl(7))
        let text = text.replace("\\..", "");
        let text = text.replace("\\\\", "\\");
        let text = text.replace("\\ ", " ");
        let text = RE_BLANKS.replace_all(&text, " ");
        RE_HYPHENS.replace_all(&text, "-").into_owned()
    }

    fn begin_skip(&mut self, resume: Dialect) {
        self.state = State::Skipping(resume);
    }

    fn finish(&mut self, dialect: Dialect) -> PageResult {
        let names = std::mem::take(&mut self.names).into_sorted();
        let mut description = std::mem::take(&mut self.description);
        // man pages without a " - " separator get the section tag here
        if dialect == Dialect::Man && !description.starts_with('(') {
            description = format!("({}) - {}", self.section, description);
        }
        PageResult {
            basename: self.basename.clone(),
            class: PageClass::Summary(dialect),
            hops: 0,
            names,
            section: self.section.clone(),
            description,
        }
    }
}

/// `NAME` or `"NAME"`
fn is_name_heading(args: &str) -> bool {
    roff::unquote(args.trim()) == "NAME"
}

/// Combine the file name's section with the title line's, smaller first.
fn merge_section(current: &str, other: &str) -> String {
    if other.is_empty() || current.split(", ").any(|s| s == other) {
        current.to_string()
    } else if current.is_empty() {
        other.to_string()
    } else if other < current {
        format!("{}, {}", other, current)
    } else {
        format!("{}, {}", current, other)
    }
}
