//! Data model for one page's whatis summary.

use std::fmt;

/// The macro grammar a page's NAME section is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// man(7): `.TH` / `.SH NAME`
    Man,
    /// mdoc(7): `.Dt` / `.Sh NAME`
    Mdoc,
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Man => f.write_str("man"),
            Dialect::Mdoc => f.write_str("mdoc"),
        }
    }
}

/// Page aliases in insertion order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameList(Vec<String>);

impl NameList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `name` unless it is empty or already present.
    pub fn insert(&mut self, name: &str) -> bool {
        if name.is_empty() || self.0.iter().any(|n| n == name) {
            return false;
        }
        self.0.push(name.to_string());
        true
    }

    /// Add a single alias, or every entry of a comma list.
    ///
    /// Blanks are removed from comma lists (`"ls, dir"`), but a lone alias
    /// keeps them (`"Tcl built-in"`).
    pub fn merge(&mut self, text: &str) {
        if text.contains(',') {
            for name in text.replace(' ', "").split(',') {
                self.insert(name);
            }
        } else {
            self.insert(text);
        }
    }

    pub fn into_sorted(mut self) -> Vec<String> {
        self.0.sort();
        self.0
    }

    #[cfg(test)]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// How a page was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageClass {
    /// A NAME section was found and finalized.
    Summary(Dialect),
    /// No usable NAME section.
    Other,
}

/// Result of scanning one page (after following any `.so` hops).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    /// Page name derived from the file name.
    pub basename: String,
    pub class: PageClass,
    /// Number of `.so` redirections followed to reach the page.
    pub hops: usize,
    /// Sorted aliases.
    pub names: Vec<String>,
    /// Section token(s), e.g. `1` or `1, 1p`.
    pub section: String,
    /// Everything after the names: `(1) - list directory contents`.
    pub description: String,
}

impl PageResult {
    pub fn other(basename: &str, section: &str) -> Self {
        PageResult {
            basename: basename.to_string(),
            class: PageClass::Other,
            hops: 0,
            names: vec![basename.to_string()],
            section: section.to_string(),
            description: String::new(),
        }
    }

    /// `name[, name...](section) - description`
    pub fn summary(&self) -> String {
        format!("{}{}", self.names.join(", "), self.description)
    }
}
