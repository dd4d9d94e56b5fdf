//! Output lines.

use crate::model::{PageClass, PageResult};

/// Shown when no section and no file is requested.
const SECTIONS: &[(&str, &str)] = &[
    ("1", "General Commands Manual"),
    ("2", "System Calls Manual"),
    ("3", "Library Functions Manual"),
    ("4", "Kernel Interfaces Manual"),
    ("5", "File Formats Manual"),
    ("6", "Games Manual"),
    ("7", "Miscellaneous Information Manual"),
    ("8", "System Manager's Manual"),
    ("9", "Kernel Developer's Manual"),
];

/// The line printed for one page.
///
/// With `print_type`, summaries are tagged `|man`, `|mdoc` or
/// `|so(N):man`/`|so(N):mdoc`, and unclassified pages `|other`.
pub fn format_line(page: &PageResult, print_type: bool) -> String {
    match page.class {
        PageClass::Summary(dialect) => {
            let summary = page.summary();
            if !print_type {
                summary
            } else if page.hops > 0 {
                format!("{}|so({}):{}", summary, page.hops, dialect)
            } else {
                format!("{}|{}", summary, dialect)
            }
        }
        PageClass::Other if print_type => format!("{} - |other", page.basename),
        PageClass::Other => page.basename.clone(),
    }
}

pub fn sections_table() -> String {
    let mut out = String::from("Sections of the manual:\n=======================\n");
    for (number, title) in SECTIONS {
        out.push_str(&format!("{}. {}\n", number, title));
    }
    out.push_str("--\nProvide a section number as a parameter to see its table of contents.\n");
    out
}
