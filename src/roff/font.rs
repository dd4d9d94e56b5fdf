//! Line-leading font style macros (`.B`, `.IR`, `.SM`, ...).

use regex::Regex;
use std::sync::LazyLock;

static RE_FONT_MACRO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\.(?:B|BI|BR|CB|CI|CR|CW|I|IB|IR|LG|NL|P|R|RB|RI|SB|SM) +").unwrap()
});

/// Drop a font macro at line start, keeping its arguments as text.
pub fn strip_font_macro(line: &str) -> String {
    RE_FONT_MACRO.replace(line, "").into_owned()
}
