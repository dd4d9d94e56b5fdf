//! Special character escapes.
//!
//! Only the handful that routinely appear in NAME sections are mapped;
//! see mandoc_char(7) for the full list. `\ ` is left alone because the
//! later whitespace pass turns it into a real space.

use regex::{NoExpand, Regex};
use std::sync::LazyLock;

/// Applied in order; later patterns see the output of earlier ones.
static REPLACEMENTS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"\\&", ""),
        (r"\\\.", "."),
        (r"\\-", "-"),
        (r"\\\(aq", "'"),
        (r"\\\(em", ""),
        (r"\\\(tm", "tm"),
        (r"\\\([lr]q", "\""),
        (r"\\\[rg\]", "(R)"),
        // a font selected through a user string: \f\*[...]
        (r"\\f\\\*\[[^\]]*\]", ""),
        (r"\\f(?:\(..|\[[^\]]*\]|[^*])", ""),
        // end of line backslash
        (r" *\\$", ""),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
    .collect()
});

pub fn replace_special_characters(line: &str) -> String {
    if !line.contains('\\') {
        return line.to_string();
    }
    let mut text = line.to_string();
    for (re, replacement) in REPLACEMENTS.iter() {
        if re.is_match(&text) {
            text = re.replace_all(&text, NoExpand(*replacement)).into_owned();
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_backslash_fast_path() {
        assert_eq!(replace_special_characters("plain text"), "plain text");
    }

    #[test]
    fn dashes_and_dots() {
        assert_eq!(
            replace_special_characters("ls \\- list directory contents"),
            "ls - list directory contents"
        );
        assert_eq!(replace_special_characters("\\&.profile"), ".profile");
        assert_eq!(replace_special_characters("foo\\.bar"), "foo.bar");
    }

    #[test]
    fn named_characters() {
        assert_eq!(replace_special_characters("\\(lqhi\\(rq"), "\"hi\"");
        assert_eq!(replace_special_characters("it\\(aqs"), "it's");
        assert_eq!(replace_special_characters("a\\(emb"), "ab");
        assert_eq!(replace_special_characters("Foo\\(tm"), "Footm");
        assert_eq!(replace_special_characters("Bar\\[rg]"), "Bar(R)");
    }

    #[test]
    fn font_escapes() {
        assert_eq!(replace_special_characters("\\fBls\\fR"), "ls");
        assert_eq!(replace_special_characters("\\fPx\\f(BIy\\f[CR]z"), "xyz");
        assert_eq!(replace_special_characters("\\f\\*[B-Font]bold"), "bold");
    }

    #[test]
    fn user_string_reference_survives() {
        assert_eq!(replace_special_characters("\\*(lq"), "\\*(lq");
    }

    #[test]
    fn trailing_backslash() {
        assert_eq!(replace_special_characters("continued  \\"), "continued");
    }

    #[test]
    fn backslash_space_kept() {
        assert_eq!(replace_special_characters("a\\ b"), "a\\ b");
    }
}
