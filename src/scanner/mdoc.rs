//! mdoc(7) NAME section body.
//!
//! Names come from `.Nm` (possibly several, the first ones ending in a
//! comma) and the one-line description from `.Nd`, which may continue on
//! following text lines or be decorated with inline macros.

use super::{Scanner, Step};
use crate::model::Dialect;
use crate::roff;
use regex::Regex;
use std::sync::LazyLock;

static RE_BX_TAHOE_RENO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^4\.3 (?i:tahoe|reno)").unwrap());

static RE_BX_LITE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^4\.4 [Ll]ite").unwrap());

pub(super) fn body_line(s: &mut Scanner<'_>, text: &str) -> Step {
    let Some((name, args)) = roff::request(text) else {
        continuation(s, text);
        return Step::Continue;
    };

    match name {
        "Nm" => {
            let list = args.trim_end();
            let list = list.strip_suffix(',').unwrap_or(list).trim_end();
            s.names.merge(&list.replace('"', ""));
        }
        "Nd" => {
            let text = one_line_text(args);
            if text.is_empty() {
                s.description.push_str(&format!("({}) -", s.section));
            } else {
                s.description.push_str(&format!("({}) - {}", s.section, text));
            }
        }
        "Sh" | "Ss" => return Step::Finish,
        "Ux" => s.description.push_str(" UNIX"),
        "At" => {
            if let Some(phrase) = att_phrase(args.trim_end()) {
                append(s, &phrase);
            }
        }
        "Bx" => append(s, &bsd_phrase(args.trim_end())),
        "Bsx" | "Nx" | "Fx" | "Ox" | "Dx" => {
            let os = bsd_variant(name);
            let version = args.trim_end();
            if version.is_empty() {
                append(s, os);
            } else {
                append(s, &format!("{} {}", os, version));
            }
        }
        "Dq" => {
            let quoted = if s.config.interpret_dq {
                // the text is sometimes quoted already, as in big(5)
                format!("\"{}\"", args.trim_end()).replace("\"\"", "\"")
            } else {
                args.to_string()
            };
            append(s, &quoted);
        }
        "Pa" => {
            let quote = s.config.path_quote.as_str();
            append(s, &format!("{}{}{}", quote, args.trim_end(), quote));
        }
        "Xr" => {
            let reference = args.trim_end();
            match reference.split_once(' ') {
                Some((page, section)) if s.config.interpret_xr => {
                    append(s, &format!("{}({})", page, section));
                }
                _ => append(s, reference),
            }
        }
        "ig" | "de" => s.begin_skip(Dialect::Mdoc),
        _ => {}
    }
    Step::Continue
}

/// A text line continuing `.Nd`.
fn continuation(s: &mut Scanner<'_>, text: &str) {
    let text = text.trim_end();
    let text = text.strip_suffix('"').unwrap_or(text);
    if !text.trim().is_empty() {
        append(s, text);
    }
}

/// Drop an opening quote and a closing quote with trailing blanks.
fn one_line_text(text: &str) -> &str {
    let text = text.strip_prefix('"').unwrap_or(text).trim_end();
    text.strip_suffix('"').unwrap_or(text)
}

fn append(s: &mut Scanner<'_>, text: &str) {
    s.description.push(' ');
    s.description.push_str(text);
}

/// `.At [version]`; unknown versions render nothing.
fn att_phrase(arg: &str) -> Option<String> {
    if arg.is_empty() {
        Some("AT&T UNIX".to_string())
    } else if let Some(version) = arg.strip_prefix('v') {
        Some(format!("Version {} AT&T UNIX", version))
    } else if arg.starts_with("32v") {
        Some("Version 32V AT&T UNIX".to_string())
    } else if arg.starts_with("III") {
        Some("AT&T System III UNIX".to_string())
    } else if let Some(release) = arg.strip_prefix("V.") {
        Some(format!("AT&T System V Release {} UNIX", release))
    } else if arg.starts_with('V') {
        Some("AT&T System V UNIX".to_string())
    } else {
        None
    }
}

/// `.Bx [version [variant]]`
fn bsd_phrase(arg: &str) -> String {
    let arg = arg
        .replace("-alpha", " (currently in alpha test)")
        .replace("-beta", " (currently in beta test)")
        .replace("-devel", " (currently under development)");

    if arg.is_empty() {
        "BSD".to_string()
    } else if RE_BX_TAHOE_RENO.is_match(&arg) {
        format!("{}BSD", arg.replace(' ', "  "))
    } else if RE_BX_LITE.is_match(&arg) {
        RE_BX_LITE.replace(&arg, "4.4BSD-Lite").into_owned()
    } else {
        format!("{}BSD", arg)
    }
}

fn bsd_variant(name: &str) -> &'static str {
    match name {
        "Bsx" => "BSD/OS",
        "Nx" => "NetBSD",
        "Fx" => "FreeBSD",
        "Ox" => "OpenBSD",
        _ => "DragonFly",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, PathQuote};
    use crate::diagnostics::Diagnostic;
    use crate::scanner::{scan, ScanOutcome};

    fn describe(body: &str, config: &Config) -> String {
        let input = format!(".Sh NAME\n.Nm foo\n{}\n.Sh SYNOPSIS\n", body);
        let mut sink: Vec<Diagnostic> = Vec::new();
        match scan(input.lines(), "foo", "1", config, &mut sink) {
            ScanOutcome::Found(page) => page.summary(),
            other => panic!("expected a summary, got {:?}", other),
        }
    }

    #[test]
    fn nd_quoted_and_empty() {
        let config = Config::default();
        assert_eq!(describe(".Nd \"quoted text\"", &config), "foo(1) - quoted text");
        assert_eq!(describe(".Nd", &config), "foo(1) -");
    }

    #[test]
    fn nd_continues_on_text_lines() {
        let config = Config::default();
        assert_eq!(
            describe(".Nd first part\nsecond part\"", &config),
            "foo(1) - first part second part"
        );
    }

    #[test]
    fn continuation_keeps_opening_quote() {
        assert_eq!(
            describe(".Nd x\n\"a\" b", &Config::default()),
            "foo(1) - x \"a\" b"
        );
    }

    #[test]
    fn nm_comma_lists() {
        let config = Config::default();
        assert_eq!(
            describe(".Nm bar ,\n.Nm baz , qux\n.Nd x", &config),
            "bar, baz, foo, qux(1) - x"
        );
    }

    #[test]
    fn bare_nm_adds_nothing() {
        assert_eq!(describe(".Nm\n.Nd x", &Config::default()), "foo(1) - x");
    }

    #[test]
    fn other_macros_ignored() {
        assert_eq!(
            describe(".Nd x\n.Op Fl v\n.Em y", &Config::default()),
            "foo(1) - x"
        );
    }

    #[test]
    fn unix_and_bsd_variants() {
        let config = Config::default();
        assert_eq!(describe(".Nd for\n.Ux", &config), "foo(1) - for UNIX");
        assert_eq!(describe(".Nd since\n.Fx 2.2", &config), "foo(1) - since FreeBSD 2.2");
        assert_eq!(describe(".Nd on\n.Ox", &config), "foo(1) - on OpenBSD");
        assert_eq!(describe(".Nd on\n.Bsx 4.1", &config), "foo(1) - on BSD/OS 4.1");
        assert_eq!(describe(".Nd on\n.Nx 9.0", &config), "foo(1) - on NetBSD 9.0");
        assert_eq!(describe(".Nd on\n.Dx 6.4", &config), "foo(1) - on DragonFly 6.4");
    }

    #[test]
    fn att_versions() {
        assert_eq!(att_phrase("").as_deref(), Some("AT&T UNIX"));
        assert_eq!(att_phrase("v7").as_deref(), Some("Version 7 AT&T UNIX"));
        assert_eq!(att_phrase("32v").as_deref(), Some("Version 32V AT&T UNIX"));
        assert_eq!(att_phrase("III").as_deref(), Some("AT&T System III UNIX"));
        assert_eq!(
            att_phrase("V.4").as_deref(),
            Some("AT&T System V Release 4 UNIX")
        );
        assert_eq!(att_phrase("V").as_deref(), Some("AT&T System V UNIX"));
        assert_eq!(att_phrase("x"), None);
    }

    #[test]
    fn bsd_versions() {
        assert_eq!(bsd_phrase(""), "BSD");
        assert_eq!(bsd_phrase("4.2"), "4.2BSD");
        assert_eq!(bsd_phrase("4.3 Tahoe"), "4.3  TahoeBSD");
        assert_eq!(bsd_phrase("4.3 reno"), "4.3  renoBSD");
        assert_eq!(bsd_phrase("4.4 Lite"), "4.4BSD-Lite");
        assert_eq!(bsd_phrase("4.4 Lite2"), "4.4BSD-Lite2");
        assert_eq!(
            bsd_phrase("5.0-devel"),
            "5.0 (currently under development)BSD"
        );
    }

    #[test]
    fn dq_plain_and_interpreted() {
        let plain = Config::default();
        assert_eq!(describe(".Nd a\n.Dq word", &plain), "foo(1) - a word");

        let interpret = Config {
            interpret_dq: true,
            ..Config::default()
        };
        assert_eq!(describe(".Nd a\n.Dq word", &interpret), "foo(1) - a \"word\"");
        assert_eq!(
            describe(".Nd a\n.Dq \"already\"", &interpret),
            "foo(1) - a \"already\""
        );
    }

    #[test]
    fn pa_quoting() {
        let body = ".Nd see\n.Pa /etc/rc.conf";
        assert_eq!(describe(body, &Config::default()), "foo(1) - see /etc/rc.conf");
        let double = Config {
            path_quote: PathQuote::Double,
            ..Config::default()
        };
        assert_eq!(describe(body, &double), "foo(1) - see \"/etc/rc.conf\"");
    }

    #[test]
    fn xr_plain_and_interpreted() {
        let body = ".Nd like\n.Xr ls 1";
        assert_eq!(describe(body, &Config::default()), "foo(1) - like ls 1");
        let interpret = Config {
            interpret_xr: true,
            ..Config::default()
        };
        assert_eq!(describe(body, &interpret), "foo(1) - like ls(1)");
    }

    #[test]
    fn ig_block_skipped() {
        assert_eq!(
            describe(".Nd x\n.ig\n.Sh HIDDEN\n..\ny", &Config::default()),
            "foo(1) - x y"
        );
    }
}
