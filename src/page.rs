//! The whatis procedure for one page: read it, scan it, and follow `.so`
//! redirections to the page that actually holds the NAME section.

use crate::config::Config;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::{MtocError, Result};
use crate::model::PageResult;
use crate::redirect;
use crate::scanner::{self, ScanOutcome};
use crate::source::{self, COMPRESSED_SUFFIX};
use std::path::Path;

/// Redirections followed before giving up on a page.
pub const MAX_REDIRECTIONS: usize = 3;

/// Split a page file name into its page name and section.
///
/// `ls.1.gz` → `("ls", "1")`, `printf.3p` → `("printf", "3p")`.
pub fn page_name(file_name: &str) -> (String, String) {
    let stem = file_name
        .strip_suffix(COMPRESSED_SUFFIX)
        .unwrap_or(file_name);
    match stem.rsplit_once('.') {
        Some((name, section)) => (name.to_string(), section.to_string()),
        None => (stem.to_string(), String::new()),
    }
}

/// Summarize the page at `path`.
///
/// `hops` counts the redirections already followed to get here. Returns
/// `Ok(None)` when a redirection target cannot be found: such a page has
/// nothing to print.
pub fn whatis(
    path: &Path,
    section: &str,
    basename: &str,
    hops: usize,
    config: &Config,
    sink: &mut dyn DiagnosticSink,
) -> Result<Option<PageResult>> {
    tracing::debug!(path = %path.display(), hops, "whatis");
    let lines = source::read_lines(path)?;

    match scanner::scan(&lines, basename, section, config, &mut *sink) {
        ScanOutcome::Found(mut page) => {
            tracing::debug!(section = %page.section, "{}", page.summary());
            page.hops = hops;
            Ok(Some(page))
        }
        ScanOutcome::Other => Ok(Some(PageResult::other(basename, section))),
        ScanOutcome::Redirect(token) => {
            let Some(target) = redirect::resolve(&token, &config.manpath) else {
                sink.emit(Diagnostic::RedirectionNotFound { target: token });
                return Ok(None);
            };
            if hops >= MAX_REDIRECTIONS {
                return Err(MtocError::TooManyRedirections { path: target.path });
            }
            whatis(&target.path, &target.section, basename, hops + 1, config, sink)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dialect, PageClass};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, content).unwrap();
        path
    }

    fn config_for(dir: &Path) -> Config {
        Config {
            manpath: vec![dir.to_path_buf()],
            ..Config::default()
        }
    }

    #[test]
    fn page_names() {
        assert_eq!(page_name("ls.1.gz"), ("ls".into(), "1".into()));
        assert_eq!(page_name("printf.3p"), ("printf".into(), "3p".into()));
        assert_eq!(page_name("git-log.1"), ("git-log".into(), "1".into()));
        assert_eq!(page_name("README"), ("README".into(), String::new()));
    }

    #[test]
    fn direct_page() {
        let dir = TempDir::new().unwrap();
        let path = write(
            dir.path(),
            "man1/ls.1",
            ".TH LS 1\n.SH NAME\nls \\- list directory contents\n.SH SYNOPSIS\n",
        );
        let mut sink: Vec<Diagnostic> = Vec::new();
        let page = whatis(&path, "1", "ls", 0, &config_for(dir.path()), &mut sink)
            .unwrap()
            .unwrap();
        assert_eq!(page.class, PageClass::Summary(Dialect::Man));
        assert_eq!(page.hops, 0);
        assert_eq!(page.summary(), "ls(1) - list directory contents");
    }

    #[test]
    fn follows_redirection_and_keeps_basename() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "man1/ls.1",
            ".Dt LS 1\n.Sh NAME\n.Nm ls\n.Nd list directory contents\n.Sh SYNOPSIS\n",
        );
        let alias = write(dir.path(), "man1/dir.1", ".so man1/ls.1\n");
        let mut sink: Vec<Diagnostic> = Vec::new();
        let page = whatis(&alias, "1", "dir", 0, &config_for(dir.path()), &mut sink)
            .unwrap()
            .unwrap();
        assert_eq!(page.hops, 1);
        assert_eq!(page.class, PageClass::Summary(Dialect::Mdoc));
        assert_eq!(page.summary(), "dir, ls(1) - list directory contents");
    }

    #[test]
    fn three_hops_allowed_fourth_fatal() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "man1/a.1", ".so man1/b.1\n");
        write(dir.path(), "man1/b.1", ".so man1/c.1\n");
        write(
            dir.path(),
            "man1/c.1",
            ".SH NAME\nc \\- the end\n.SH X\n",
        );
        let start = write(dir.path(), "man1/start.1", ".so man1/a.1\n");
        let config = config_for(dir.path());
        let mut sink: Vec<Diagnostic> = Vec::new();

        let page = whatis(&start, "1", "start", 0, &config, &mut sink)
            .unwrap()
            .unwrap();
        assert_eq!(page.hops, 3);

        let too_far = write(dir.path(), "man1/far.1", ".so man1/start.1\n");
        let err = whatis(&too_far, "1", "far", 0, &config, &mut sink).unwrap_err();
        assert!(matches!(err, MtocError::TooManyRedirections { .. }));
    }

    #[test]
    fn missing_target_yields_nothing() {
        let dir = TempDir::new().unwrap();
        let path = write(dir.path(), "man1/dir.1", ".so man1/gone.1\n");
        let mut sink: Vec<Diagnostic> = Vec::new();
        let result = whatis(&path, "1", "dir", 0, &config_for(dir.path()), &mut sink).unwrap();
        assert_eq!(result, None);
        assert_eq!(
            sink,
            vec![Diagnostic::RedirectionNotFound {
                target: "man1/gone.1".into()
            }]
        );
    }

    #[test]
    fn unclassified_page() {
        let dir = TempDir::new().unwrap();
        let path = write(dir.path(), "man7/notes.7", "just some text\n");
        let mut sink: Vec<Diagnostic> = Vec::new();
        let page = whatis(&path, "7", "notes", 0, &config_for(dir.path()), &mut sink)
            .unwrap()
            .unwrap();
        assert_eq!(page.class, PageClass::Other);
        assert_eq!(page.basename, "notes");
    }
}
