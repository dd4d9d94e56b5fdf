//! mtoc: show the Manual table of contents.
//!
//! Prints a whatis(1)-style line for each manual page of the requested
//! sections, or for explicit files:
//!
//! - `mtoc 1 8` lists sections 1 and 8 along `MANPATH`
//! - `mtoc -f ./ls.1 -t` summarizes one file and tags its page type

mod config;
mod diagnostics;
mod error;
mod manpath;
mod model;
mod output;
mod page;
mod redirect;
mod roff;
mod scanner;
mod source;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use config::{Config, PathQuote};
use diagnostics::TracingSink;
use error::MtocError;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mtoc",
    version,
    about = "Show the Manual table of contents",
    disable_help_flag = true
)]
struct Cli {
    /// The Manual section(s) you want to list
    sections: Vec<String>,

    /// Process a specific file, like whatis(1). Glob patterns supported.
    #[arg(short = 'f', long = "file", visible_alias = "whatis", value_name = "FILE")]
    files: Vec<String>,

    /// Discard man or mdoc macros
    #[arg(short = 'n', long = "no", value_enum, ignore_case = true, value_name = "MACROS")]
    no: Vec<Macros>,

    /// Print type of man page (ie. man, mdoc, other, so)
    #[arg(short = 't', long = "type")]
    print_type: bool,

    /// Interpret .Dq (double quotes) macros
    #[arg(long = "Dq")]
    dq: bool,

    /// Interpret .Pa (path) macros as single quoted strings
    #[arg(long = "Pa", visible_alias = "PaSq")]
    pa: bool,

    /// Interpret .Pa (path) macros as double quoted strings
    #[arg(long = "PaDq")]
    pa_dq: bool,

    /// Interpret .Xr (cross reference) macros
    #[arg(long = "Xr")]
    xr: bool,

    /// Enable debug mode (same as setting MTOC_DEBUG)
    #[arg(long)]
    debug: bool,

    /// Print usage and this help message and exit
    #[arg(short = 'h', short_alias = '?', long, action = ArgAction::Help)]
    help: Option<bool>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Macros {
    Man,
    Mdoc,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version print to stdout and succeed
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    init_tracing(cli.debug);
    let config = build_config(&cli, manpath::search_path());
    tracing::debug!(?config, sections = ?cli.sections, "parameters");

    if cli.sections.is_empty() && cli.files.is_empty() {
        print!("{}", output::sections_table());
        return Ok(());
    }

    // every explicit file must exist before anything is printed
    let files = expand_files(&cli.files)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut sink = TracingSink;

    for path in &files {
        let (basename, section) = page::page_name(&file_name(path));
        let result = page::whatis(path, &section, &basename, 0, &config, &mut sink)?;
        print_result(&mut out, result.as_ref(), &config)?;
    }

    for section in &cli.sections {
        for path in manpath::section_pages(&config.manpath, section) {
            let (basename, _) = page::page_name(&file_name(&path));
            match page::whatis(&path, section, &basename, 0, &config, &mut sink) {
                Ok(result) => print_result(&mut out, result.as_ref(), &config)?,
                Err(MtocError::Io { path, source }) => {
                    tracing::warn!("skipping {}: {}", path.display(), source);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}

fn init_tracing(debug: bool) {
    let filter = if debug || std::env::var_os("MTOC_DEBUG").is_some() {
        EnvFilter::new("mtoc=debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn build_config(cli: &Cli, manpath: Vec<PathBuf>) -> Config {
    let path_quote = if cli.pa_dq {
        PathQuote::Double
    } else if cli.pa {
        PathQuote::Single
    } else {
        PathQuote::None
    };
    Config {
        no_man: cli.no.contains(&Macros::Man),
        no_mdoc: cli.no.contains(&Macros::Mdoc),
        interpret_dq: cli.dq,
        path_quote,
        interpret_xr: cli.xr,
        print_type: cli.print_type,
        manpath,
    }
}

/// Resolve `-f` values: existing files as given, anything else as a glob.
///
/// A value matching nothing is fatal.
fn expand_files(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        let mut matches: Vec<PathBuf> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            return Err(MtocError::MissingFile {
                path: path.to_path_buf(),
            }
            .into());
        }
        matches.sort();
        files.extend(matches);
    }
    Ok(files)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn print_result(
    out: &mut impl Write,
    result: Option<&model::PageResult>,
    config: &Config,
) -> Result<()> {
    if let Some(page) = result {
        writeln!(out, "{}", output::format_line(page, config.print_type))
            .context("failed to write to stdout")?;
    }
    Ok(())
}
