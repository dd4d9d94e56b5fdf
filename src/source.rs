//! Reading page sources, plain or gzip-compressed.

use crate::error::{MtocError, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Suffix of compressed manual pages.
pub const COMPRESSED_SUFFIX: &str = ".gz";

pub fn is_compressed(path: &Path) -> bool {
    path.to_string_lossy().ends_with(COMPRESSED_SUFFIX)
}

/// Read a whole page into memory as lines without trailing whitespace.
///
/// Invalid UTF-8 is replaced rather than rejected; old pages are often
/// Latin-1.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = read_bytes(path)?;
    Ok(bytes
        .split(|&b| b == b'\n')
        .map(|line| String::from_utf8_lossy(line).trim_end().to_string())
        .collect())
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let io_error = |source| MtocError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = BufReader::new(File::open(path).map_err(io_error)?);
    let mut bytes = Vec::new();
    let read = if is_compressed(path) {
        GzDecoder::new(reader).read_to_end(&mut bytes)
    } else {
        reader.read_to_end(&mut bytes)
    };
    read.map_err(io_error)?;
    Ok(bytes)
}
