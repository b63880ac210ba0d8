//! Source providers
//!
//! The scanner wants the whole buffer up front, so both providers read
//! everything into memory before handing it over. Input is raw bytes;
//! invalid UTF-8 becomes U+FFFD and scans as an `Unknown` token.

use std::fs;
use std::io::BufRead;
use std::path::Path;

use tracing::debug;

use crate::common::{ClexError, ClexResult};

/// Lines that end interactive input
pub const SENTINELS: [&str; 2] = ["END", "end"];

/// Read a whole file into memory
pub fn read_file(path: impl AsRef<Path>) -> ClexResult<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| ClexError::file_read(path, err))?;
    debug!(path = %path.display(), bytes = bytes.len(), "loaded source file");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read one line, terminator included; `None` at end of stream
pub fn read_line_lossy(reader: &mut impl BufRead) -> ClexResult<Option<String>> {
    let mut line = Vec::new();
    if reader.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&line).into_owned()))
}

/// Read lines until a sentinel line or the end of the stream
///
/// The sentinel itself is dropped; every other line is kept verbatim,
/// terminator included.
pub fn read_until_sentinel(reader: &mut impl BufRead) -> ClexResult<String> {
    let mut buffer = Vec::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if is_sentinel(&line) {
            break;
        }
        buffer.extend_from_slice(&line);
    }

    debug!(bytes = buffer.len(), "read interactive source");
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn is_sentinel(line: &[u8]) -> bool {
    let content = line.strip_suffix(b"\n").unwrap_or(line);
    let content = content.strip_suffix(b"\r").unwrap_or(content);
    SENTINELS.iter().any(|sentinel| sentinel.as_bytes() == content)
}
