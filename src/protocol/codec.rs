//! Line codec
//!
//! Stream helpers for the text protocol: line reads tolerant of CRLF or
//! bare LF, CRLF writes, status reading, and the shared reader for
//! `.`-terminated data blocks. Every query operation is a thin
//! specialization of [`read_data_block`] or [`read_text_block`].

use std::io::{BufRead, Write};

use crate::error::{DictError, Result};

use super::atoms::split_atoms;
use super::status::Status;

/// A line consisting solely of `.` ends a multi-line data block
const TERMINATOR: &str = ".";

// =============================================================================
// Line I/O
// =============================================================================

/// Read one line, stripping the CRLF or LF terminator
///
/// Returns `None` at end of stream.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let n = reader.read_line(&mut line)?;
    if n == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

/// Read one line, failing if the peer has closed the stream
fn require_line<R: BufRead>(reader: &mut R) -> Result<String> {
    read_line(reader)?.ok_or_else(|| {
        DictError::Protocol("connection closed by server mid-response".to_string())
    })
}

/// Write one line followed by CRLF and flush
pub fn write_line<W: Write>(writer: &mut W, line: &str) -> Result<()> {
    writer.write_all(line.as_bytes())?;
    writer.write_all(b"\r\n")?;
    writer.flush()?;
    Ok(())
}

// =============================================================================
// Status Reading
// =============================================================================

/// Read and parse the status line of a response
///
/// An absent line (peer closed before responding) is a protocol error.
pub fn read_status<R: BufRead>(reader: &mut R) -> Result<Status> {
    let line = read_line(reader)?.ok_or_else(|| {
        DictError::Protocol("connection closed by server, no status line".to_string())
    })?;
    Status::parse(&line)
}

// =============================================================================
// Multi-line Data Blocks
// =============================================================================

/// Read a `.`-terminated data block, building one record per line
///
/// Each data line is tokenized into atoms and handed to `build` along
/// with the raw line, for builders whose payload is untokenized trailing
/// text. The terminator line is consumed and not passed on. End of
/// stream before the terminator is a protocol error, never a truncated
/// result.
pub fn read_data_block<R, T, F>(reader: &mut R, mut build: F) -> Result<Vec<T>>
where
    R: BufRead,
    F: FnMut(&str, &[String]) -> Result<T>,
{
    let mut records = Vec::new();
    loop {
        let line = require_line(reader)?;
        if line == TERMINATOR {
            return Ok(records);
        }
        let atoms = split_atoms(&line);
        records.push(build(&line, &atoms)?);
    }
}

/// Read a `.`-terminated text block as raw lines joined with `\n`
///
/// Used for definition bodies, where lines are free text rather than
/// atom sequences.
pub fn read_text_block<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut text = String::new();
    loop {
        let line = require_line(reader)?;
        if line == TERMINATOR {
            return Ok(text);
        }
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(&line);
    }
}
