//! Value Trace Loader.
//!
//! This module reads value traces used to drive a predictor outside a full
//! pipeline model. It performs:
//! 1. **Parsing:** One `<pc> <value>` record per line, each number decimal or `0x` hex.
//! 2. **Filtering:** Blank lines and `#` comments (whole-line or trailing) are skipped.
//! 3. **Loading:** Reads a trace file from disk into memory.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::common::error::TraceError;

/// One retired instruction: its address and the value it produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceRecord {
    /// Instruction address.
    pub pc: u64,
    /// True result value.
    pub value: u64,
}

/// Parses a decimal or `0x`-prefixed hexadecimal number.
fn parse_number(token: &str) -> Option<u64> {
    match token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => token.parse().ok(),
    }
}

/// Parses one trace line, returning `Ok(None)` for blank or comment lines.
fn parse_line(line: &str, line_no: usize) -> Result<Option<TraceRecord>, TraceError> {
    let body = line.split('#').next().unwrap_or_default().trim();
    if body.is_empty() {
        return Ok(None);
    }

    let malformed = |reason: String| TraceError::Malformed {
        line: line_no,
        reason,
    };

    let mut fields = body.split_whitespace();
    let (Some(pc_tok), Some(value_tok)) = (fields.next(), fields.next()) else {
        return Err(malformed("expected `<pc> <value>`".to_string()));
    };
    if let Some(extra) = fields.next() {
        return Err(malformed(format!("unexpected field `{extra}`")));
    }

    let pc = parse_number(pc_tok).ok_or_else(|| malformed(format!("bad pc `{pc_tok}`")))?;
    let value =
        parse_number(value_tok).ok_or_else(|| malformed(format!("bad value `{value_tok}`")))?;

    Ok(Some(TraceRecord { pc, value }))
}

/// Parses a value trace from any buffered reader.
///
/// # Errors
///
/// Returns `TraceError::Io` if reading fails, or `TraceError::Malformed`
/// naming the first bad line (one-based).
pub fn parse_trace(reader: impl BufRead) -> Result<Vec<TraceRecord>, TraceError> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        if let Some(record) = parse_line(&line?, idx + 1)? {
            records.push(record);
        }
    }
    Ok(records)
}

/// Loads a value trace file from disk.
///
/// # Errors
///
/// Returns `TraceError::Io` if the file cannot be opened or read, or
/// `TraceError::Malformed` for the first bad record.
pub fn load_trace(path: impl AsRef<Path>) -> Result<Vec<TraceRecord>, TraceError> {
    let file = File::open(path)?;
    parse_trace(BufReader::new(file))
}
