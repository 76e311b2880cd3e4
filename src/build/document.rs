// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading one document's text.
//!
//! Lines are joined with their terminators removed, so a keyword split across
//! a line break still matches. No other normalization: matching is byte-exact.

use std::fs;
use std::io;
use std::path::Path;

/// Document bytes with line terminators removed.
pub fn load_text(path: impl AsRef<Path>) -> io::Result<Vec<u8>> {
    fs::read(path).map(|raw| join_lines(&raw))
}

/// Concatenate the lines of `raw`, dropping `\n` and `\r\n` terminators.
pub fn join_lines(raw: &[u8]) -> Vec<u8> {
    let mut text = Vec::with_capacity(raw.len());
    for line in raw.split(|&b| b == b'\n') {
        text.extend_from_slice(line.strip_suffix(b"\r").unwrap_or(line));
    }
    text
}
