// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two list files that define a run: documents and keywords.
//!
//! Both are plain text, one entry per line, order preserved. Order matters
//! twice over: the first document is the pivot, and keyword codes follow the
//! keyword order. Blank lines are skipped; `\r\n` endings are accepted.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::{Error, Result};

/// Contents of the document list and keyword list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputManifest {
    /// Document paths, pivot first.
    pub documents: Vec<String>,
    /// Keyword bytes, in code order.
    pub keywords: Vec<Vec<u8>>,
}

impl InputManifest {
    /// Read both lists. Either one missing is fatal.
    pub fn load(documents: &Path, keywords: &Path) -> Result<Self> {
        let document_bytes = fs::read(documents).map_err(|e| Error::io(documents, e))?;
        let keyword_bytes = fs::read(keywords).map_err(|e| Error::io(keywords, e))?;

        Ok(Self {
            documents: split_lines(&document_bytes).map(document_path).collect(),
            keywords: split_lines(&keyword_bytes).map(<[u8]>::to_vec).collect(),
        })
    }
}

/// A document list line as a path. Invalid UTF-8 is replaced, with a warning:
/// the replaced name will not open and is what the output would show.
pub fn document_path(line: &[u8]) -> String {
    match String::from_utf8_lossy(line) {
        Cow::Borrowed(path) => path.to_string(),
        Cow::Owned(path) => {
            warn!(path = %path, "document path is not valid UTF-8, bytes replaced");
            path
        }
    }
}

/// Non-empty lines of `bytes`, without their line terminators.
pub fn split_lines(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    bytes
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .filter(|line| !line.is_empty())
}
