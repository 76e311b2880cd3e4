// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The keyword vocabulary.
//!
//! Each keyword gets a one-byte code in input order, starting at 65. The
//! index also precomputes what the matcher needs on every window: the shortest
//! keyword length (the Wu-Manber window) and which bytes can start a keyword.
//!
//! Construction either succeeds completely or returns a [`ConfigError`]; there
//! is no half-built index to misuse.

use std::collections::HashMap;

use crate::config::MAX_KEYWORDS;
use crate::error::ConfigError;
use crate::types::{Fingerprint, KeywordCode};

/// Immutable vocabulary with code assignments.
#[derive(Debug, Clone)]
pub struct KeywordIndex {
    /// Keyword bytes, indexed by code position.
    keywords: Vec<Vec<u8>>,
    codes: HashMap<Vec<u8>, KeywordCode>,
    first_bytes: [bool; 256],
    min_len: usize,
}

impl KeywordIndex {
    /// Assign codes to `keywords` in order.
    pub fn new<I, K>(keywords: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<[u8]>,
    {
        let mut list: Vec<Vec<u8>> = Vec::new();
        let mut codes = HashMap::new();
        let mut found = 0usize;

        for (position, keyword) in keywords.into_iter().enumerate() {
            found += 1;
            // Keep counting past the limit so the error reports the real total.
            if found > MAX_KEYWORDS {
                continue;
            }

            let keyword = keyword.as_ref();
            if keyword.is_empty() {
                return Err(ConfigError::EmptyKeyword {
                    position: position + 1,
                });
            }
            let code = KeywordCode::from_position(position).ok_or(ConfigError::TooManyKeywords {
                limit: MAX_KEYWORDS,
                found: position + 1,
            })?;
            if codes.insert(keyword.to_vec(), code).is_some() {
                return Err(ConfigError::DuplicateKeyword {
                    keyword: String::from_utf8_lossy(keyword).into_owned(),
                });
            }
            list.push(keyword.to_vec());
        }

        if found > MAX_KEYWORDS {
            return Err(ConfigError::TooManyKeywords {
                limit: MAX_KEYWORDS,
                found,
            });
        }
        if list.is_empty() {
            return Err(ConfigError::NoKeywords);
        }

        let mut first_bytes = [false; 256];
        for keyword in &list {
            first_bytes[keyword[0] as usize] = true;
        }
        let min_len = list.iter().map(Vec::len).min().unwrap_or(0);

        Ok(Self {
            keywords: list,
            codes,
            first_bytes,
            min_len,
        })
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Length of the shortest keyword, in bytes.
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn code_of(&self, keyword: impl AsRef<[u8]>) -> Option<KeywordCode> {
        self.codes.get(keyword.as_ref()).copied()
    }

    /// Keyword bytes for a code handed out by this index.
    pub fn keyword(&self, code: KeywordCode) -> Option<&[u8]> {
        self.keywords.get(code.position()).map(Vec::as_slice)
    }

    /// Byte length of the keyword behind `code`; 0 for codes from another index.
    #[inline]
    pub fn byte_len(&self, code: KeywordCode) -> usize {
        self.keywords.get(code.position()).map_or(0, Vec::len)
    }

    /// Whether some keyword begins with `byte`.
    #[inline]
    pub fn starts_keyword(&self, byte: u8) -> bool {
        self.first_bytes[byte as usize]
    }

    /// Distinct first bytes, ascending.
    pub fn first_bytes(&self) -> Vec<u8> {
        (0..=u8::MAX).filter(|&b| self.starts_keyword(b)).collect()
    }

    /// Whether `code` was handed out by this index.
    pub fn contains(&self, code: KeywordCode) -> bool {
        code.position() < self.keywords.len()
    }

    /// `(code, keyword)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (KeywordCode, &[u8])> + '_ {
        self.keywords
            .iter()
            .enumerate()
            .filter_map(|(position, keyword)| {
                KeywordCode::from_position(position).map(|code| (code, keyword.as_slice()))
            })
    }

    /// Sum of keyword byte lengths over `codes`.
    pub fn weighted_len(&self, codes: &[KeywordCode]) -> usize {
        codes.iter().map(|&code| self.byte_len(code)).sum()
    }

    /// Render a fingerprint back into keyword text, space separated.
    pub fn describe(&self, fingerprint: &Fingerprint) -> String {
        fingerprint
            .iter()
            .filter_map(|&code| self.keyword(code))
            .map(String::from_utf8_lossy)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
