// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning document text into fingerprints.
//!
//! [`PatternMatcher`] owns the Wu-Manber tables for one [`KeywordIndex`] and
//! is read-only after construction, so a single matcher can be shared across
//! worker threads while documents are fingerprinted in parallel.

mod wu_manber;

pub use wu_manber::WuManber;

use crate::keywords::KeywordIndex;
use crate::types::{Fingerprint, KeywordCode};

/// Multi-pattern matcher producing fingerprints.
#[derive(Debug, Clone)]
pub struct PatternMatcher<'a> {
    index: &'a KeywordIndex,
    tables: WuManber,
}

impl<'a> PatternMatcher<'a> {
    pub fn new(index: &'a KeywordIndex) -> Self {
        Self {
            index,
            tables: WuManber::new(index),
        }
    }

    pub fn index(&self) -> &'a KeywordIndex {
        self.index
    }

    /// Keyword codes occurring in `text`, ordered by where they occur.
    pub fn fingerprint(&self, text: &[u8]) -> Fingerprint {
        let fingerprint = Fingerprint::new(self.tables.find_all(text));
        crate::verify::contracts::check_fingerprint_codes(self.index, &fingerprint);
        fingerprint
    }

    /// Like [`fingerprint`](Self::fingerprint), with the byte offset of each match.
    pub fn matches(&self, text: &[u8]) -> Vec<(usize, KeywordCode)> {
        let mut out = Vec::new();
        self.tables.scan(text, |start, code| out.push((start, code)));
        out
    }
}
