// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data every stage passes to the next.
//!
//! A document enters as raw bytes and leaves the matcher as a [`Fingerprint`]:
//! the keyword codes it contains, in the order they occur. From then on the
//! fingerprint is the document. Nothing downstream looks at text again.
//!
//! # Invariants
//!
//! - **KeywordCode**: always inside `KEYWORD_CODE_BASE..KEYWORD_CODE_BASE + MAX_KEYWORDS`.
//!   Only [`KeywordIndex`](crate::KeywordIndex) hands them out, so a code in a
//!   fingerprint always has a byte length.
//!
//! - **Fingerprint**: immutable once built; there is no `push`.
//!
//! - **VertexId**: dense index into the graph's vertex list, stable for the
//!   life of the graph.

use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;

use crate::config::{KEYWORD_CODE_BASE, MAX_KEYWORDS};

// =============================================================================
// NEWTYPES
// =============================================================================

/// Compact code standing for one keyword.
///
/// Codes are bytes so that a fingerprint can be fed to the suffix tree as-is
/// with the separator and terminator spliced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct KeywordCode(u8);

impl KeywordCode {
    /// Code for the keyword at `position` in the vocabulary, if within capacity.
    #[inline]
    pub fn from_position(position: usize) -> Option<Self> {
        if position < MAX_KEYWORDS {
            Some(KeywordCode(KEYWORD_CODE_BASE + position as u8))
        } else {
            None
        }
    }

    /// Reinterpret a raw byte as a code, if it lies in the code space.
    #[inline]
    pub fn from_byte(byte: u8) -> Option<Self> {
        byte.checked_sub(KEYWORD_CODE_BASE)
            .and_then(|position| Self::from_position(position as usize))
    }

    /// Position of the keyword in the vocabulary.
    #[inline]
    pub fn position(self) -> usize {
        (self.0 - KEYWORD_CODE_BASE) as usize
    }

    /// Raw byte value.
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for KeywordCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Index of a vertex in a [`SimilarityGraph`](crate::SimilarityGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct VertexId(pub u32);

impl VertexId {
    /// Convert to usize for array indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        VertexId(index as u32)
    }
}

// =============================================================================
// FINGERPRINTS
// =============================================================================

/// Ordered keyword codes found in one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Fingerprint(Vec<KeywordCode>);

impl Fingerprint {
    pub fn new(codes: Vec<KeywordCode>) -> Self {
        Fingerprint(codes)
    }

    /// The fingerprint of a document with no keyword occurrences (or no text).
    pub fn empty() -> Self {
        Fingerprint(Vec::new())
    }

    pub fn codes(&self) -> &[KeywordCode] {
        &self.0
    }

    /// Codes as raw bytes, in order.
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().map(|code| code.get())
    }
}

impl Deref for Fingerprint {
    type Target = [KeywordCode];

    fn deref(&self) -> &[KeywordCode] {
        &self.0
    }
}

impl FromIterator<KeywordCode> for Fingerprint {
    fn from_iter<I: IntoIterator<Item = KeywordCode>>(iter: I) -> Self {
        Fingerprint(iter.into_iter().collect())
    }
}

/// Fingerprints keyed by document path.
///
/// Filled completely before graph building starts, read-only afterwards.
#[derive(Debug, Default)]
pub struct FingerprintStore {
    by_path: HashMap<String, Fingerprint>,
}

impl FingerprintStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a document's fingerprint. A repeated path keeps its first fingerprint.
    pub fn insert(&mut self, path: impl Into<String>, fingerprint: Fingerprint) {
        self.by_path.entry(path.into()).or_insert(fingerprint);
    }

    /// Fingerprint for `path`; unknown paths read as empty.
    pub fn get(&self, path: &str) -> &Fingerprint {
        static EMPTY: Fingerprint = Fingerprint(Vec::new());
        self.by_path.get(path).unwrap_or(&EMPTY)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.by_path.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Fingerprint)> for FingerprintStore {
    fn from_iter<I: IntoIterator<Item = (S, Fingerprint)>>(iter: I) -> Self {
        let mut store = FingerprintStore::new();
        for (path, fingerprint) in iter {
            store.insert(path, fingerprint);
        }
        store
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// Comparison counters collected while building the graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Documents seen, pivot included.
    pub documents: usize,
    /// Pairwise oracle calls.
    pub comparisons: usize,
    /// Oracle calls that answered "similar".
    pub matches: usize,
}

/// The largest group of mutually similar documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clique {
    pub members: Vec<String>,
}

impl Clique {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.members.iter().any(|member| member == path)
    }
}
