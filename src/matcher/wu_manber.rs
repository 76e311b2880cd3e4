// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wu-Manber multi-pattern search.
//!
//! # Algorithm Overview
//!
//! ```text
//! keywords: "alpha" "beta" "gamma"      m = 4 (shortest), B = 2
//!
//! Only the first m bytes of each keyword take part in the tables:
//!   "alph"  "beta"  "gamm"
//!
//! SHIFT[block] = how far the window may slide if its last B bytes are `block`
//!   "al"→2  "lp"→1  "ph"→0  "be"→2  "et"→1  "ta"→0  ...  default m-B+1 = 3
//!
//! HASH[block] = keywords whose m-prefix ends in `block` (the shift-0 blocks)
//!   "ph"→[alpha]  "ta"→[beta]  "mm"→[gamma]
//!
//! scan: window = text[pos-m+1 ..= pos]
//!   SHIFT > 0  → pos += SHIFT           (no keyword can end its prefix here)
//!   SHIFT = 0  → verify HASH bucket at window start, pos += 1
//! ```
//!
//! Blocks are at most two bytes, so the block value is its own hash and the
//! table has no collisions to worry about.
//!
//! # Complexity
//!
//! - Build: O(Σ m) over keywords
//! - Scan: sub-linear when shifts are large, O(n · bucket) worst case
//!
//! # References
//!
//! - Wu, Manber (1994): "A Fast Algorithm for Multi-Pattern Searching"

use crate::keywords::KeywordIndex;
use crate::types::KeywordCode;

/// Maximum block size. Two bytes keep the shift table at 64K entries.
const MAX_BLOCK: usize = 2;

const TABLE_SIZE: usize = 1 << (8 * MAX_BLOCK);

/// Precomputed SHIFT and HASH tables for one vocabulary.
#[derive(Debug, Clone)]
pub struct WuManber {
    /// Window length: the shortest keyword.
    window: usize,
    /// Block length, `min(MAX_BLOCK, window)`.
    block: usize,
    shift: Vec<usize>,
    /// Candidate keywords per block, in vocabulary order.
    buckets: Vec<Vec<(KeywordCode, Vec<u8>)>>,
    first_bytes: [bool; 256],
}

#[inline]
fn block_value(block: &[u8]) -> usize {
    block
        .iter()
        .fold(0usize, |value, &byte| (value << 8) | byte as usize)
}

impl WuManber {
    pub fn new(index: &KeywordIndex) -> Self {
        let window = index.min_len();
        let block = MAX_BLOCK.min(window);
        let default_shift = window - block + 1;

        let mut shift = vec![default_shift; TABLE_SIZE];
        let mut buckets: Vec<Vec<(KeywordCode, Vec<u8>)>> = vec![Vec::new(); TABLE_SIZE];
        let mut first_bytes = [false; 256];

        for (code, keyword) in index.iter() {
            first_bytes[keyword[0] as usize] = true;
            let prefix = &keyword[..window];

            // Block ending at offset `end` may slide the window by `window - end`.
            for end in block..=window {
                let slot = block_value(&prefix[end - block..end]);
                shift[slot] = shift[slot].min(window - end);
            }

            let slot = block_value(&prefix[window - block..]);
            buckets[slot].push((code, keyword.to_vec()));
        }

        Self {
            window,
            block,
            shift,
            buckets,
            first_bytes,
        }
    }

    /// Codes of every keyword occurrence in `text`, ordered by start offset.
    pub fn find_all(&self, text: &[u8]) -> Vec<KeywordCode> {
        let mut found = Vec::new();
        self.scan(text, |_, code| found.push(code));
        found
    }

    /// Call `on_match(start, code)` for every occurrence, in start order.
    ///
    /// Keywords sharing a start offset are reported in vocabulary order.
    pub fn scan(&self, text: &[u8], mut on_match: impl FnMut(usize, KeywordCode)) {
        let window = self.window;
        if window == 0 || text.len() < window {
            return;
        }

        let mut pos = window - 1;
        while pos < text.len() {
            let slot = block_value(&text[pos + 1 - self.block..=pos]);
            let shift = self.shift[slot];
            if shift > 0 {
                pos += shift;
                continue;
            }

            let start = pos + 1 - window;
            if self.first_bytes[text[start] as usize] {
                for (code, keyword) in &self.buckets[slot] {
                    if text[start..].starts_with(keyword) {
                        on_match(start, *code);
                    }
                }
            }
            pos += 1;
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }
}
