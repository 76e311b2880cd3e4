// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deciding whether two fingerprints describe similar documents.
//!
//! The comparison works on keyword codes, never on text. Two fingerprints are
//! joined as `A # B $`, a suffix tree is built over that buffer, and the
//! deepest node with suffixes from both sides gives the longest run of codes
//! the documents share. That run is then weighed by keyword byte length:
//! a shared `"synchronized"` counts for more than a shared `"if"`.
//!
//! # The rule
//!
//! ```text
//! L = min(weight(A), weight(B))
//! similar  ⇔  L > 0  ∧  run ≠ ∅  ∧  weight(run) ≥ 0.2 · L
//! ```
//!
//! Normalizing by the *smaller* document makes the rule symmetric and lets a
//! short excerpt copied wholesale into a long document count as a match.

pub mod suffix_tree;

use crate::config::{SEPARATOR, SIMILARITY_RATIO, TERMINATOR};
use crate::keywords::KeywordIndex;
use crate::types::{Fingerprint, KeywordCode};

use suffix_tree::SuffixTree;

/// Longest run of codes common to two fingerprints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonRun {
    pub codes: Vec<KeywordCode>,
    /// Sum of keyword byte lengths over `codes`.
    pub weight: usize,
}

impl CommonRun {
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }
}

/// Outcome of one pairwise comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub similar: bool,
    /// Weight of the longest common run.
    pub common_weight: usize,
    /// Weight of the smaller fingerprint.
    pub smaller_weight: usize,
}

/// Whether a run of `common` weight is enough against a document of `smaller` weight.
///
/// Exact: `common ≥ smaller · 1/5` is evaluated as `5 · common ≥ smaller`.
#[inline]
pub fn meets_threshold(common: usize, smaller: usize) -> bool {
    let (numerator, denominator) = SIMILARITY_RATIO;
    smaller > 0 && common > 0 && common * denominator >= smaller * numerator
}

/// Longest common contiguous run of two code sequences, weighed by `weight_of`.
///
/// Runs of equal length are broken by weight, then by code order, so the
/// result is the same whichever argument comes first.
pub fn longest_common_run(
    a: &[KeywordCode],
    b: &[KeywordCode],
    weight_of: impl Fn(KeywordCode) -> usize,
) -> CommonRun {
    if a.is_empty() || b.is_empty() {
        return CommonRun::default();
    }

    let mut buffer = Vec::with_capacity(a.len() + b.len() + 2);
    buffer.extend(a.iter().map(|code| code.get()));
    buffer.push(SEPARATOR);
    buffer.extend(b.iter().map(|code| code.get()));
    buffer.push(TERMINATOR);

    let a_end = a.len();
    let b_start = a.len() + 1;
    let b_end = b_start + b.len();

    let tree = SuffixTree::build(buffer);
    let side_of = |suffix_start: usize| {
        if suffix_start < a_end {
            0b01
        } else if (b_start..b_end).contains(&suffix_start) {
            0b10
        } else {
            0
        }
    };
    let symbol_weight = |symbol: u8| KeywordCode::from_byte(symbol).map_or(0, &weight_of);

    let Some(shared) = tree.deepest_shared(side_of, symbol_weight) else {
        return CommonRun::default();
    };

    let codes: Vec<KeywordCode> = tree.text()[shared.start..shared.start + shared.len]
        .iter()
        .filter_map(|&symbol| KeywordCode::from_byte(symbol))
        .collect();
    debug_assert_eq!(codes.len(), shared.len, "shared run crossed a marker");

    let run = CommonRun {
        codes,
        weight: shared.weight,
    };
    crate::verify::contracts::check_common_run(a, b, &run);
    run
}

/// Pairwise similarity judge bound to one vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct SimilarityOracle<'a> {
    index: &'a KeywordIndex,
}

impl<'a> SimilarityOracle<'a> {
    pub fn new(index: &'a KeywordIndex) -> Self {
        Self { index }
    }

    /// Sum of keyword byte lengths over a fingerprint. Empty weighs 0.
    pub fn weighted_length(&self, codes: &[KeywordCode]) -> usize {
        self.index.weighted_len(codes)
    }

    pub fn common_run(&self, a: &Fingerprint, b: &Fingerprint) -> CommonRun {
        longest_common_run(a, b, |code| self.index.byte_len(code))
    }

    /// Full comparison with the numbers behind the decision.
    pub fn compare(&self, a: &Fingerprint, b: &Fingerprint) -> Verdict {
        let smaller_weight = self.weighted_length(a).min(self.weighted_length(b));
        if smaller_weight == 0 {
            return Verdict {
                similar: false,
                common_weight: 0,
                smaller_weight,
            };
        }

        let run = self.common_run(a, b);
        Verdict {
            similar: !run.is_empty() && meets_threshold(run.weight, smaller_weight),
            common_weight: run.weight,
            smaller_weight,
        }
    }

    pub fn is_similar(&self, a: &Fingerprint, b: &Fingerprint) -> bool {
        self.compare(a, b).similar
    }
}
