// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the suffix-tree longest common run.
//!
//! Ukkonen's construction is easy to get subtly wrong (suffix links, walk-down
//! past an edge). Any such bug shows up as a common run of the wrong length,
//! which the quadratic DP catches.

#![no_main]

use arbitrary::Arbitrary;
use keyclique::testing::{naive_common_run_weight, naive_longest_common_run};
use keyclique::{Fingerprint, KeywordCode, KeywordIndex, SimilarityOracle};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct RunInput {
    vocabulary: u8,
    a: Vec<u8>,
    b: Vec<u8>,
}

fn fingerprint(raw: &[u8], vocabulary: usize) -> Fingerprint {
    raw.iter()
        .take(200)
        .filter_map(|&p| KeywordCode::from_position(p as usize % vocabulary))
        .collect()
}

fuzz_target!(|input: RunInput| {
    let vocabulary = (input.vocabulary as usize % 8) + 1;
    let words: Vec<String> = (0..vocabulary)
        .map(|i| "k".repeat(i + 1))
        .collect();
    let Ok(index) = KeywordIndex::new(&words) else {
        return;
    };

    let a = fingerprint(&input.a, vocabulary);
    let b = fingerprint(&input.b, vocabulary);
    let oracle = SimilarityOracle::new(&index);
    let run = oracle.common_run(&a, &b);

    assert_eq!(run.len(), naive_longest_common_run(&a, &b));
    assert_eq!(run.weight, naive_common_run_weight(&a, &b, |c| index.byte_len(c)));
    assert_eq!(oracle.compare(&a, &b), oracle.compare(&b, &a));
});
