// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for Wu-Manber fingerprinting.
//!
//! The shift table is the only reason the matcher may skip text. If a shift is
//! too long, keywords silently vanish from fingerprints and documents stop
//! matching. Brute force over every offset is the reference.

#![no_main]

use arbitrary::Arbitrary;
use keyclique::testing::naive_fingerprint;
use keyclique::{KeywordIndex, PatternMatcher};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    keywords: Vec<Vec<u8>>,
    text: Vec<u8>,
}

fuzz_target!(|input: MatchInput| {
    // Cap sizes to keep the brute-force reference fast
    let keywords: Vec<Vec<u8>> = input
        .keywords
        .into_iter()
        .take(16)
        .map(|mut k| {
            k.truncate(8);
            k
        })
        .collect();
    let text = &input.text[..input.text.len().min(512)];

    // Misuse must be rejected, never panic
    let Ok(index) = KeywordIndex::new(&keywords) else {
        return;
    };
    let matcher = PatternMatcher::new(&index);

    assert_eq!(matcher.fingerprint(text), naive_fingerprint(&index, text));
});
