// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the branch-and-bound maximum clique.
//!
//! A bound that prunes too eagerly returns a clique that is valid but not
//! maximum. Only exhaustive search notices, so graphs stay small.

#![no_main]

use keyclique::max_clique;
use keyclique::testing::{brute_force_clique_size, is_clique};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&size, bits)) = data.split_first() else {
        return;
    };
    let n = (size as usize % 14) + 1;

    let mut m = vec![vec![false; n]; n];
    let mut bit = 0usize;
    for a in 0..n {
        for b in a + 1..n {
            let edge = bits
                .get(bit / 8)
                .is_some_and(|byte| byte & (1 << (bit % 8)) != 0);
            m[a][b] = edge;
            m[b][a] = edge;
            bit += 1;
        }
    }

    let clique = max_clique(&m);
    assert!(is_clique(&m, &clique));
    assert_eq!(clique.len(), brute_force_clique_size(&m));
});
