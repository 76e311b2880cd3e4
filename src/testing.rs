// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! Slow but obviously-correct reference implementations live here so that
//! unit, property, and fuzz tests all compare against the same oracle.

#![doc(hidden)]

use crate::graph::SimilarityGraph;
use crate::keywords::KeywordIndex;
use crate::types::{Fingerprint, KeywordCode};

/// Fingerprint spelled out as keywords. Panics on unknown words.
pub fn fingerprint_of(index: &KeywordIndex, words: &[&str]) -> Fingerprint {
    words
        .iter()
        .map(|word| {
            index
                .code_of(word)
                .unwrap_or_else(|| panic!("{word:?} is not a keyword"))
        })
        .collect()
}

/// Every keyword occurrence by brute force: each offset, each keyword in
/// vocabulary order.
pub fn naive_fingerprint(index: &KeywordIndex, text: &[u8]) -> Fingerprint {
    let mut codes = Vec::new();
    for start in 0..text.len() {
        for (code, keyword) in index.iter() {
            if text[start..].starts_with(keyword) {
                codes.push(code);
            }
        }
    }
    Fingerprint::new(codes)
}

/// Length of the longest common contiguous run, by dynamic programming.
pub fn naive_longest_common_run(a: &[KeywordCode], b: &[KeywordCode]) -> usize {
    let mut best = 0;
    let mut prev = vec![0usize; b.len() + 1];
    for &x in a {
        let mut row = vec![0usize; b.len() + 1];
        for (j, &y) in b.iter().enumerate() {
            if x == y {
                row[j + 1] = prev[j] + 1;
                best = best.max(row[j + 1]);
            }
        }
        prev = row;
    }
    best
}

/// Heaviest weight among the longest common runs, by dynamic programming.
pub fn naive_common_run_weight(
    a: &[KeywordCode],
    b: &[KeywordCode],
    weight_of: impl Fn(KeywordCode) -> usize,
) -> usize {
    let mut best = (0usize, 0usize);
    let mut prev = vec![(0usize, 0usize); b.len() + 1];
    for &x in a {
        let mut row = vec![(0usize, 0usize); b.len() + 1];
        for (j, &y) in b.iter().enumerate() {
            if x == y {
                let (len, weight) = prev[j];
                row[j + 1] = (len + 1, weight + weight_of(x));
                best = best.max(row[j + 1]);
            }
        }
        prev = row;
    }
    best.1
}

/// Graph over vertices `"0".."n"` with the given edges.
pub fn graph_from_edges(n: usize, edges: &[(usize, usize)]) -> SimilarityGraph {
    let mut graph = SimilarityGraph::new();
    for v in 0..n {
        graph.add_vertex(&v.to_string());
    }
    for &(a, b) in edges {
        graph.add_edge(&a.to_string(), &b.to_string());
    }
    graph
}

/// Size of the maximum clique by trying every subset. Keep `n` small.
pub fn brute_force_clique_size(adjacency: &[Vec<bool>]) -> usize {
    let n = adjacency.len();
    assert!(n <= 16, "brute force over {n} vertices");
    let mut best = 0;
    for mask in 0u32..(1 << n) {
        let members: Vec<usize> = (0..n).filter(|&v| mask & (1 << v) != 0).collect();
        if members.len() > best && is_clique(adjacency, &members) {
            best = members.len();
        }
    }
    best
}

/// Whether `members` are pairwise adjacent.
pub fn is_clique(adjacency: &[Vec<bool>], members: &[usize]) -> bool {
    members
        .iter()
        .enumerate()
        .all(|(i, &a)| members[i + 1..].iter().all(|&b| adjacency[a][b]))
}
