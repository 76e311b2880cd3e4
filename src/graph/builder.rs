// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pivot-relative graph construction.
//!
//! Comparing every pair of documents costs O(n²) suffix-tree builds. Instead
//! the first document acts as a pivot and the search is confined to its
//! neighbourhood:
//!
//! ```text
//! for doc in docs[1..]:
//!   if similar(pivot, doc):
//!     edge(pivot, doc)
//!     if graph has ≥ 3 vertices:
//!       for earlier in pivot_connected:  similar(doc, earlier) → edge
//!     pivot_connected.push(doc)
//!   else:
//!     skip doc entirely
//! ```
//!
//! **Limitation**: documents similar to each other but not to the pivot never
//! become vertices, so a cluster unrelated to the first document is invisible.
//! The tool assumes the first document is representative of the group being
//! looked for. Every clique found contains the pivot (or is the pivot alone).

use tracing::debug;

use crate::graph::SimilarityGraph;
use crate::similarity::SimilarityOracle;
use crate::types::{BuildStats, FingerprintStore};

/// Build the graph for `paths`, asking `similar(a, b)` about each pair the
/// heuristic visits. `paths[0]` is the pivot.
pub fn build_graph<S, F>(paths: &[S], mut similar: F) -> (SimilarityGraph, BuildStats)
where
    S: AsRef<str>,
    F: FnMut(&str, &str) -> bool,
{
    let mut graph = SimilarityGraph::new();
    let mut stats = BuildStats {
        documents: paths.len(),
        ..BuildStats::default()
    };

    let Some(pivot) = paths.first().map(AsRef::as_ref) else {
        return (graph, stats);
    };
    graph.add_vertex(pivot);

    let mut pivot_connected: Vec<usize> = Vec::new();

    for (i, path) in paths.iter().enumerate().skip(1) {
        let path = path.as_ref();
        let matched = similar(pivot, path);
        stats.comparisons += 1;
        debug!(left = 0, right = i, similar = matched, "comparing with pivot");
        if !matched {
            continue;
        }

        stats.matches += 1;
        graph.add_edge(pivot, path);

        if graph.vertex_count() >= 3 {
            for &j in &pivot_connected {
                let earlier = paths[j].as_ref();
                let matched = similar(path, earlier);
                stats.comparisons += 1;
                debug!(left = i, right = j, similar = matched, "comparing");
                if matched {
                    graph.add_edge(path, earlier);
                    stats.matches += 1;
                }
            }
        }
        pivot_connected.push(i);
    }

    (graph, stats)
}

/// [`build_graph`] with the suffix-tree oracle over stored fingerprints.
pub fn build_similarity_graph<S: AsRef<str>>(
    paths: &[S],
    fingerprints: &FingerprintStore,
    oracle: &SimilarityOracle<'_>,
) -> (SimilarityGraph, BuildStats) {
    build_graph(paths, |a, b| {
        oracle.is_similar(fingerprints.get(a), fingerprints.get(b))
    })
}
