// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the detection pipeline.
//!
//! Debug-mode assertions on the hand-offs between stages. Zero-cost in
//! release builds; in tests they turn a silently wrong graph or clique into a
//! panic at the stage that produced it.
//!
//! | Contract                  | Checked after                         |
//! |---------------------------|---------------------------------------|
//! | `check_fingerprint_codes` | fingerprinting one document           |
//! | `check_common_run`        | suffix tree query                     |
//! | `check_adjacency`         | adjacency matrix export               |
//! | `check_clique`            | maximum clique search                 |

use crate::keywords::KeywordIndex;
use crate::similarity::CommonRun;
use crate::types::{Fingerprint, KeywordCode};

// ============================================================================
// FINGERPRINT CONTRACTS
// ============================================================================

/// Every code in a fingerprint was handed out by `index`.
///
/// # Panics (debug builds only)
/// Panics on a code outside the vocabulary.
#[inline]
pub fn check_fingerprint_codes(index: &KeywordIndex, fingerprint: &Fingerprint) {
    for (i, &code) in fingerprint.iter().enumerate() {
        debug_assert!(
            index.contains(code),
            "Contract violation: fingerprint[{}] = {} is not a code of this vocabulary",
            i,
            code
        );
    }
}

// ============================================================================
// SIMILARITY CONTRACTS
// ============================================================================

/// The common run occurs contiguously in both inputs.
///
/// # Panics (debug builds only)
/// Panics if either side lacks the run.
#[inline]
pub fn check_common_run(a: &[KeywordCode], b: &[KeywordCode], run: &CommonRun) {
    if run.is_empty() {
        return;
    }
    let occurs = |side: &[KeywordCode]| side.windows(run.len()).any(|w| w == run.codes.as_slice());

    debug_assert!(
        occurs(a),
        "Contract violation: common run of {} codes missing from left side",
        run.len()
    );
    debug_assert!(
        occurs(b),
        "Contract violation: common run of {} codes missing from right side",
        run.len()
    );
}

// ============================================================================
// GRAPH CONTRACTS
// ============================================================================

/// Square, symmetric, no self-loops.
///
/// # Panics (debug builds only)
/// Panics on the first offending cell.
#[inline]
pub fn check_adjacency(matrix: &[Vec<bool>]) {
    let n = matrix.len();
    for (i, row) in matrix.iter().enumerate() {
        debug_assert_eq!(
            row.len(),
            n,
            "Contract violation: adjacency row {} has {} cells, expected {}",
            i,
            row.len(),
            n
        );
        debug_assert!(!row[i], "Contract violation: self-loop on vertex {}", i);
        for j in 0..row.len().min(n) {
            debug_assert_eq!(
                row[j], matrix[j][i],
                "Contract violation: adjacency not symmetric at ({}, {})",
                i, j
            );
        }
    }
}

/// Distinct vertices, pairwise connected.
///
/// # Panics (debug builds only)
/// Panics if two members are equal or not adjacent.
#[inline]
pub fn check_clique(matrix: &[Vec<bool>], members: &[usize]) {
    for (i, &a) in members.iter().enumerate() {
        for &b in &members[i + 1..] {
            debug_assert!(a != b, "Contract violation: vertex {} repeated in clique", a);
            debug_assert!(
                matrix[a][b],
                "Contract violation: clique members {} and {} are not adjacent",
                a,
                b
            );
        }
    }
}
