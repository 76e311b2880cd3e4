// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel fingerprinting.
//!
//! Reading a document and running the matcher over it touches nothing shared
//! but the read-only Wu-Manber tables, so documents are fingerprinted with a
//! plain `par_iter()`. Order between documents is irrelevant: results land in
//! the path-keyed store, and the store is complete before graph building
//! starts. Order *within* a document is the matcher's job.
//!
//! A document that cannot be read is not an error. It gets an empty
//! fingerprint, a warning in the log, and can never be judged similar.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
use tracing::warn;

use crate::matcher::PatternMatcher;
use crate::types::{Fingerprint, FingerprintStore};

use super::document::load_text;

/// Read `path` and fingerprint it; unreadable documents come back empty.
pub fn fingerprint_file(matcher: &PatternMatcher<'_>, path: &str) -> Fingerprint {
    match load_text(path) {
        Ok(text) => matcher.fingerprint(&text),
        Err(e) => {
            warn!(path, error = %e, "unreadable document, using empty fingerprint");
            Fingerprint::empty()
        }
    }
}

/// Fingerprint in-memory texts. Used by tests and by callers that already
/// hold document contents.
pub fn fingerprint_texts<P, T>(matcher: &PatternMatcher<'_>, docs: &[(P, T)]) -> FingerprintStore
where
    P: AsRef<str> + Sync,
    T: AsRef<[u8]> + Sync,
{
    #[cfg(feature = "parallel")]
    let iter = docs.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = docs.iter();

    let pairs: Vec<(String, Fingerprint)> = iter
        .map(|(path, text)| (path.as_ref().to_string(), matcher.fingerprint(text.as_ref())))
        .collect();
    pairs.into_iter().collect()
}

/// Fingerprint every listed file in parallel.
#[cfg(feature = "parallel")]
pub fn fingerprint_files(matcher: &PatternMatcher<'_>, paths: &[String]) -> FingerprintStore {
    let pairs: Vec<(String, Fingerprint)> = paths
        .par_iter()
        .map(|path| (path.clone(), fingerprint_file(matcher, path)))
        .collect();
    pairs.into_iter().collect()
}

/// Fingerprint every listed file.
/// Non-parallel fallback.
#[cfg(not(feature = "parallel"))]
pub fn fingerprint_files(matcher: &PatternMatcher<'_>, paths: &[String]) -> FingerprintStore {
    paths
        .iter()
        .map(|path| (path.clone(), fingerprint_file(matcher, path)))
        .collect()
}

/// Fingerprint every listed file in parallel with progress reporting.
#[cfg(feature = "parallel")]
pub fn fingerprint_files_with_progress(
    matcher: &PatternMatcher<'_>,
    paths: &[String],
    progress: &ProgressBar,
) -> FingerprintStore {
    let counter = AtomicUsize::new(0);
    let total = paths.len();

    let pairs: Vec<(String, Fingerprint)> = paths
        .par_iter()
        .map(|path| {
            let fingerprint = fingerprint_file(matcher, path);

            // Update progress
            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count.is_multiple_of(10) || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            (path.clone(), fingerprint)
        })
        .collect();

    pairs.into_iter().collect()
}
