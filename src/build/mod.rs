// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The end-to-end run: lists in, largest similar group out.
//!
//! ```text
//! manifest ──▶ KeywordIndex ──▶ fingerprints ──▶ graph ──▶ clique ──▶ output
//!   (I/O)        (fatal on        (parallel,      (pivot     (exact)    (I/O)
//!                 misuse)          per-doc         heuristic)
//!                                  errors absorbed)
//! ```
//!
//! Each stage completes before the next starts. Fatal errors (unreadable
//! lists, unusable vocabulary, unwritable output) propagate as [`Error`];
//! everything else is logged and absorbed.

pub mod document;
pub mod manifest;
pub mod parallel;

use std::fs;
use std::io::Write;
use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::config::FinderConfig;
use crate::error::{Error, Result};
use crate::graph::builder::build_similarity_graph;
use crate::keywords::KeywordIndex;
use crate::matcher::PatternMatcher;
use crate::similarity::SimilarityOracle;
use crate::types::{BuildStats, Clique, FingerprintStore};

pub use document::*;
pub use manifest::*;
pub use parallel::*;

/// What a run found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub stats: BuildStats,
    /// Vertices in the similarity graph (pivot included).
    pub vertices: usize,
    /// Edges in the similarity graph.
    pub edges: usize,
    pub clique: Clique,
}

/// Create the progress style for the fingerprinting bar
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

/// Graph and clique stages over fingerprints that are already complete.
pub fn find_group<S: AsRef<str>>(
    paths: &[S],
    fingerprints: &FingerprintStore,
    index: &KeywordIndex,
) -> RunReport {
    let oracle = SimilarityOracle::new(index);

    info!(documents = paths.len(), "building similarity graph");
    let (graph, stats) = build_similarity_graph(paths, fingerprints, &oracle);
    info!(
        comparisons = stats.comparisons,
        matches = stats.matches,
        vertices = graph.vertex_count(),
        "similarity graph built"
    );

    info!("finding max clique");
    let clique = graph.max_clique();
    info!(size = clique.len(), "max clique found");

    RunReport {
        stats,
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        clique,
    }
}

/// Fingerprint `paths` from disk, showing a progress bar when available.
fn fingerprint_all(matcher: &PatternMatcher<'_>, paths: &[String]) -> FingerprintStore {
    #[cfg(feature = "parallel")]
    {
        let progress = ProgressBar::new(paths.len() as u64);
        progress.set_style(create_progress_style());
        progress.set_prefix("Loading");
        progress.set_message("documents...");

        let store = fingerprint_files_with_progress(matcher, paths, &progress);
        progress.finish_with_message(format!("fingerprinted {} documents", store.len()));
        store
    }

    #[cfg(not(feature = "parallel"))]
    fingerprint_files(matcher, paths)
}

/// Write clique members, one per line.
pub fn write_output(path: &Path, clique: &Clique) -> Result<()> {
    let mut out = Vec::new();
    for member in &clique.members {
        out.extend_from_slice(member.as_bytes());
        out.push(b'\n');
    }
    fs::File::create(path)
        .and_then(|mut file| file.write_all(&out))
        .map_err(|e| Error::io(path, e))
}

/// Run the whole pipeline described by `config`.
pub fn run(config: &FinderConfig) -> Result<RunReport> {
    let manifest = InputManifest::load(&config.input, &config.keywords)?;
    let index = KeywordIndex::new(&manifest.keywords)?;
    info!(
        documents = manifest.documents.len(),
        keywords = index.len(),
        min_len = index.min_len(),
        "inputs loaded"
    );

    let matcher = PatternMatcher::new(&index);
    let fingerprints = fingerprint_all(&matcher, &manifest.documents);
    info!(documents = fingerprints.len(), "files loaded and processed");

    let report = find_group(&manifest.documents, &fingerprints, &index);

    write_output(&config.output, &report.clique)?;
    info!(path = %config.output.display(), "results written");

    Ok(report)
}
