// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword-fingerprint document similarity and maximum similar groups.
//!
//! Documents are reduced to the sequence of vocabulary keywords they contain,
//! pairs of such fingerprints are compared by their longest shared run, and the
//! largest set of pairwise-similar documents is reported.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  keywords.rs │────▶│  matcher/    │────▶│ similarity/  │
//! │ (KeywordIndex│     │ (Wu-Manber,  │     │ (suffix tree,│
//! │  codes 65..) │     │  Fingerprint)│     │  threshold)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                                                  │
//!                                                  ▼
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   build/     │◀────│ graph/clique │◀────│graph/builder │
//! │ (run, I/O,   │     │ (exact max   │     │ (pivot       │
//! │  parallel)   │     │  clique)     │     │  heuristic)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use keyclique::{KeywordIndex, PatternMatcher, SimilarityOracle};
//!
//! let index = KeywordIndex::new(["alpha", "beta", "gamma"]).unwrap();
//! let matcher = PatternMatcher::new(&index);
//! let a = matcher.fingerprint(b"alpha beta gamma");
//! let b = matcher.fingerprint(b"... alpha beta gamma ...");
//!
//! assert!(SimilarityOracle::new(&index).is_similar(&a, &b));
//! ```

pub mod build;
pub mod config;
pub mod error;
pub mod graph;
pub mod keywords;
pub mod matcher;
pub mod similarity;
pub mod types;
pub mod verify;

#[doc(hidden)]
pub mod testing;

pub use build::{find_group, run, RunReport};
pub use config::FinderConfig;
pub use error::{ConfigError, Error, Result};
pub use graph::builder::{build_graph, build_similarity_graph};
pub use graph::clique::max_clique;
pub use graph::SimilarityGraph;
pub use keywords::KeywordIndex;
pub use matcher::PatternMatcher;
pub use similarity::{longest_common_run, meets_threshold, CommonRun, SimilarityOracle, Verdict};
pub use types::{BuildStats, Clique, Fingerprint, FingerprintStore, KeywordCode, VertexId};
