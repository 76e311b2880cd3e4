// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Run configuration and the fixed policy constants.
//!
//! There is no config file. The three paths come from the command line (or
//! their historical defaults), log verbosity comes from `RUST_LOG`, and the
//! similarity policy is compiled in. Changing the ratio changes what the tool
//! reports, so it lives here as a named constant rather than as a flag.

use std::path::PathBuf;

/// Default path of the document list.
pub const DEFAULT_INPUT: &str = "vstup.txt";

/// Default path of the keyword list.
pub const DEFAULT_KEYWORDS: &str = "kslova.txt";

/// Default path of the result file.
pub const DEFAULT_OUTPUT: &str = "vystup.txt";

/// First keyword code. Codes are assigned upward from here in input order.
pub const KEYWORD_CODE_BASE: u8 = 65;

/// Capacity of the keyword code space (`65..=125`).
pub const MAX_KEYWORDS: usize = 61;

/// Separator placed between the two fingerprints in the suffix tree buffer.
///
/// Must sit outside `KEYWORD_CODE_BASE..KEYWORD_CODE_BASE + MAX_KEYWORDS`.
pub const SEPARATOR: u8 = b'#';

/// Terminator appended after the second fingerprint. Unique in the buffer.
pub const TERMINATOR: u8 = b'$';

/// Similarity ratio as `(numerator, denominator)`: a pair is similar when the
/// weighted common run covers at least 1/5 of the smaller document.
///
/// Kept as a fraction so the boundary case compares exactly.
pub const SIMILARITY_RATIO: (usize, usize) = (1, 5);

/// Default `tracing` filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "keyclique=info";

// Both markers must be unrepresentable as keyword codes.
const _: () = {
    let last = KEYWORD_CODE_BASE as usize + MAX_KEYWORDS - 1;
    assert!(last <= u8::MAX as usize);
    assert!((SEPARATOR as usize) < KEYWORD_CODE_BASE as usize || SEPARATOR as usize > last);
    assert!((TERMINATOR as usize) < KEYWORD_CODE_BASE as usize || TERMINATOR as usize > last);
    assert!(SEPARATOR != TERMINATOR);
    assert!(SIMILARITY_RATIO.1 > 0);
};

/// Paths for one run of the finder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderConfig {
    /// Document list, one path per line. The first path is the pivot.
    pub input: PathBuf,
    /// Keyword list, one keyword per line.
    pub keywords: PathBuf,
    /// Where the clique members are written, one per line.
    pub output: PathBuf,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            keywords: PathBuf::from(DEFAULT_KEYWORDS),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl FinderConfig {
    /// Build a config, falling back to the defaults for any missing path.
    pub fn from_args(
        input: Option<PathBuf>,
        keywords: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            input: input.unwrap_or(defaults.input),
            keywords: keywords.unwrap_or(defaults.keywords),
            output: output.unwrap_or(defaults.output),
        }
    }
}
