// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Two families, kept apart on purpose: a [`ConfigError`] means the keyword
//! list itself is unusable (misuse), an [`Error::Io`] means the environment
//! failed us. Both are fatal when they reach `main`. An unreadable *document*
//! never becomes an error at all; the loader logs it and hands back an empty
//! fingerprint.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The keyword vocabulary cannot be turned into an index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// More keywords than there are codes.
    #[error("keyword limit overrun: {found} keywords given, at most {limit} supported")]
    TooManyKeywords { limit: usize, found: usize },

    /// A keyword with no bytes would match everywhere.
    #[error("keyword #{position} is empty")]
    EmptyKeyword { position: usize },

    /// The same keyword text listed twice.
    #[error("keyword {keyword:?} is listed more than once")]
    DuplicateKeyword { keyword: String },

    /// Nothing to match against.
    #[error("keyword list is empty")]
    NoKeywords,
}

/// Fatal errors for a run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// True for vocabulary misuse, false for environment failures.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
