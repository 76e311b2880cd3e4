// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the keyclique command-line interface.
//!
//! No subcommands and no option flags: up to three positional paths, each falling back to its
//! default in the working directory when omitted.

pub mod display;

use std::path::PathBuf;

use clap::Parser;
use keyclique::config::{FinderConfig, DEFAULT_INPUT, DEFAULT_KEYWORDS, DEFAULT_OUTPUT};

#[derive(Parser, Debug)]
#[command(
    name = "keyclique",
    about = "Find the largest group of mutually similar documents by keyword fingerprint",
    version
)]
pub struct Cli {
    /// File listing the documents to compare, one path per line
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// File listing the keywords, one per line (at most 61)
    #[arg(value_name = "KEYWORDS", default_value = DEFAULT_KEYWORDS)]
    pub keywords: PathBuf,

    /// Where to write the paths of the largest similar group
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

impl Cli {
    pub fn config(&self) -> FinderConfig {
        FinderConfig::from_args(
            Some(self.input.clone()),
            Some(self.keywords.clone()),
            Some(self.output.clone()),
        )
    }
}
