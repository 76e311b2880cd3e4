// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use tracing_subscriber::EnvFilter;

use keyclique::config::DEFAULT_LOG_FILTER;

mod cli;
use cli::Cli;

/// Logs go to stderr so stdout stays the summary. `RUST_LOG` overrides the filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.config();
    match keyclique::build::run(&config) {
        Ok(report) => cli::display::print_summary(&config, &report),
        Err(e) => {
            eprintln!("❌ {:#}", anyhow::Error::new(e).context("keyclique failed"));
            std::process::exit(1);
        }
    }
}
