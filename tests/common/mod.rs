//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use std::fs;
use std::path::{Path, PathBuf};

use keyclique::FinderConfig;
use tempfile::TempDir;

pub use keyclique::testing::{fingerprint_of, graph_from_edges, is_clique};

// ============================================================================
// VOCABULARIES
// ============================================================================

/// Small vocabulary with keywords of distinct lengths.
pub const GREEK: [&str; 5] = ["alpha", "beta", "gamma", "delta", "epsilon"];

/// Programming-language flavoured vocabulary, as the tool is usually fed.
pub const RESERVED: [&str; 10] = [
    "if", "else", "while", "for", "return", "break", "continue", "switch", "case", "default",
];

// ============================================================================
// ON-DISK FIXTURES
// ============================================================================

/// A scratch directory holding documents, both list files and the output.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a document and return its absolute path as listed in the input file.
    pub fn document(&self, name: &str, content: &str) -> String {
        let path = self.path(name);
        fs::write(&path, content).expect("write document");
        path.display().to_string()
    }

    pub fn list(&self, name: &str, lines: &[&str]) -> PathBuf {
        let path = self.path(name);
        let mut content = lines.join("\n");
        content.push('\n');
        fs::write(&path, content).expect("write list");
        path
    }

    /// Config pointing at `vstup.txt`, `kslova.txt`, `vystup.txt` in the workspace.
    pub fn config(&self, documents: &[&str], keywords: &[&str]) -> FinderConfig {
        FinderConfig {
            input: self.list("vstup.txt", documents),
            keywords: self.list("kslova.txt", keywords),
            output: self.path("vystup.txt"),
        }
    }

    pub fn output_lines(&self) -> Vec<String> {
        read_lines(&self.path("vystup.txt"))
    }
}

pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read output")
        .lines()
        .map(str::to_string)
        .collect()
}
