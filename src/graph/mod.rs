// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The similarity graph and what gets built on top of it.
//!
//! Vertices are documents, deduplicated by path and addressed by dense
//! [`VertexId`]s in insertion order. Edges are unordered, added only, and
//! never loop back to their own vertex. Neighbour sets are ordered so that
//! everything downstream (matrix layout, clique order) is deterministic.
//!
//! - [`builder`]: the pivot-relative heuristic that decides which pairs to compare
//! - [`clique`]: exact maximum clique over the finished graph

pub mod builder;
pub mod clique;

use std::collections::{BTreeSet, HashMap};

use crate::types::{Clique, VertexId};

/// Undirected graph of documents judged similar.
#[derive(Debug, Clone, Default)]
pub struct SimilarityGraph {
    names: Vec<String>,
    ids: HashMap<String, VertexId>,
    neighbours: Vec<BTreeSet<VertexId>>,
}

impl SimilarityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertex for `name`, created if missing.
    pub fn add_vertex(&mut self, name: &str) -> VertexId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = VertexId::from(self.names.len());
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        self.neighbours.push(BTreeSet::new());
        id
    }

    /// Connect two documents, creating vertices as needed.
    ///
    /// Returns false when nothing changed: the edge already existed, or both
    /// names are the same document.
    pub fn add_edge(&mut self, a: &str, b: &str) -> bool {
        let a = self.add_vertex(a);
        let b = self.add_vertex(b);
        if a == b {
            return false;
        }
        let inserted = self.neighbours[a.as_usize()].insert(b);
        self.neighbours[b.as_usize()].insert(a);
        inserted
    }

    pub fn vertex(&self, name: &str) -> Option<VertexId> {
        self.ids.get(name).copied()
    }

    pub fn name(&self, id: VertexId) -> &str {
        &self.names[id.as_usize()]
    }

    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.neighbours.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn neighbours(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.neighbours[id.as_usize()].iter().copied()
    }

    pub fn degree(&self, id: VertexId) -> usize {
        self.neighbours[id.as_usize()].len()
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        match (self.vertex(a), self.vertex(b)) {
            (Some(a), Some(b)) => self.neighbours[a.as_usize()].contains(&b),
            _ => false,
        }
    }

    /// Vertex ids in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.names.len()).map(VertexId::from)
    }

    /// Dense adjacency matrix, indexed by vertex id. The diagonal is false.
    pub fn adjacency_matrix(&self) -> Vec<Vec<bool>> {
        let n = self.names.len();
        let mut matrix = vec![vec![false; n]; n];
        for (row, neighbours) in matrix.iter_mut().zip(&self.neighbours) {
            for neighbour in neighbours {
                row[neighbour.as_usize()] = true;
            }
        }
        crate::verify::contracts::check_adjacency(&matrix);
        matrix
    }

    /// Largest set of pairwise similar documents, in vertex insertion order.
    pub fn max_clique(&self) -> Clique {
        let matrix = self.adjacency_matrix();
        let mut ids = clique::max_clique(&matrix);
        ids.sort_unstable();
        crate::verify::contracts::check_clique(&matrix, &ids);

        Clique {
            members: ids
                .into_iter()
                .map(|index| self.names[index].clone())
                .collect(),
        }
    }
}
