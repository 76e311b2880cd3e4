// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ukkonen's online suffix tree construction over a byte buffer.
//!
//! # Algorithm Overview
//!
//! ```text
//! Input: "AB#B$"          (two fingerprints joined by '#', closed by '$')
//!
//! root
//! ├── "AB#B$"       leaf 0          (side A)
//! ├── "B"           internal        ← suffixes from both sides below
//! │   ├── "#B$"     leaf 1          (side A)
//! │   └── "$"       leaf 3          (side B)
//! ├── "#B$"         leaf 2          (separator, neither side)
//! └── "$"           leaf 4          (terminator, neither side)
//!
//! Deepest internal node with leaves from both sides spells the longest
//! common substring: "B".
//! ```
//!
//! Nodes live in a `Vec` arena and refer to each other by index. An edge label
//! is a `(start, end)` range into the tree's own buffer; leaves keep an open
//! end that grows with every phase, which is what makes the build linear.
//!
//! The last byte of the buffer must be unique so that every suffix ends in a
//! leaf. Callers append a terminator.
//!
//! # Complexity
//!
//! - Build: O(n) phases with amortized O(1) work (child maps are `BTreeMap`
//!   over a small alphabet)
//! - Query: O(n) single traversal
//!
//! # References
//!
//! - Ukkonen (1995): "On-line construction of suffix trees"
//! - <https://doi.org/10.1007/BF01206331>

use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Arena index of a node.
pub type NodeId = usize;

const ROOT: NodeId = 0;

/// Marks a leaf edge whose end follows the current phase.
const OPEN: usize = usize::MAX;

#[derive(Debug, Clone)]
struct Node {
    start: usize,
    end: usize,
    /// Suffix link. Only meaningful for internal nodes; defaults to root.
    link: NodeId,
    /// Starting offset of the suffix this leaf spells. `None` for internal nodes.
    suffix_start: Option<usize>,
    children: BTreeMap<u8, NodeId>,
}

impl Node {
    fn internal(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            link: ROOT,
            suffix_start: None,
            children: BTreeMap::new(),
        }
    }

    fn leaf(start: usize, suffix_start: usize) -> Self {
        Self {
            start,
            end: OPEN,
            link: ROOT,
            suffix_start: Some(suffix_start),
            children: BTreeMap::new(),
        }
    }
}

/// A substring shared by both sides, as a range of the tree's buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharedRun {
    /// Offset of one occurrence in the buffer.
    pub start: usize,
    /// Length in buffer symbols.
    pub len: usize,
    /// Sum of symbol weights over the run.
    pub weight: usize,
}

/// Suffix tree over an owned buffer.
#[derive(Debug, Clone)]
pub struct SuffixTree {
    text: Vec<u8>,
    nodes: Vec<Node>,
}

impl SuffixTree {
    /// Build the tree. The last byte of `text` must not occur anywhere else.
    pub fn build(text: Vec<u8>) -> Self {
        debug_assert!(
            text.last()
                .is_none_or(|last| !text[..text.len() - 1].contains(last)),
            "suffix tree buffer must end with a unique terminator"
        );

        let mut tree = SuffixTree {
            text,
            nodes: vec![Node::internal(0, 0)],
        };

        let mut active_node = ROOT;
        let mut active_edge = 0usize;
        let mut active_len = 0usize;
        let mut remainder = 0usize;

        for pos in 0..tree.text.len() {
            let byte = tree.text[pos];
            remainder += 1;
            let mut pending_link: Option<NodeId> = None;

            while remainder > 0 {
                if active_len == 0 {
                    active_edge = pos;
                }
                let edge_byte = tree.text[active_edge];

                match tree.nodes[active_node].children.get(&edge_byte).copied() {
                    None => {
                        let leaf = tree.push(Node::leaf(pos, pos + 1 - remainder));
                        tree.nodes[active_node].children.insert(edge_byte, leaf);
                        if let Some(node) = pending_link.take() {
                            tree.nodes[node].link = active_node;
                        }
                    }
                    Some(next) => {
                        let edge_len = tree.edge_len(next, pos + 1);
                        if active_len >= edge_len {
                            // Walk down; the extension is retried from `next`.
                            active_edge += edge_len;
                            active_len -= edge_len;
                            active_node = next;
                            continue;
                        }

                        let next_start = tree.nodes[next].start;
                        if tree.text[next_start + active_len] == byte {
                            // Already present: this phase is done.
                            if let Some(node) = pending_link.take() {
                                tree.nodes[node].link = active_node;
                            }
                            active_len += 1;
                            break;
                        }

                        let split = tree.push(Node::internal(next_start, next_start + active_len));
                        tree.nodes[active_node].children.insert(edge_byte, split);

                        let leaf = tree.push(Node::leaf(pos, pos + 1 - remainder));
                        tree.nodes[split].children.insert(byte, leaf);

                        tree.nodes[next].start += active_len;
                        let moved = tree.text[tree.nodes[next].start];
                        tree.nodes[split].children.insert(moved, next);

                        if let Some(node) = pending_link.replace(split) {
                            tree.nodes[node].link = split;
                        }
                    }
                }

                remainder -= 1;
                if active_node == ROOT && active_len > 0 {
                    active_len -= 1;
                    active_edge = pos + 1 - remainder;
                } else if active_node != ROOT {
                    active_node = tree.nodes[active_node].link;
                }
            }
        }

        tree
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Edge length of `id` while the current phase ends at `phase_end`.
    #[inline]
    fn edge_len(&self, id: NodeId, phase_end: usize) -> usize {
        let node = &self.nodes[id];
        let end = if node.end == OPEN { phase_end } else { node.end };
        end - node.start
    }

    #[inline]
    fn edge_end(&self, id: NodeId) -> usize {
        let end = self.nodes[id].end;
        if end == OPEN {
            self.text.len()
        } else {
            end
        }
    }

    /// Bytes spelled from the root down to the end of `id`'s edge.
    fn spelled(&self, id: NodeId, depth: usize) -> &[u8] {
        let end = self.edge_end(id);
        &self.text[end - depth..end]
    }

    pub fn text(&self) -> &[u8] {
        &self.text
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaves; equals the buffer length for a well-formed tree.
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| node.suffix_start.is_some())
            .count()
    }

    /// Whether `pattern` occurs somewhere in the buffer.
    pub fn contains(&self, pattern: &[u8]) -> bool {
        let mut node = ROOT;
        let mut matched = 0;

        while matched < pattern.len() {
            let Some(&child) = self.nodes[node].children.get(&pattern[matched]) else {
                return false;
            };
            let start = self.nodes[child].start;
            let end = self.edge_end(child);
            for &symbol in &self.text[start..end] {
                if matched == pattern.len() {
                    return true;
                }
                if symbol != pattern[matched] {
                    return false;
                }
                matched += 1;
            }
            node = child;
        }

        true
    }

    /// Deepest substring whose occurrences include a suffix from each side.
    ///
    /// `side_of(suffix_start)` returns a bit mask: `0b01` for the first side,
    /// `0b10` for the second, `0` for suffixes that belong to neither (the
    /// separator and terminator). `weight_of(symbol)` weighs buffer symbols.
    ///
    /// Depth is measured in symbols. Among equally deep candidates the heaviest
    /// wins, then the smallest in byte order, so the choice does not depend on
    /// which side came first.
    pub fn deepest_shared(
        &self,
        side_of: impl Fn(usize) -> u8,
        weight_of: impl Fn(u8) -> usize,
    ) -> Option<SharedRun> {
        const BOTH: u8 = 0b11;

        let mut prefix_weight = Vec::with_capacity(self.text.len() + 1);
        prefix_weight.push(0usize);
        for &symbol in &self.text {
            let last = prefix_weight[prefix_weight.len() - 1];
            prefix_weight.push(last + weight_of(symbol));
        }

        let count = self.nodes.len();
        let mut depth = vec![0usize; count];
        let mut weight = vec![0usize; count];
        let mut parent = vec![ROOT; count];
        let mut order = Vec::with_capacity(count);

        // Preorder: depths flow down.
        let mut stack = vec![ROOT];
        while let Some(id) = stack.pop() {
            order.push(id);
            for &child in self.nodes[id].children.values() {
                let start = self.nodes[child].start;
                let end = self.edge_end(child);
                depth[child] = depth[id] + (end - start);
                weight[child] = weight[id] + prefix_weight[end] - prefix_weight[start];
                parent[child] = id;
                stack.push(child);
            }
        }

        // Reverse preorder: side masks flow up.
        let mut sides = vec![0u8; count];
        let mut best: Option<NodeId> = None;
        for &id in order.iter().rev() {
            if let Some(suffix_start) = self.nodes[id].suffix_start {
                sides[id] |= side_of(suffix_start);
            }
            if id == ROOT {
                continue;
            }
            sides[parent[id]] |= sides[id];

            if sides[id] == BOTH {
                let better = best.is_none_or(|current| {
                    match (depth[id], weight[id]).cmp(&(depth[current], weight[current])) {
                        Ordering::Greater => true,
                        Ordering::Less => false,
                        Ordering::Equal => {
                            self.spelled(id, depth[id]) < self.spelled(current, depth[current])
                        }
                    }
                });
                if better {
                    best = Some(id);
                }
            }
        }

        best.map(|id| SharedRun {
            start: self.edge_end(id) - depth[id],
            len: depth[id],
            weight: weight[id],
        })
    }
}
