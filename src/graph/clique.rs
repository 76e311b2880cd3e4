// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact maximum clique by branch and bound with coloring bounds.
//!
//! # Algorithm Overview
//!
//! ```text
//! expand(R):                       R = candidates, each with a color bound
//!   while R not empty:
//!     (p, color) = R.pop()         highest color first
//!     if |Q| + color ≤ |Qmax|:     nothing left here can beat the best
//!       return
//!     Q.push(p)
//!     R' = R ∩ N(p)
//!     if R' empty:  Qmax = max(Qmax, Q)
//!     else:         color R' greedily, sort by color, expand(R')
//!     Q.pop()
//! ```
//!
//! A greedy coloring splits `R'` into independent sets. A clique takes at most
//! one vertex from each, so a vertex colored `k` (with every lower-colored
//! vertex before it) bounds the clique size it can still contribute by `k`.
//! Vertices whose color is too low to matter stay at the front with bound 0:
//! they are never branched on, but remain available as neighbours.
//!
//! The "dynamic" part re-sorts candidates by degree near the root of the
//! search, where better ordering pays for its cost. How near is decided by the
//! share of search steps spent at that level (`T_LIMIT`).
//!
//! # References
//!
//! - Konc, Janežič (2007): "An improved branch and bound algorithm for the
//!   maximum clique problem", MATCH Commun. Math. Comput. Chem. 58, 569–590
//! - Tomita, Seki (2003): "An efficient branch-and-bound algorithm for finding
//!   a maximum clique"

/// Share of steps below which a level still gets degree re-sorting.
const T_LIMIT: f64 = 0.025;

#[derive(Debug, Clone, Copy)]
struct Candidate {
    vertex: usize,
    /// Upper bound on the clique size reachable through this candidate.
    color: usize,
}

/// Per-level step counters driving the dynamic re-sort.
#[derive(Debug, Clone, Copy, Default)]
struct LevelSteps {
    /// Steps taken at this level and above.
    total: usize,
    /// Parent's `total` when this level was last entered.
    seen: usize,
}

struct Search<'a> {
    adjacency: &'a [Vec<bool>],
    current: Vec<usize>,
    best: Vec<usize>,
    levels: Vec<LevelSteps>,
    steps: usize,
    classes: Vec<Vec<usize>>,
}

/// Vertices of a maximum clique of `adjacency`.
///
/// `adjacency` must be square and symmetric; the diagonal is ignored. The
/// result is empty only for an empty graph.
pub fn max_clique(adjacency: &[Vec<bool>]) -> Vec<usize> {
    let n = adjacency.len();
    if n == 0 {
        return Vec::new();
    }

    let degrees: Vec<usize> = (0..n)
        .map(|v| (0..n).filter(|&u| u != v && adjacency[v][u]).count())
        .collect();

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| degrees[b].cmp(&degrees[a]).then(a.cmp(&b)));

    // Initial bounds: position i can close a clique of at most i + 1, and no
    // clique exceeds the largest degree plus one.
    let max_degree = degrees[order[0]];
    let candidates: Vec<Candidate> = order
        .iter()
        .enumerate()
        .map(|(position, &vertex)| Candidate {
            vertex,
            color: position.min(max_degree) + 1,
        })
        .collect();

    let mut search = Search {
        adjacency,
        current: Vec::with_capacity(n),
        best: Vec::new(),
        levels: vec![LevelSteps::default(); n + 2],
        steps: 0,
        classes: vec![Vec::new(); n + 2],
    };
    search.expand(candidates, 1);
    search.best
}

impl Search<'_> {
    #[inline]
    fn connected(&self, a: usize, b: usize) -> bool {
        a != b && self.adjacency[a][b]
    }

    fn expand(&mut self, mut candidates: Vec<Candidate>, level: usize) {
        let parent_total = self.levels[level - 1].total;
        let steps = &mut self.levels[level];
        steps.total = steps.total + parent_total - steps.seen;
        steps.seen = parent_total;

        while let Some(Candidate { vertex, color }) = candidates.pop() {
            if self.current.len() + color <= self.best.len() {
                return;
            }

            self.current.push(vertex);
            let mut next: Vec<Candidate> = candidates
                .iter()
                .filter(|candidate| self.connected(vertex, candidate.vertex))
                .map(|candidate| Candidate {
                    vertex: candidate.vertex,
                    color: 0,
                })
                .collect();

            if next.is_empty() {
                if self.current.len() > self.best.len() {
                    self.best = self.current.clone();
                }
            } else {
                self.steps += 1;
                if (self.levels[level].total as f64) / (self.steps as f64) < T_LIMIT {
                    self.degree_sort(&mut next);
                }
                self.color_sort(&mut next);
                self.levels[level].total += 1;
                self.expand(next, level + 1);
            }

            self.current.pop();
        }
    }

    /// Order candidates by degree inside the candidate set, highest first.
    fn degree_sort(&self, candidates: &mut [Candidate]) {
        let degrees: Vec<usize> = candidates
            .iter()
            .map(|a| {
                candidates
                    .iter()
                    .filter(|b| self.connected(a.vertex, b.vertex))
                    .count()
            })
            .collect();

        let mut ranked: Vec<(usize, Candidate)> = degrees
            .into_iter()
            .zip(candidates.iter().copied())
            .collect();
        ranked.sort_by(|a, b| b.0.cmp(&a.0));
        for (slot, (_, candidate)) in candidates.iter_mut().zip(ranked) {
            *slot = candidate;
        }
    }

    /// Greedy sequential coloring; candidates end up sorted by color.
    fn color_sort(&mut self, candidates: &mut [Candidate]) {
        let min_color = (self.best.len() + 1).saturating_sub(self.current.len()).max(1);
        let mut max_color = 1;
        self.classes[1].clear();
        self.classes[2].clear();

        let mut kept = 0;
        for i in 0..candidates.len() {
            let vertex = candidates[i].vertex;
            let mut color = 1;
            while self.classes[color]
                .iter()
                .any(|&other| self.connected(vertex, other))
            {
                color += 1;
            }
            if color > max_color {
                max_color = color;
                self.classes[max_color + 1].clear();
            }
            self.classes[color].push(vertex);

            // Too low to ever beat the best: park it up front with no bound.
            if color < min_color {
                candidates[kept] = Candidate { vertex, color: 0 };
                kept += 1;
            }
        }

        for color in min_color..=max_color {
            for &vertex in &self.classes[color] {
                candidates[kept] = Candidate { vertex, color };
                kept += 1;
            }
        }
        debug_assert_eq!(kept, candidates.len());
    }
}
