//! Clique upper bound by partial MaxSAT reasoning.
//!
//! The vertices are first partitioned into independent-set classes by
//! greedy coloring. A clique takes at most one vertex per class, so the
//! class count already bounds the clique number. Each class then becomes a
//! soft clause ("the clique meets this class") under the hard constraint
//! that two non-adjacent vertices are never both chosen. A soft clause no
//! literal of which survives unit propagation is failed; each failed
//! clause lowers the bound by one, at the price of discarding the clauses
//! its refutation leaned on.

use crate::algorithm::GreedyColoring;
use crate::graph::*;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// Upper-bounds the size of any clique in `graph`.
pub fn clique_upper_bound<G: QueryableGraph>(graph: &G) -> usize {
    MaxSatBound::new(graph).bound()
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ClauseState {
    Untested,
    Tested,
    Discarded,
}

struct Clause {
    literals: BTreeSet<VertexId>,
    state: ClauseState,
}

struct MaxSatBound {
    adjacency: BTreeMap<VertexId, BTreeSet<VertexId>>,
    soft: Vec<Clause>,
}

impl MaxSatBound {
    fn new<G: QueryableGraph>(graph: &G) -> Self {
        let adjacency = graph
            .iter_vertices()
            .map(|v| (v, graph.neighbors(&v)))
            .collect();
        let soft = graph
            .independent_set_classes()
            .into_iter()
            .map(|class| Clause {
                literals: class.into_iter().collect(),
                state: ClauseState::Untested,
            })
            .collect();
        Self { adjacency, soft }
    }

    fn bound(&mut self) -> usize {
        let total = self.soft.len();
        let mut failed = 0;
        loop {
            let next = self
                .soft
                .iter()
                .enumerate()
                .filter(|(_, c)| c.state == ClauseState::Untested)
                .min_by_key(|(idx, c)| (c.literals.len(), *idx))
                .map(|(idx, _)| idx);
            let Some(idx) = next else {
                break;
            };
            match self.failed_clause(idx) {
                Some(implicated) => {
                    failed += 1;
                    self.soft[idx].state = ClauseState::Discarded;
                    for j in implicated {
                        self.soft[j].state = ClauseState::Discarded;
                    }
                }
                None => self.soft[idx].state = ClauseState::Tested,
            }
        }
        total - failed
    }

    /// Tries to refute every literal of clause `idx` in turn. On success
    /// returns the indices of the soft clauses the refutations relied on.
    fn failed_clause(&self, idx: usize) -> Option<BTreeSet<usize>> {
        let mut implicated = BTreeSet::new();
        for v in self.soft[idx].literals.iter() {
            let mut probe = Propagation::new(self, idx, true);
            if !probe.run(*v) {
                return None;
            }
            implicated.extend(probe.touched);
        }
        Some(implicated)
    }
}

/// One round of unit propagation over the soft clauses, excluding the
/// clause under test and every discarded clause.
#[derive(Clone)]
struct Propagation<'a> {
    bound: &'a MaxSatBound,
    binary_probing: bool,
    assignment: BTreeMap<VertexId, bool>,
    /// Working copies of the soft clauses; `None` means satisfied or
    /// out of play.
    working: Vec<Option<BTreeSet<VertexId>>>,
    /// Indices of clauses shrunk along the way.
    touched: BTreeSet<usize>,
}

impl<'a> Propagation<'a> {
    fn new(bound: &'a MaxSatBound, under_test: usize, binary_probing: bool) -> Self {
        let working = bound
            .soft
            .iter()
            .enumerate()
            .map(|(j, c)| {
                if j == under_test || c.state == ClauseState::Discarded {
                    None
                } else {
                    Some(c.literals.clone())
                }
            })
            .collect();
        Self {
            bound,
            binary_probing,
            assignment: BTreeMap::new(),
            working,
            touched: BTreeSet::new(),
        }
    }

    /// Asserts `seed` true and propagates. Returns whether a contradiction
    /// was reached.
    fn run(&mut self, seed: VertexId) -> bool {
        let mut queue = VecDeque::from([seed]);
        let mut shrunk_to_two = vec![];
        while let Some(v) = queue.pop_front() {
            match self.assignment.get(&v) {
                Some(true) => continue,
                Some(false) => return true,
                None => {}
            }
            self.assignment.insert(v, true);
            for slot in self.working.iter_mut() {
                if slot.as_ref().map_or(false, |lits| lits.contains(&v)) {
                    *slot = None;
                }
            }
            let neighbors = &self.bound.adjacency[&v];
            let strangers: Vec<VertexId> = self
                .bound
                .adjacency
                .keys()
                .filter(|u| **u != v && !neighbors.contains(u))
                .copied()
                .collect();
            for u in strangers {
                match self.assignment.get(&u) {
                    Some(false) => continue,
                    Some(true) => return true,
                    None => {}
                }
                self.assignment.insert(u, false);
                for (j, slot) in self.working.iter_mut().enumerate() {
                    let Some(lits) = slot else { continue };
                    if !lits.remove(&u) {
                        continue;
                    }
                    self.touched.insert(j);
                    match lits.len() {
                        0 => return true,
                        1 => queue.push_back(*lits.iter().next().unwrap()),
                        2 if self.binary_probing => shrunk_to_two.push(j),
                        _ => {}
                    }
                }
            }
        }
        for j in shrunk_to_two {
            if let Some(extra) = self.binary_clause_fails(j) {
                self.touched.extend(extra);
                return true;
            }
        }
        false
    }

    /// Probes both literals of a binary clause one level deep. If each of
    /// them leads to a contradiction on its own, the clause cannot be
    /// satisfied; the clauses both refutations leaned on are returned.
    fn binary_clause_fails(&self, j: usize) -> Option<BTreeSet<usize>> {
        let lits: Vec<VertexId> = match self.working[j].as_ref() {
            Some(lits) if lits.len() == 2 => lits.iter().copied().collect(),
            _ => return None,
        };
        let mut implicated = BTreeSet::new();
        for v in lits {
            let mut sub = self.clone();
            sub.binary_probing = false;
            if !sub.run(v) {
                return None;
            }
            implicated.extend(sub.touched);
        }
        implicated.insert(j);
        Some(implicated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::GreedyColoring;
    use crate::graph::undirected::{brute_force_omega, RandomGraph, TreeBackedGraph};
    use quickcheck_macros::quickcheck;

    #[test]
    fn empty_graph_has_bound_zero() {
        let g = TreeBackedGraph::new();
        assert_eq!(clique_upper_bound(&g), 0);
    }

    #[test]
    fn single_vertex_has_bound_one() {
        let mut g = TreeBackedGraph::new();
        g.add_vertex();
        assert_eq!(clique_upper_bound(&g), 1);
    }

    #[test]
    fn complete_graph_keeps_every_class() {
        let mut g = TreeBackedGraph::new();
        let vs: Vec<_> = (0..5).map(|_| g.add_vertex()).collect();
        for i in 0..5 {
            for j in (i + 1)..5 {
                g.add_edge(vs[i], vs[j]);
            }
        }
        assert_eq!(clique_upper_bound(&g), 5);
    }

    #[test]
    fn a_star_bounds_to_two() {
        // K_{1,3} has clique number 2; coloring alone already says 2.
        let mut g = TreeBackedGraph::new();
        let hub = g.add_vertex();
        for _ in 0..3 {
            let leaf = g.add_vertex();
            g.add_edge(hub, leaf);
        }
        assert_eq!(clique_upper_bound(&g), 2);
    }

    #[quickcheck]
    fn bound_is_sound(rg: RandomGraph) {
        let (g, _) = rg.build();
        let omega = brute_force_omega(&rg.adjacency_bits());
        assert!(clique_upper_bound(&g) >= omega);
    }

    #[quickcheck]
    fn bound_never_exceeds_the_coloring_bound(rg: RandomGraph) {
        let (g, _) = rg.build();
        assert!(clique_upper_bound(&g) <= g.coloring_bound());
    }
}
