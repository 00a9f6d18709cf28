use crate::algorithm::GreedyColoring;
use crate::graph::undirected::TreeBackedGraph;
use crate::graph::*;
use crate::solver::{clique_upper_bound, CliqueResult, MaxCliqueSolver, SolverError};
use std::collections::BTreeSet;

/// Exact maximum-clique search.
///
/// The maximum size is binary-searched between zero and the MaxSAT upper
/// bound; each candidate size is settled by a branch-and-bound probe for a
/// clique that large.
#[derive(Debug, Default, Clone, Copy)]
pub struct BranchBoundSolver;

impl MaxCliqueSolver for BranchBoundSolver {
    fn find_max_clique(&self, graph: &TreeBackedGraph) -> Result<CliqueResult, SolverError> {
        let mut calls = 0;
        let mut best = graph.subset(&BTreeSet::new());
        let mut low = 0;
        let mut high = clique_upper_bound(graph);
        while low < high {
            let want = (low + high + 1) / 2;
            match Self::probe(graph.clone(), want, &mut calls) {
                Some(clique) => {
                    low = clique.vertex_size();
                    best = clique;
                }
                None => high = want - 1,
            }
        }
        Ok(CliqueResult {
            clique: best,
            calls,
        })
    }
}

impl BranchBoundSolver {
    /// Searches for a clique on at least `want` vertices, also reporting
    /// how many probe calls the search took.
    pub fn find_clique(graph: &TreeBackedGraph, want: usize) -> (Option<TreeBackedGraph>, usize) {
        let mut calls = 0;
        let found = Self::probe(graph.clone(), want, &mut calls);
        (found, calls)
    }

    fn probe(mut graph: TreeBackedGraph, want: usize, calls: &mut usize) -> Option<TreeBackedGraph> {
        *calls += 1;
        if want == 0 {
            return Some(graph.subset(&BTreeSet::new()));
        }
        loop {
            if graph.vertex_size() < want {
                return None;
            }
            if clique_upper_bound(&graph) < want {
                return None;
            }
            if graph.is_clique() {
                return Some(graph);
            }
            // vertices with too few neighbors to sit in a clique this large
            let weak: Vec<VertexId> = graph
                .iter_vertices()
                .filter(|v| graph.degree(v) + 1 < want)
                .collect();
            if !weak.is_empty() {
                for v in weak {
                    let _ = graph.remove_vertex(&v);
                }
                continue;
            }
            let v = graph
                .iter_vertices()
                .min_by_key(|v| (graph.degree(v), *v))
                .unwrap();
            if graph.degree(&v) + 1 == want {
                // the only hope for v is its whole closed neighborhood
                let candidate = graph.neighborhood(&v);
                if candidate.is_clique() {
                    return Some(candidate);
                }
            } else {
                let around = graph.neighborhood(&v);
                if around.coloring_bound() >= want {
                    if let Some(clique) = Self::probe(around, want, calls) {
                        return Some(clique);
                    }
                }
            }
            // no clique this large contains v
            let _ = graph.remove_vertex(&v);
        }
    }
}
