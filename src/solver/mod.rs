//! The maximum-clique solver contract and the operations derived from it.
//!
//! A [MaxCliqueSolver] only has to find one maximum clique; independent
//! sets, vertex covers and partitions all reduce to that through the
//! complement graph.

use crate::graph::undirected::TreeBackedGraph;
use crate::graph::*;
use std::collections::BTreeSet;

mod branch_bound;
pub use self::branch_bound::*;
mod external;
pub use self::external::*;
mod maxsat;
pub use self::maxsat::*;

#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("solver I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("unusable solver output: {0}")]
    Output(String),
    #[error("solver output names unknown vertex {0}")]
    UnknownVertex(usize),
}

/// A maximum clique, as the induced subgraph on its vertices, along with
/// how many search calls it took to find.
#[derive(Clone)]
pub struct CliqueResult {
    pub clique: TreeBackedGraph,
    pub calls: usize,
}

impl CliqueResult {
    /// The clique vertices, ascending.
    pub fn vertices(&self) -> Vec<VertexId> {
        self.clique.iter_vertices().collect()
    }

    pub fn size(&self) -> usize {
        self.clique.vertex_size()
    }
}

impl std::fmt::Debug for CliqueResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CliqueResult {{ vertices: {:?}, calls: {} }}",
            self.vertices(),
            self.calls
        )
    }
}

pub trait MaxCliqueSolver {
    /// Finds a maximum clique of an undirected graph.
    fn find_max_clique(&self, graph: &TreeBackedGraph) -> Result<CliqueResult, SolverError>;

    /// A maximum independent set: a maximum clique of the complement.
    fn max_independent_set(&self, graph: &TreeBackedGraph) -> Result<Vec<VertexId>, SolverError> {
        Ok(self.find_max_clique(&graph.complement())?.vertices())
    }

    /// A minimum vertex cover: everything outside a maximum independent set.
    fn min_vertex_cover(&self, graph: &TreeBackedGraph) -> Result<Vec<VertexId>, SolverError> {
        let independent: BTreeSet<VertexId> =
            self.max_independent_set(graph)?.into_iter().collect();
        Ok(graph
            .iter_vertices()
            .filter(|v| !independent.contains(v))
            .collect())
    }

    /// Partitions the vertices into cliques by repeatedly extracting a
    /// maximum clique from what remains.
    fn clique_partition(&self, graph: &TreeBackedGraph) -> Result<Vec<Vec<VertexId>>, SolverError> {
        let mut rest = graph.clone();
        let mut parts = vec![];
        while rest.vertex_size() > 0 {
            let part = self.find_max_clique(&rest)?.vertices();
            if part.is_empty() {
                return Err(SolverError::Output(
                    "empty clique on a non-empty graph".into(),
                ));
            }
            for v in part.iter() {
                let _ = rest.remove_vertex(v);
            }
            parts.push(part);
        }
        Ok(parts)
    }

    /// Partitions the vertices into independent sets: a clique partition
    /// of the complement.
    fn independent_set_partition(
        &self,
        graph: &TreeBackedGraph,
    ) -> Result<Vec<Vec<VertexId>>, SolverError> {
        self.clique_partition(&graph.complement())
    }
}
