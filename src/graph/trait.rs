use crate::graph::*;
use std::collections::BTreeSet;

pub trait GrowableGraph {
    fn new() -> Self;
    fn add_vertex(&mut self) -> VertexId;
    fn add_weighted_edge(&mut self, source: VertexId, sink: VertexId, weight: f64) -> EdgeId;

    /// Adds an edge with the default weight of 1.0.
    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> EdgeId
    where
        Self: Sized,
    {
        self.add_weighted_edge(source, sink, 1.0)
    }
}

pub trait EdgeShrinkableGraph {
    fn remove_edge(&mut self, edge: &EdgeId) -> Option<Edge>;
}

pub trait VertexShrinkableGraph: EdgeShrinkableGraph {
    /// Removes a vertex and every edge incident on it, returning those edges.
    fn remove_vertex(&mut self, vertex: &VertexId) -> Box<dyn Iterator<Item = Edge> + 'static>;
}

pub trait QueryableGraph {
    fn vertex_size(&self) -> usize;
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn contains_vertex(&self, v: &VertexId) -> bool;

    fn edge_size(&self) -> usize;
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn contains_edge(&self, e: &EdgeId) -> bool;
    fn find_edge(&self, e: &EdgeId) -> Option<Edge>;
    fn edges_connecting(
        &self,
        source: &VertexId,
        sink: &VertexId,
    ) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_>;

    /// Distinct vertices adjacent to `v`, excluding `v` itself.
    fn neighbors(&self, v: &VertexId) -> BTreeSet<VertexId> {
        self.in_edges(v)
            .chain(self.out_edges(v))
            .flat_map(|e| [e.source, e.sink])
            .filter(|u| u != v)
            .collect()
    }

    /// Number of distinct neighbors of `v`. Self-loops and parallel edges
    /// do not inflate it.
    fn degree(&self, v: &VertexId) -> usize {
        self.neighbors(v).len()
    }

    /// Whether `u` and `v` are two distinct, adjacent vertices.
    fn has_neighbor(&self, u: &VertexId, v: &VertexId) -> bool {
        u != v
            && (self.edges_connecting(u, v).next().is_some()
                || self.edges_connecting(v, u).next().is_some())
    }

    /// True iff every pair of distinct vertices is adjacent.
    /// Graphs with at most one vertex are cliques vacuously.
    fn is_clique(&self) -> bool {
        let n = self.vertex_size();
        n <= 1 || self.iter_vertices().all(|v| self.degree(&v) == n - 1)
    }

    /// Fraction of ordered vertex pairs joined by an edge.
    fn density(&self) -> f64 {
        let n = self.vertex_size();
        if n < 2 {
            return 0.0;
        }
        let ends: usize = self.iter_vertices().map(|v| self.degree(&v)).sum();
        ends as f64 / (n as f64 * (n as f64 - 1.0))
    }

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}

/// Whether a graph type is directed, as a compile-time constant.
pub trait DirectedOrNot {
    const DIRECTED_OR_NOT: bool;
}

#[cfg(test)]
mod tests {
    use crate::graph::{undirected::TreeBackedGraph, *};

    #[test]
    fn neighbors_ignore_self_loops_and_parallel_edges() {
        let mut g = TreeBackedGraph::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        g.add_edge(a, b);
        g.add_edge(a, b);
        g.add_edge(a, a);
        assert_eq!(g.neighbors(&a), [b].into_iter().collect());
        assert_eq!(g.degree(&a), 1);
        assert!(g.has_neighbor(&a, &b));
        assert!(g.has_neighbor(&b, &a));
        assert!(!g.has_neighbor(&a, &a));
    }

    #[test]
    fn triangle_is_a_clique() {
        let mut g = TreeBackedGraph::new();
        let vs: Vec<_> = (0..3).map(|_| g.add_vertex()).collect();
        g.add_edge(vs[0], vs[1]);
        g.add_edge(vs[1], vs[2]);
        assert!(!g.is_clique());
        g.add_edge(vs[0], vs[2]);
        assert!(g.is_clique());
        assert!((g.density() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn trivial_graphs_are_cliques() {
        let mut g = TreeBackedGraph::new();
        assert!(g.is_clique());
        assert_eq!(g.density(), 0.0);
        g.add_vertex();
        assert!(g.is_clique());
    }
}
