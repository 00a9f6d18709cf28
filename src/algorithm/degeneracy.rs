use crate::graph::*;
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;
use std::collections::BTreeSet;

pub trait DegeneracyOrdering
where
    Self: QueryableGraph + Sized,
{
    /// Removal order by repeatedly deleting a minimum-degree vertex.
    ///
    /// Ties break on the smaller degree in the original graph, then on the
    /// smaller vertex ID, so peeling a path visits both endpoints before
    /// any internal vertex.
    fn degeneracy_ordering(&self) -> Vec<VertexId> {
        let mut shadow = ShadowedSubgraph::new(self);
        let mut queue: KeyedPriorityQueue<
            VertexId,
            Reverse<(usize, usize, VertexId)>,
            RandomState,
        > = KeyedPriorityQueue::with_capacity_and_hasher(self.vertex_size(), RandomState::new());
        for v in self.iter_vertices() {
            let d = self.degree(&v);
            queue.push(v, Reverse((d, d, v)));
        }
        let mut order = Vec::with_capacity(self.vertex_size());
        while let Some((vert, _)) = queue.pop() {
            order.push(vert);
            let touched: BTreeSet<VertexId> = shadow
                .remove_vertex(&vert)
                .flat_map(|e| [e.source, e.sink])
                .filter(|u| *u != vert)
                .collect();
            for u in touched {
                if let Some(Reverse((_, original, _))) = queue.get_priority(&u).copied() {
                    queue
                        .set_priority(&u, Reverse((shadow.degree(&u), original, u)))
                        .unwrap();
                }
            }
        }
        order
    }
}

impl<G: QueryableGraph> DegeneracyOrdering for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::undirected::{RandomGraph, TreeBackedGraph};
    use quickcheck_macros::quickcheck;

    #[test]
    fn path_endpoints_come_first() {
        let mut g = TreeBackedGraph::new();
        let vs: Vec<_> = (0..4).map(|_| g.add_vertex()).collect();
        g.add_edge(vs[0], vs[1]);
        g.add_edge(vs[1], vs[2]);
        g.add_edge(vs[2], vs[3]);
        let order = g.degeneracy_ordering();
        assert_eq!(order, vec![vs[0], vs[3], vs[1], vs[2]]);
    }

    #[test]
    fn isolated_vertices_lead() {
        let mut g = TreeBackedGraph::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();
        g.add_edge(a, b);
        let order = g.degeneracy_ordering();
        assert_eq!(order[0], c);
    }

    #[quickcheck]
    fn every_vertex_appears_once(rg: RandomGraph) {
        let (g, _) = rg.build();
        let order = g.degeneracy_ordering();
        assert_eq!(order.len(), g.vertex_size());
        let distinct: std::collections::BTreeSet<_> = order.iter().copied().collect();
        assert_eq!(distinct.len(), order.len());
    }

    #[quickcheck]
    fn each_prefix_removal_was_minimal(rg: RandomGraph) {
        let (g, _) = rg.build();
        let mut shadow = ShadowedSubgraph::new(&g);
        for v in g.degeneracy_ordering() {
            let min = shadow
                .iter_vertices()
                .map(|u| shadow.degree(&u))
                .min()
                .unwrap();
            assert_eq!(shadow.degree(&v), min);
            let _ = shadow.remove_vertex(&v);
        }
    }
}
