use crate::graph::*;

/// Greedy proper coloring, read as a clique upper bound.
///
/// Every color class is an independent set, and a clique can take at most
/// one vertex from each class, so the class count bounds the clique number
/// from above.
pub trait GreedyColoring
where
    Self: QueryableGraph + Sized,
{
    /// Partitions the vertices into independent sets.
    ///
    /// Vertices are colored from largest degree down (ID's breaking ties)
    /// and each goes into the first class holding none of its neighbors.
    fn independent_set_classes(&self) -> Vec<Vec<VertexId>> {
        let mut order: Vec<VertexId> = self.iter_vertices().collect();
        order.sort_by_key(|v| (std::cmp::Reverse(self.degree(v)), *v));
        let mut classes: Vec<Vec<VertexId>> = vec![];
        for v in order {
            let slot = classes
                .iter_mut()
                .find(|class| class.iter().all(|u| !self.has_neighbor(u, &v)));
            match slot {
                Some(class) => class.push(v),
                None => classes.push(vec![v]),
            }
        }
        classes
    }

    /// An upper bound on the size of any clique.
    fn coloring_bound(&self) -> usize {
        self.independent_set_classes().len()
    }
}

impl<G: QueryableGraph> GreedyColoring for G {}
