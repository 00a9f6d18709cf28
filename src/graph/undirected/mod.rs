mod adjacent_list;
pub use self::adjacent_list::*;
mod tree_backed;
pub use self::tree_backed::*;

#[cfg(test)]
pub use self::tests::*;

#[cfg(test)]
mod tests {
    use super::TreeBackedGraph;
    use crate::graph::*;
    use bimap::BiHashMap;
    use std::collections::BTreeSet;

    /// One mutation against a graph under test, phrased in oracle-side ID's.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Op {
        AddVertex(VertexId),
        RemoveVertex(VertexId),
        AddEdge((VertexId, VertexId, EdgeId)),
        RemoveEdge(EdgeId),
    }

    #[derive(Clone)]
    pub struct Ops {
        pub ops: Vec<Op>,
    }

    impl std::fmt::Debug for Ops {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.ops)
        }
    }

    impl Ops {
        pub fn iter(&self) -> impl Iterator<Item = &Op> + '_ {
            self.ops.iter()
        }
    }

    impl quickcheck::Arbitrary for Ops {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let mut vid_factory = VertexIdFactory::new();
            let mut eid_factory = EdgeIdFactory::new();
            let mut known_vid = BTreeSet::new();
            let mut known_eid = BTreeSet::new();
            let n = usize::arbitrary(g) % 60;
            let ops = (0..n)
                .filter_map(|_| match u8::arbitrary(g) % 4 {
                    0 => {
                        let vid = vid_factory.one_more();
                        known_vid.insert(vid);
                        Some(Op::AddVertex(vid))
                    }
                    1 => {
                        if known_vid.is_empty() {
                            None
                        } else {
                            let vid = {
                                let idx = usize::arbitrary(g) % known_vid.len();
                                *known_vid.iter().nth(idx).unwrap()
                            };
                            known_vid.remove(&vid);
                            Some(Op::RemoveVertex(vid))
                        }
                    }
                    2 => {
                        if known_vid.is_empty() {
                            None
                        } else {
                            let src_vid = {
                                let idx = usize::arbitrary(g) % known_vid.len();
                                *known_vid.iter().nth(idx).unwrap()
                            };
                            let sink_vid = {
                                let idx = usize::arbitrary(g) % known_vid.len();
                                *known_vid.iter().nth(idx).unwrap()
                            };
                            let eid = eid_factory.one_more();
                            known_eid.insert(eid);
                            Some(Op::AddEdge((src_vid, sink_vid, eid)))
                        }
                    }
                    3 => {
                        if known_eid.is_empty() {
                            None
                        } else {
                            let eid = {
                                let idx = usize::arbitrary(g) % known_eid.len();
                                *known_eid.iter().nth(idx).unwrap()
                            };
                            known_eid.remove(&eid);
                            Some(Op::RemoveEdge(eid))
                        }
                    }
                    _ => unreachable!(),
                })
                .collect();
            Self { ops }
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            let me = self.clone();
            let it = (0..self.ops.len()).rev().map(move |n| Self {
                ops: me.ops[0..n].to_vec(),
            });
            Box::new(it)
        }
    }

    /// A graph built by applying [Ops], remembering how its own ID's map
    /// onto the ID's the ops speak of.
    pub struct OpsFormedGraph<G> {
        pub graph: G,
        pub vmap: BiHashMap<VertexId, VertexId>,
        pub emap: BiHashMap<EdgeId, EdgeId>,
    }

    impl<G> OpsFormedGraph<G>
    where
        G: GrowableGraph + EdgeShrinkableGraph + VertexShrinkableGraph,
    {
        pub fn apply(&mut self, ops: &Ops) {
            for op in ops.iter() {
                match op {
                    Op::AddVertex(vid) => {
                        let my_vid = self.graph.add_vertex();
                        self.vmap.insert(my_vid, *vid);
                    }
                    Op::RemoveVertex(vid) => {
                        if let Some(my_vid) = self.vmap.get_by_right(vid).copied() {
                            for e in self.graph.remove_vertex(&my_vid) {
                                self.emap.remove_by_left(&e.id);
                            }
                            self.vmap.remove_by_left(&my_vid);
                        }
                    }
                    Op::AddEdge((source, sink, eid)) => {
                        if let (Some(my_src), Some(my_sink)) = (
                            self.vmap.get_by_right(source).copied(),
                            self.vmap.get_by_right(sink).copied(),
                        ) {
                            let my_eid = self.graph.add_edge(my_src, my_sink);
                            self.emap.insert(my_eid, *eid);
                        }
                    }
                    Op::RemoveEdge(eid) => {
                        if let Some(my_eid) = self.emap.get_by_right(eid).copied() {
                            self.graph.remove_edge(&my_eid);
                        }
                    }
                }
            }
        }
    }

    impl<G> From<&Ops> for OpsFormedGraph<G>
    where
        G: GrowableGraph + EdgeShrinkableGraph + VertexShrinkableGraph,
    {
        fn from(ops: &Ops) -> Self {
            let mut res = Self {
                graph: G::new(),
                vmap: BiHashMap::new(),
                emap: BiHashMap::new(),
            };
            res.apply(ops);
            res
        }
    }

    /// Asserts two ops-formed graphs agree, compared through ops-side ID's.
    pub fn assert_equivalent<G1, G2>(trial: &OpsFormedGraph<G1>, oracle: &OpsFormedGraph<G2>)
    where
        G1: QueryableGraph,
        G2: QueryableGraph,
    {
        let trial_vs: BTreeSet<_> = trial
            .graph
            .iter_vertices()
            .map(|v| *trial.vmap.get_by_left(&v).unwrap())
            .collect();
        let oracle_vs: BTreeSet<_> = oracle
            .graph
            .iter_vertices()
            .map(|v| *oracle.vmap.get_by_left(&v).unwrap())
            .collect();
        assert_eq!(trial_vs, oracle_vs);

        let edge_key = |vmap: &BiHashMap<VertexId, VertexId>,
                        emap: &BiHashMap<EdgeId, EdgeId>,
                        e: &Edge| {
            let src = *vmap.get_by_left(&e.source).unwrap();
            let snk = *vmap.get_by_left(&e.sink).unwrap();
            let (a, b) = if src <= snk { (src, snk) } else { (snk, src) };
            (a, b, *emap.get_by_left(&e.id).unwrap())
        };
        let trial_es: BTreeSet<_> = trial
            .graph
            .iter_edges()
            .map(|e| edge_key(&trial.vmap, &trial.emap, &e))
            .collect();
        let oracle_es: BTreeSet<_> = oracle
            .graph
            .iter_edges()
            .map(|e| edge_key(&oracle.vmap, &oracle.emap, &e))
            .collect();
        assert_eq!(trial_es, oracle_es);
    }

    /// A random simple undirected graph on vertices `0..n`, small enough for
    /// brute-force oracles.
    #[derive(Clone, Debug)]
    pub struct RandomGraph {
        pub n: usize,
        pub edges: Vec<(usize, usize)>,
    }

    impl quickcheck::Arbitrary for RandomGraph {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let n = usize::arbitrary(g) % 11;
            let mut edges = vec![];
            for i in 0..n {
                for j in (i + 1)..n {
                    if bool::arbitrary(g) {
                        edges.push((i, j));
                    }
                }
            }
            Self { n, edges }
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            let n = self.n;
            let it = self
                .edges
                .shrink()
                .map(move |edges| Self { n, edges });
            Box::new(it)
        }
    }

    impl RandomGraph {
        pub fn build(&self) -> (TreeBackedGraph, Vec<VertexId>) {
            let mut graph = TreeBackedGraph::new();
            let vs: Vec<_> = (0..self.n).map(|_| graph.add_vertex()).collect();
            for (i, j) in self.edges.iter() {
                graph.add_edge(vs[*i], vs[*j]);
            }
            (graph, vs)
        }

        /// Adjacency bitmasks indexed like `0..n`, for exhaustive oracles.
        pub fn adjacency_bits(&self) -> Vec<u64> {
            let mut adj = vec![0u64; self.n];
            for (i, j) in self.edges.iter() {
                adj[*i] |= 1 << j;
                adj[*j] |= 1 << i;
            }
            adj
        }
    }

    /// Exhaustive clique number, usable up to a dozen or so vertices.
    pub fn brute_force_omega(adj: &[u64]) -> usize {
        let n = adj.len();
        let mut best = 0;
        for subset in 0..(1u64 << n) {
            let size = subset.count_ones() as usize;
            if size <= best {
                continue;
            }
            let mut rest = subset;
            let mut ok = true;
            while rest != 0 {
                let v = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                if (adj[v] & subset) != (subset & !(1 << v)) {
                    ok = false;
                    break;
                }
            }
            if ok {
                best = size;
            }
        }
        best
    }
}
