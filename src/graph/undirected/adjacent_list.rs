use crate::graph::*;
use petgraph::{
    graph::{EdgeIndex, NodeIndex},
    stable_graph::StableUnGraph,
    visit::EdgeRef,
};
use std::collections::BTreeSet;

/// An undirected graph backed by `petgraph`'s stable adjacency list.
///
/// Functionally interchangeable with [super::TreeBackedGraph]; the test
/// suite uses it as an independent oracle for the tree-backed store.
#[derive(Clone)]
pub struct AdjacentListGraph(StableUnGraph<(), (VertexId, VertexId, f64), usize>);

impl DirectedOrNot for AdjacentListGraph {
    const DIRECTED_OR_NOT: bool = false;
}

impl GrowableGraph for AdjacentListGraph {
    fn new() -> Self {
        Self(StableUnGraph::<(), (VertexId, VertexId, f64), usize>::with_capacity(0, 0))
    }

    fn add_vertex(&mut self) -> VertexId {
        let vid = self.0.add_node(());
        VertexId::new(vid.index())
    }

    fn add_weighted_edge(&mut self, source: VertexId, sink: VertexId, weight: f64) -> EdgeId {
        let a = NodeIndex::new(source.to_raw());
        let b = NodeIndex::new(sink.to_raw());
        let eid = self.0.add_edge(a, b, (source, sink, weight));
        EdgeId::new(eid.index())
    }
}

impl EdgeShrinkableGraph for AdjacentListGraph {
    fn remove_edge(&mut self, edge: &EdgeId) -> Option<Edge> {
        let pg_eidx = EdgeIndex::new(edge.to_raw());
        self.0.remove_edge(pg_eidx).map(|(src, sink, weight)| Edge {
            id: *edge,
            source: src,
            sink,
            weight,
        })
    }
}

impl VertexShrinkableGraph for AdjacentListGraph {
    fn remove_vertex(&mut self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + 'static> {
        let a = NodeIndex::new(v.to_raw());
        let res: BTreeSet<Edge> = self
            .0
            .edges(a)
            .map(|e| {
                let (src, sink, weight) = e.weight();
                Edge {
                    id: EdgeId::new(e.id().index()),
                    source: *src,
                    sink: *sink,
                    weight: *weight,
                }
            })
            .collect();
        self.0.remove_node(a);
        Box::new(res.into_iter())
    }
}

impl QueryableGraph for AdjacentListGraph {
    fn vertex_size(&self) -> usize {
        self.0.node_count()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        let it = self.0.node_indices().map(|x| VertexId::new(x.index()));
        Box::new(it)
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        let nidx = NodeIndex::new(v.to_raw());
        self.0.contains_node(nidx)
    }

    fn edge_size(&self) -> usize {
        self.0.edge_count()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        let it = self.0.edge_indices().map(|x| {
            let (source, sink, weight) = self.0.edge_weight(x).unwrap();
            Edge {
                id: EdgeId::new(x.index()),
                source: *source,
                sink: *sink,
                weight: *weight,
            }
        });
        Box::new(it)
    }

    fn contains_edge(&self, e: &EdgeId) -> bool {
        let eidx = EdgeIndex::new(e.to_raw());
        self.0.edge_weight(eidx).is_some()
    }

    fn find_edge(&self, e: &EdgeId) -> Option<Edge> {
        let eidx = EdgeIndex::new(e.to_raw());
        self.0.edge_weight(eidx).map(|(src, sink, weight)| Edge {
            id: *e,
            source: *src,
            sink: *sink,
            weight: *weight,
        })
    }

    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        let nidx = NodeIndex::new(v.to_raw());
        let it = self.0.edges(nidx).map(|x| {
            let (_, _, weight) = x.weight();
            Edge {
                id: EdgeId::new(x.id().index()),
                source: VertexId::new(x.source().index()),
                sink: VertexId::new(x.target().index()),
                weight: *weight,
            }
        });
        Box::new(it)
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        let it = self.in_edges(v).map(|e| Edge {
            id: e.id,
            source: e.sink,
            sink: e.source,
            weight: e.weight,
        });
        Box::new(it)
    }

    fn edges_connecting(
        &self,
        source: &VertexId,
        sink: &VertexId,
    ) -> Box<dyn Iterator<Item = Edge> + '_> {
        let src = NodeIndex::new(source.to_raw());
        let snk = NodeIndex::new(sink.to_raw());
        let it = self.0.edges_connecting(src, snk).map(|x| {
            let (_, _, weight) = x.weight();
            Edge {
                id: EdgeId::new(x.id().index()),
                source: VertexId::new(x.source().index()),
                sink: VertexId::new(x.target().index()),
                weight: *weight,
            }
        });
        Box::new(it)
    }
}
