use crate::graph::*;
use std::collections::{BTreeMap, BTreeSet};

/// An undirected graph with balanced computational complexity.
///
/// Point queries run in $O(\log n)$, iterations in amortized $O(1)$ and in
/// insertion order. Each `add_weighted_edge` inserts both adjacency rows
/// atomically, so `has_neighbor` is always symmetric; `edge_size` reports
/// the undirected count.
///
/// Vertex and edge ID's stay stable under removal, which lets
/// [subset](TreeBackedGraph::subset), [neighborhood](TreeBackedGraph::neighborhood)
/// and [complement](TreeBackedGraph::complement) hand out independent deep
/// copies that still talk about the same vertices as the original.
#[derive(Clone)]
pub struct TreeBackedGraph {
    vid_factory: VertexIdFactory,
    eid_factory: EdgeIdFactory,
    vertices: BTreeSet<VertexId>,
    edges: BTreeMap<EdgeId, (VertexId, VertexId, f64)>,
    adjacent_edges: BTreeSet<(VertexId, VertexId, EdgeId)>,
}

impl DirectedOrNot for TreeBackedGraph {
    const DIRECTED_OR_NOT: bool = false;
}

impl std::fmt::Debug for TreeBackedGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "TreeBackedGraph {{")?;
        for v in self.vertices.iter() {
            writeln!(f, "{:?}:", v)?;
            for e in self.out_edges(v) {
                writeln!(f, "  -- {:?} by {:?}", e.sink, e.id)?;
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl TreeBackedGraph {
    fn weight_of(&self, eid: &EdgeId) -> f64 {
        self.edges.get(eid).map(|(_, _, w)| *w).unwrap_or(1.0)
    }

    fn insert_raw(&mut self, eid: EdgeId, source: VertexId, sink: VertexId, weight: f64) {
        self.edges.insert(eid, (source, sink, weight));
        self.adjacent_edges.insert((source, sink, eid));
        self.adjacent_edges.insert((sink, source, eid));
    }

    /// The induced subgraph on `keep ∩ V`: exactly those vertices and every
    /// edge of this graph between them, as a fresh deep copy with the same ID's.
    pub fn subset(&self, keep: &BTreeSet<VertexId>) -> Self {
        let mut res = Self {
            vid_factory: self.vid_factory.clone(),
            eid_factory: self.eid_factory.clone(),
            vertices: self.vertices.intersection(keep).copied().collect(),
            edges: BTreeMap::new(),
            adjacent_edges: BTreeSet::new(),
        };
        for (eid, (src, snk, w)) in self.edges.iter() {
            if res.vertices.contains(src) && res.vertices.contains(snk) {
                res.insert_raw(*eid, *src, *snk, *w);
            }
        }
        res
    }

    /// The induced subgraph on `v` together with all its neighbors.
    /// Yields an empty graph when `v` is absent.
    pub fn neighborhood(&self, v: &VertexId) -> Self {
        self.neighborhood_of([*v])
    }

    /// The induced subgraph on the given vertices together with all their
    /// neighbors. Absent vertices are ignored.
    pub fn neighborhood_of(&self, vs: impl IntoIterator<Item = VertexId>) -> Self {
        let mut keep = BTreeSet::new();
        for v in vs {
            if self.vertices.contains(&v) {
                keep.insert(v);
                keep.extend(self.neighbors(&v));
            }
        }
        self.subset(&keep)
    }

    /// The graph on the same vertex set whose edges are exactly the
    /// non-edges of this one, each with the default weight.
    pub fn complement(&self) -> Self {
        let mut res = Self {
            vid_factory: self.vid_factory.clone(),
            eid_factory: EdgeIdFactory::new(),
            vertices: self.vertices.clone(),
            edges: BTreeMap::new(),
            adjacent_edges: BTreeSet::new(),
        };
        let vs: Vec<VertexId> = self.vertices.iter().copied().collect();
        for (i, u) in vs.iter().enumerate() {
            for v in &vs[i + 1..] {
                if !self.has_neighbor(u, v) {
                    let eid = res.eid_factory.one_more();
                    res.insert_raw(eid, *u, *v, 1.0);
                }
            }
        }
        res
    }
}

impl GrowableGraph for TreeBackedGraph {
    fn new() -> Self {
        Self {
            vid_factory: VertexIdFactory::new(),
            eid_factory: EdgeIdFactory::new(),
            vertices: BTreeSet::new(),
            edges: BTreeMap::new(),
            adjacent_edges: BTreeSet::new(),
        }
    }

    fn add_vertex(&mut self) -> VertexId {
        let vid = self.vid_factory.one_more();
        self.vertices.insert(vid);
        vid
    }

    fn add_weighted_edge(&mut self, source: VertexId, sink: VertexId, weight: f64) -> EdgeId {
        debug_assert!(self.vertices.contains(&source));
        debug_assert!(self.vertices.contains(&sink));
        let eid = self.eid_factory.one_more();
        self.insert_raw(eid, source, sink, weight);
        eid
    }
}

impl EdgeShrinkableGraph for TreeBackedGraph {
    fn remove_edge(&mut self, edge: &EdgeId) -> Option<Edge> {
        match self.edges.remove(edge) {
            None => None,
            Some((src, snk, weight)) => {
                self.adjacent_edges.remove(&(snk, src, *edge));
                self.adjacent_edges.remove(&(src, snk, *edge));
                Some(Edge {
                    id: *edge,
                    source: src,
                    sink: snk,
                    weight,
                })
            }
        }
    }
}

impl VertexShrinkableGraph for TreeBackedGraph {
    fn remove_vertex(&mut self, vertex: &VertexId) -> Box<dyn Iterator<Item = Edge> + 'static> {
        if !self.vertices.remove(vertex) {
            return Box::new(std::iter::empty());
        }
        let start = (*vertex, VertexId::MIN, EdgeId::MIN);
        let end = (vertex.next(), VertexId::MIN, EdgeId::MIN);
        let res: BTreeSet<_> = self
            .adjacent_edges
            .range(start..end)
            .map(|(snk, src, edge)| Edge {
                id: *edge,
                source: *src,
                sink: *snk,
                weight: self.weight_of(edge),
            })
            .collect();
        for x in res.iter() {
            self.remove_edge(&x.id);
        }
        Box::new(res.into_iter())
    }
}

impl QueryableGraph for TreeBackedGraph {
    fn vertex_size(&self) -> usize {
        self.vertices.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.vertices.iter().copied())
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.vertices.contains(v)
    }

    fn edge_size(&self) -> usize {
        self.edges.len()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new(self.edges.iter().map(|(e, (src, snk, w))| Edge {
            id: *e,
            source: *src,
            sink: *snk,
            weight: *w,
        }))
    }

    fn contains_edge(&self, e: &EdgeId) -> bool {
        self.edges.contains_key(e)
    }

    fn find_edge(&self, e: &EdgeId) -> Option<Edge> {
        self.edges.get(e).map(|(src, snk, w)| Edge {
            id: *e,
            source: *src,
            sink: *snk,
            weight: *w,
        })
    }

    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        let start = (*v, VertexId::MIN, EdgeId::MIN);
        let end = (v.next(), VertexId::MIN, EdgeId::MIN);
        let it = self
            .adjacent_edges
            .range(start..end)
            .map(|(snk, src, e)| Edge {
                id: *e,
                source: *src,
                sink: *snk,
                weight: self.weight_of(e),
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

    fn edges_connecting<'a, 'b>(
        &'a self,
        source: &'b VertexId,
        sink: &'b VertexId,
    ) -> Box<dyn Iterator<Item = Edge> + 'a> {
        let source = *source;
        let sink = *sink;
        let start = (source, sink, EdgeId::MIN);
        let end = (source, sink, EdgeId::MAX);
        let it = self
            .adjacent_edges
            .range(start..=end)
            .map(move |(_, _, eid)| Edge {
                id: *eid,
                source,
                sink,
                weight: self.weight_of(eid),
            });
        Box::new(it)
    }
}
