//! `KeyedGraph`: a graph wrapper addressing vertices by user-chosen keys.

use crate::algorithm::DegeneracyOrdering;
use crate::error::GraphError;
use crate::graph::*;
use crate::solver::{MaxCliqueSolver, SolverError};
use ahash::RandomState;
use bimap::BiHashMap;
use std::collections::BTreeSet;
use std::hash::Hash;

/// A graph wrapper over either directed or undirected low-level graphs
/// that lets vertices be addressed by keys.
///
/// * `G`: the underlying graph, directed by default.
/// * `K`: vertex keys; any totally-ordered, hashable, cloneable value.
///   There is a 1-1 mapping between keys and vertex ID's.
///
/// The wrapper keeps the graph simple: `add_vertex` on a present key is a
/// no-op, `add_edge` replaces an existing edge between the same endpoints,
/// and self-loops are rejected. Operations referencing an absent key fail
/// with [GraphError::NotFound].
pub struct KeyedGraph<K, G = directed::TreeBackedGraph>
where
    K: Hash + Eq,
{
    lower_graph: G,
    vertex_keys: BiHashMap<VertexId, K, RandomState, RandomState>,
}

impl<K, G> DirectedOrNot for KeyedGraph<K, G>
where
    K: Hash + Eq,
    G: DirectedOrNot,
{
    const DIRECTED_OR_NOT: bool = G::DIRECTED_OR_NOT;
}

impl<K, G> Clone for KeyedGraph<K, G>
where
    K: Hash + Eq + Clone,
    G: Clone,
{
    fn clone(&self) -> Self {
        Self {
            lower_graph: self.lower_graph.clone(),
            vertex_keys: self.vertex_keys.clone(),
        }
    }
}

impl<K, G> Default for KeyedGraph<K, G>
where
    K: Hash + Eq + Clone + std::fmt::Debug,
    G: GrowableGraph,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, G> KeyedGraph<K, G>
where
    K: Hash + Eq,
{
    /// Gets the low-level ID of a key.
    pub fn vertex_id_by_key(&self, key: &K) -> Option<VertexId> {
        self.vertex_keys.get_by_right(key).copied()
    }

    /// Gets the key of a low-level ID.
    pub fn vertex_key_by_id(&self, vid: &VertexId) -> Option<&K> {
        self.vertex_keys.get_by_left(vid)
    }
}

impl<K, G> KeyedGraph<K, G>
where
    K: Hash + Eq + Clone + std::fmt::Debug,
    G: GrowableGraph,
{
    pub fn new() -> Self {
        Self {
            lower_graph: G::new(),
            vertex_keys: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
        }
    }

    /// Adds a vertex under `key` if absent; a no-op otherwise.
    pub fn add_vertex(&mut self, key: &K) -> VertexId {
        if let Some(vid) = self.vertex_keys.get_by_right(key) {
            *vid
        } else {
            let vid = self.lower_graph.add_vertex();
            self.vertex_keys.insert(vid, key.clone());
            vid
        }
    }
}

impl<K, G> KeyedGraph<K, G>
where
    K: Hash + Eq + Clone + std::fmt::Debug,
    G: GrowableGraph + QueryableGraph + EdgeShrinkableGraph,
{
    /// Adds an edge with the default weight of 1.0, creating either
    /// endpoint as needed.
    pub fn add_edge(&mut self, source: &K, sink: &K) -> Result<EdgeId, GraphError> {
        self.add_weighted_edge(source, sink, 1.0)
    }

    /// Adds an edge, creating either endpoint as needed. An existing edge
    /// between the same endpoints is replaced, so at most one edge joins a
    /// pair of keys.
    pub fn add_weighted_edge(
        &mut self,
        source: &K,
        sink: &K,
        weight: f64,
    ) -> Result<EdgeId, GraphError> {
        if source == sink {
            return Err(GraphError::InvalidArgument(format!(
                "self-loop on {:?}",
                source
            )));
        }
        if weight < 0.0 {
            return Err(GraphError::InvalidArgument(format!(
                "negative weight {} on {:?} -> {:?}",
                weight, source, sink
            )));
        }
        let src = self.add_vertex(source);
        let snk = self.add_vertex(sink);
        let stale: Vec<EdgeId> = self
            .lower_graph
            .edges_connecting(&src, &snk)
            .map(|e| e.id)
            .collect();
        for eid in stale {
            self.lower_graph.remove_edge(&eid);
        }
        Ok(self.lower_graph.add_weighted_edge(src, snk, weight))
    }
}

impl<K, G> KeyedGraph<K, G>
where
    K: Hash + Eq + Clone + std::fmt::Debug,
    G: VertexShrinkableGraph,
{
    /// Removes a vertex and every edge incident on it.
    pub fn remove_vertex(&mut self, key: &K) -> Result<Vec<Edge>, GraphError> {
        let vid = self
            .vertex_id_by_key(key)
            .ok_or_else(|| GraphError::NotFound(format!("{:?}", key)))?;
        let removed: Vec<Edge> = self.lower_graph.remove_vertex(&vid).collect();
        self.vertex_keys.remove_by_left(&vid);
        Ok(removed)
    }
}

impl<K, G> KeyedGraph<K, G>
where
    K: Hash + Eq + Clone + std::fmt::Debug,
    G: QueryableGraph,
{
    fn require(&self, key: &K) -> Result<VertexId, GraphError> {
        self.vertex_id_by_key(key)
            .ok_or_else(|| GraphError::NotFound(format!("{:?}", key)))
    }

    pub fn vertex_size(&self) -> usize {
        self.vertex_keys.len()
    }

    pub fn edge_size(&self) -> usize {
        self.lower_graph.edge_size()
    }

    pub fn contains_vertex(&self, key: &K) -> bool {
        self.vertex_keys.contains_right(key)
    }

    /// Iteration over all vertex keys.
    pub fn iter_vertices(&self) -> Box<dyn Iterator<Item = &K> + '_> {
        let it = self
            .lower_graph
            .iter_vertices()
            .map(|vid| self.vertex_keys.get_by_left(&vid).unwrap());
        Box::new(it)
    }

    /// Iteration over all edges as `(source key, sink key, weight)`.
    pub fn iter_edges(&self) -> Box<dyn Iterator<Item = (&K, &K, f64)> + '_> {
        let it = self.lower_graph.iter_edges().map(|e| {
            (
                self.vertex_keys.get_by_left(&e.source).unwrap(),
                self.vertex_keys.get_by_left(&e.sink).unwrap(),
                e.weight,
            )
        });
        Box::new(it)
    }

    pub fn degree(&self, key: &K) -> Result<usize, GraphError> {
        let vid = self.require(key)?;
        Ok(self.lower_graph.degree(&vid))
    }

    pub fn has_neighbor(&self, a: &K, b: &K) -> Result<bool, GraphError> {
        let va = self.require(a)?;
        let vb = self.require(b)?;
        Ok(self.lower_graph.has_neighbor(&va, &vb))
    }

    /// Keys adjacent to `key`.
    pub fn neighbors(&self, key: &K) -> Result<Vec<&K>, GraphError> {
        let vid = self.require(key)?;
        Ok(self
            .lower_graph
            .neighbors(&vid)
            .iter()
            .map(|u| self.vertex_keys.get_by_left(u).unwrap())
            .collect())
    }

    pub fn is_clique(&self) -> bool {
        self.lower_graph.is_clique()
    }

    pub fn density(&self) -> f64 {
        self.lower_graph.density()
    }

    /// Removal order by repeatedly taking the minimum-degree vertex.
    pub fn degeneracy_ordering(&self) -> Vec<K> {
        self.lower_graph
            .degeneracy_ordering()
            .into_iter()
            .map(|vid| self.vertex_keys.get_by_left(&vid).unwrap().clone())
            .collect()
    }
}

impl<K> KeyedGraph<K, undirected::TreeBackedGraph>
where
    K: Hash + Eq + Ord + Clone + std::fmt::Debug,
{
    fn wrap(&self, lower: undirected::TreeBackedGraph) -> Self {
        let mut vertex_keys = BiHashMap::with_hashers(RandomState::new(), RandomState::new());
        for vid in lower.iter_vertices() {
            let key = self.vertex_keys.get_by_left(&vid).unwrap().clone();
            vertex_keys.insert(vid, key);
        }
        Self {
            lower_graph: lower,
            vertex_keys,
        }
    }

    fn keys_of(&self, vids: impl IntoIterator<Item = VertexId>) -> Vec<K> {
        let mut keys: Vec<K> = vids
            .into_iter()
            .map(|vid| self.vertex_keys.get_by_left(&vid).unwrap().clone())
            .collect();
        keys.sort();
        keys
    }

    /// The induced subgraph on the given keys, as a fresh deep copy.
    pub fn subset(&self, keys: impl IntoIterator<Item = K>) -> Result<Self, GraphError> {
        let mut keep = BTreeSet::new();
        for key in keys {
            keep.insert(self.require(&key)?);
        }
        Ok(self.wrap(self.lower_graph.subset(&keep)))
    }

    /// The induced subgraph on `key`, its neighbors, and all edges among them.
    pub fn neighborhood(&self, key: &K) -> Result<Self, GraphError> {
        let vid = self.require(key)?;
        Ok(self.wrap(self.lower_graph.neighborhood(&vid)))
    }

    /// As [neighborhood](Self::neighborhood), seeded by several keys at once.
    pub fn neighborhood_of(
        &self,
        keys: impl IntoIterator<Item = K>,
    ) -> Result<Self, GraphError> {
        let mut seeds = vec![];
        for key in keys {
            seeds.push(self.require(&key)?);
        }
        Ok(self.wrap(self.lower_graph.neighborhood_of(seeds)))
    }

    /// The graph on the same keys whose edges are exactly the non-edges
    /// of this one.
    pub fn complement(&self) -> Self {
        self.wrap(self.lower_graph.complement())
    }

    /// A maximum clique of this graph, as sorted keys.
    pub fn max_clique(&self, solver: &impl MaxCliqueSolver) -> Result<Vec<K>, SolverError> {
        let found = solver.find_max_clique(&self.lower_graph)?;
        Ok(self.keys_of(found.vertices()))
    }

    /// A maximum independent set, as sorted keys.
    pub fn max_independent_set(
        &self,
        solver: &impl MaxCliqueSolver,
    ) -> Result<Vec<K>, SolverError> {
        Ok(self.keys_of(solver.max_independent_set(&self.lower_graph)?))
    }

    /// A minimum vertex cover, as sorted keys.
    pub fn min_vertex_cover(&self, solver: &impl MaxCliqueSolver) -> Result<Vec<K>, SolverError> {
        Ok(self.keys_of(solver.min_vertex_cover(&self.lower_graph)?))
    }

    /// A greedy partition of the keys into cliques.
    pub fn clique_partition(
        &self,
        solver: &impl MaxCliqueSolver,
    ) -> Result<Vec<Vec<K>>, SolverError> {
        Ok(solver
            .clique_partition(&self.lower_graph)?
            .into_iter()
            .map(|part| self.keys_of(part))
            .collect())
    }

    /// A greedy partition of the keys into independent sets.
    pub fn independent_set_partition(
        &self,
        solver: &impl MaxCliqueSolver,
    ) -> Result<Vec<Vec<K>>, SolverError> {
        Ok(solver
            .independent_set_partition(&self.lower_graph)?
            .into_iter()
            .map(|part| self.keys_of(part))
            .collect())
    }
}

impl<K, G> std::fmt::Debug for KeyedGraph<K, G>
where
    K: Hash + Eq + std::fmt::Debug,
    G: QueryableGraph,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.lower_graph.iter_vertices() {
            writeln!(f, "{:?}", self.vertex_keys.get_by_left(&v).unwrap())?;
            for e in self.lower_graph.out_edges(&v) {
                writeln!(
                    f,
                    "  --({})-> {:?}",
                    e.weight,
                    self.vertex_keys.get_by_left(&e.sink).unwrap()
                )?;
            }
        }
        Ok(())
    }
}
