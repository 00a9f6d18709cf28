//! Traits and implementations for directed and undirected graphs.
//!
//! # Low-level graphs and `KeyedGraph`
//!
//! Vertices and edges in low-level graphs are lightweight ID's, essentially
//! `usize`. Algorithm authors may freely copy and store these ID's.
//! [`keyed::KeyedGraph`] maps user-chosen vertex keys onto those ID's, so
//! users can address vertices by their own totally-ordered, hashable values.
//!
//! # Stores
//!
//! The tree-backed stores in [`directed`] and [`undirected`] are the primary
//! implementations: point queries in $O(\log n)$, iterations in insertion
//! order, and ID's that stay stable under removal. The undirected store also
//! offers the deep-copy operations the clique engine recurses on:
//! [`undirected::TreeBackedGraph::subset`],
//! [`undirected::TreeBackedGraph::neighborhood`] and
//! [`undirected::TreeBackedGraph::complement`].
//!
//! # `ShadowedSubgraph`
//!
//! A shrinkable view over a borrowed graph. While the view shrinks, its
//! underlying graph is kept unchanged.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod shadowed_subgraph;
pub use self::shadowed_subgraph::*;
mod graph_debug;
pub use self::graph_debug::*;

pub mod directed;
pub mod keyed;
pub mod undirected;
