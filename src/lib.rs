//! Graph modelling and exact maximum-clique search.
//!
//! # Layering
//!
//! Low-level graphs carry lightweight `usize`-backed vertex and edge ID's,
//! so algorithm code may copy and store them freely.
//! [`graph::keyed::KeyedGraph`] wraps a low-level graph and maps user-chosen
//! vertex keys onto those ID's, which is how client code usually builds graphs.
//!
//! # Solving
//!
//! [`solver::MaxCliqueSolver`] is the solver contract: one required primitive,
//! maximum clique, from which vertex covers, independent sets and greedy
//! partitions are all derived. [`solver::BranchBoundSolver`] implements it with
//! a binary search on the clique size, pruned by the MaxSAT-style bound in
//! [`solver::clique_upper_bound`]. [`solver::ExternalSolver`] delegates to an
//! independently built clique finder over a pipe.
//!
//! ```
//! use maxclique::graph::{keyed::KeyedGraph, undirected};
//! use maxclique::solver::{BranchBoundSolver, MaxCliqueSolver};
//!
//! let mut g = KeyedGraph::<u32, undirected::TreeBackedGraph>::new();
//! for (u, v) in [(1, 2), (1, 3), (2, 3), (3, 4)] {
//!     g.add_edge(&u, &v).unwrap();
//! }
//! let clique = g.max_clique(&BranchBoundSolver).unwrap();
//! assert_eq!(clique, vec![1, 2, 3]);
//! ```
//!
//! Graphs persist in a DIMACS-style edge-list dialect via [`dimacs`].

pub mod algorithm;
pub mod dimacs;
pub mod error;
pub mod graph;
pub mod solver;
