//! Graph algorithms, exposed as extension traits with blanket
//! implementations over [QueryableGraph](crate::graph::QueryableGraph).

mod coloring;
pub use self::coloring::*;
mod degeneracy;
pub use self::degeneracy::*;
