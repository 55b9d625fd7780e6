//! Low-level undirected graphs and the keyed [BipartiteGraph] built on top of them.
//!
//! # Low-level graphs
//!
//! Vertices and edges in low-level graphs are lightweight ID's,
//! essentially `usize`.
//! Algorithms may freely copy and store them,
//! which is what [crate::algorithm::TwoColoring] does.
//!
//! # `BipartiteGraph`
//!
//! Users rarely want to deal with ID's.
//! [BipartiteGraph] keys its vertices by any hashable value, such as names read from input,
//! and translates them to and from ID's of an underlying low-level graph.

mod ids;
pub use self::ids::*;
mod r#trait;
pub use self::r#trait::*;
mod graph_debug;
pub use self::graph_debug::*;
mod keyed;
pub use self::keyed::*;

pub mod undirected;
