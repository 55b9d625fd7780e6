//! Undirected graphs keyed by arbitrary vertices,
//! and a breadth-first two-coloring that decides whether they are bipartite.
//!
//! ```rust
//! use bicolor::{coloring::*, graph::*};
//!
//! let mut g = BipartiteGraph::<&str>::new(["A", "B", "C"]);
//! g.add_edge(&"A", &"B").unwrap();
//! g.add_edge(&"B", &"C").unwrap();
//! let coloring = g.is_bipartite().into_coloring().unwrap();
//! assert_eq!(coloring.get(&"A"), Some(Color::ColorA));
//! assert_eq!(coloring.get(&"B"), Some(Color::ColorB));
//! assert_eq!(coloring.get(&"C"), Some(Color::ColorA));
//! ```
pub mod algorithm;
pub mod coloring;
pub mod error;
pub mod graph;
pub mod input;
