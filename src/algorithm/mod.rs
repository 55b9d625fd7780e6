//! Graph algorithms
mod two_coloring;
pub use self::two_coloring::*;
pub mod graphviz;
