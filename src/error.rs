use thiserror::Error;

/// Failures of graph mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge referred to a vertex the graph was not built with.
    #[error("unknown vertex {vertex}")]
    UnknownVertex { vertex: String },
}

/// Failures while reading a graph from text.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
    #[error("input ended before the vertex list")]
    UnexpectedEof,
    #[error(transparent)]
    Graph(#[from] GraphError),
}
