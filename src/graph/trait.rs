use crate::graph::*;

/// Graphs which vertices and edges can be added to.
pub trait GrowableGraph {
    fn new() -> Self;
    fn add_vertex(&mut self) -> VertexId;
    /// Connects two existing vertices.
    /// Parallel edges and loops are allowed, each one gets its own [EdgeId].
    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> EdgeId;
}

/// Read-only access to a low-level undirected graph.
pub trait QueryableGraph {
    fn vertex_size(&self) -> usize;
    /// Iterates over vertices in the order they were added.
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn contains_vertex(&self, v: &VertexId) -> bool;

    fn edge_size(&self) -> usize;
    /// Iterates over edges in the order they were added.
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn contains_edge(&self, e: &EdgeId) -> bool;
    /// Iterates over edges incident to `v`, each with `source == v`.
    /// A loop on `v` is yielded once.
    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_>;

    fn neighbours(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.out_edges(v).map(|e| e.sink))
    }

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}
