use crate::graph::*;
use petgraph::{
    graph::{EdgeIndex, NodeIndex},
    stable_graph::StableUnGraph,
    visit::EdgeRef,
};

/// An undirected graph backed by `petgraph`'s adjacency list.
///
/// Observably equivalent to [super::TreeBackedGraph]; useful as an oracle and
/// for graphs where pointer-chasing beats tree lookups.
#[derive(Clone)]
pub struct AdjacentListGraph(StableUnGraph<(), (VertexId, VertexId), usize>);

impl Default for AdjacentListGraph {
    fn default() -> Self {
        <Self as GrowableGraph>::new()
    }
}

impl std::fmt::Debug for AdjacentListGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "AdjacentListGraph {{")?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        writeln!(f, "}}")
    }
}

impl GrowableGraph for AdjacentListGraph {
    fn new() -> Self {
        Self(StableUnGraph::<(), (VertexId, VertexId), usize>::with_capacity(0, 0))
    }

    fn add_vertex(&mut self) -> VertexId {
        let vid = self.0.add_node(());
        VertexId::new(vid.index())
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> EdgeId {
        let a = NodeIndex::new(source.to_raw());
        let b = NodeIndex::new(sink.to_raw());
        let eid = self.0.add_edge(a, b, (source, sink));
        EdgeId::new(eid.index())
    }
}

impl QueryableGraph for AdjacentListGraph {
    fn vertex_size(&self) -> usize {
        self.0.node_count()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        let it = self.0.node_indices().map(|x| VertexId::new(x.index()));
        Box::new(it)
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.0.contains_node(NodeIndex::new(v.to_raw()))
    }

    fn edge_size(&self) -> usize {
        self.0.edge_count()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        let it = self.0.edge_indices().filter_map(|x| {
            self.0.edge_weight(x).map(|(source, sink)| Edge {
                id: EdgeId::new(x.index()),
                source: *source,
                sink: *sink,
            })
        });
        Box::new(it)
    }

    fn contains_edge(&self, e: &EdgeId) -> bool {
        self.0.edge_weight(EdgeIndex::new(e.to_raw())).is_some()
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        let source = *v;
        if !self.contains_vertex(v) {
            return Box::new(std::iter::empty());
        }
        // petgraph walks its edge lists newest first.
        let mut res: Vec<Edge> = self
            .0
            .edges(NodeIndex::new(v.to_raw()))
            .map(|x| {
                let (a, b) = x.weight();
                let sink = if *a == source { *b } else { *a };
                Edge {
                    id: EdgeId::new(x.id().index()),
                    source,
                    sink,
                }
            })
            .collect();
        res.sort_unstable();
        Box::new(res.into_iter())
    }
}
