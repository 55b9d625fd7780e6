use crate::algorithm::TwoColoring;
use crate::coloring::{Bipartiteness, Coloring};
use crate::error::GraphError;
use crate::graph::*;
use ahash::RandomState;
use bimap::BiHashMap;
use log::debug;
use std::hash::Hash;

/// An undirected graph whose vertices are keyed by arbitrary hashable values.
///
/// The vertex set is fixed at construction; edges are added afterwards with
/// [BipartiteGraph::add_edge] and may be duplicated or be loops.
///
/// ```rust
/// use bicolor::{coloring::*, graph::*};
///
/// let mut g = BipartiteGraph::<&str>::new(["A", "B", "C", "D"]);
/// g.add_edge(&"A", &"B").unwrap();
/// g.add_edge(&"B", &"C").unwrap();
/// g.add_edge(&"C", &"D").unwrap();
/// g.add_edge(&"D", &"A").unwrap();
/// let coloring = g.is_bipartite().into_coloring().unwrap();
/// assert_eq!(coloring.partition(), (vec![&"A", &"C"], vec![&"B", &"D"]));
///
/// g.add_edge(&"A", &"C").unwrap();
/// assert_eq!(g.is_bipartite(), Bipartiteness::NotBipartite);
/// assert!(g.add_edge(&"A", &"E").is_err());
/// ```
#[derive(Clone)]
pub struct BipartiteGraph<K, G = undirected::TreeBackedGraph>
where
    K: Hash + Eq,
{
    lower_graph: G,
    vertices: BiHashMap<VertexId, K, RandomState, RandomState>,
}

impl<K, G> Default for BipartiteGraph<K, G>
where
    K: Hash + Eq + Clone + std::fmt::Debug,
    G: GrowableGraph,
{
    fn default() -> Self {
        Self::new(std::iter::empty())
    }
}

impl<K, G> BipartiteGraph<K, G>
where
    K: Hash + Eq + Clone + std::fmt::Debug,
    G: GrowableGraph,
{
    /// Creates a graph with the given vertices and no edges.
    /// Repeated keys are ignored after their first occurrence.
    pub fn new<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut res = Self {
            lower_graph: G::new(),
            vertices: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
        };
        for key in vertices {
            if res.vertices.contains_right(&key) {
                continue;
            }
            let vid = res.lower_graph.add_vertex();
            res.vertices.insert(vid, key);
        }
        res
    }

    /// Connects `u` and `v`, both of which must be vertices of the graph.
    ///
    /// Nothing is changed when either one is unknown.
    pub fn add_edge(&mut self, u: &K, v: &K) -> Result<EdgeId, GraphError> {
        let vid_u = self.id_by_key(u)?;
        let vid_v = self.id_by_key(v)?;
        Ok(self.lower_graph.add_edge(vid_u, vid_v))
    }

    fn id_by_key(&self, key: &K) -> Result<VertexId, GraphError> {
        self.vertices.get_by_right(key).copied().ok_or_else(|| {
            debug!("no vertex {:?}", key);
            GraphError::UnknownVertex {
                vertex: format!("{:?}", key),
            }
        })
    }
}

impl<K, G> BipartiteGraph<K, G>
where
    K: Hash + Eq + Clone,
    G: QueryableGraph,
{
    /// Two-colors the graph breadth-first, one connected component at a time.
    ///
    /// Components are visited in vertex order and each one starts from `ColorA`,
    /// so labels of different components are unrelated.
    /// A loop or any odd cycle makes the graph [Bipartiteness::NotBipartite].
    pub fn is_bipartite(&self) -> Bipartiteness<K> {
        match self.lower_graph.two_coloring() {
            None => Bipartiteness::NotBipartite,
            Some(colors) => {
                let mut res = Coloring::with_capacity(colors.len());
                for vid in self.lower_graph.iter_vertices() {
                    if let (Some(key), Some(color)) =
                        (self.vertices.get_by_left(&vid), colors.get(&vid))
                    {
                        res.push(key.clone(), *color);
                    }
                }
                Bipartiteness::Bipartite(res)
            }
        }
    }
}

impl<K, G> BipartiteGraph<K, G>
where
    K: Hash + Eq,
    G: QueryableGraph,
{
    pub fn vertex_count(&self) -> usize {
        self.lower_graph.vertex_size()
    }

    pub fn edge_count(&self) -> usize {
        self.lower_graph.edge_size()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.vertices.contains_right(key)
    }

    /// Iterates over vertices in the order they were given.
    pub fn vertices(&self) -> impl Iterator<Item = &K> + '_ {
        self.lower_graph
            .iter_vertices()
            .filter_map(move |vid| self.vertices.get_by_left(&vid))
    }

    /// Iterates over edges in the order they were added, as pairs of endpoints.
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K)> + '_ {
        self.lower_graph.iter_edges().filter_map(move |e| {
            let source = self.vertices.get_by_left(&e.source)?;
            let sink = self.vertices.get_by_left(&e.sink)?;
            Some((source, sink))
        })
    }

    /// Iterates over neighbours of `key`, once per incident edge.
    /// Unknown keys have no neighbours.
    pub fn neighbours<'a>(&'a self, key: &K) -> Box<dyn Iterator<Item = &'a K> + 'a> {
        match self.vertices.get_by_right(key) {
            Some(vid) => Box::new(
                self.lower_graph
                    .neighbours(vid)
                    .filter_map(move |n| self.vertices.get_by_left(&n)),
            ),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<K, G> std::fmt::Debug for BipartiteGraph<K, G>
where
    K: Hash + Eq + std::fmt::Debug,
    G: QueryableGraph,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut m = f.debug_map();
        for v in self.vertices() {
            m.entry(v, &self.neighbours(v).collect::<Vec<_>>());
        }
        m.finish()
    }
}
