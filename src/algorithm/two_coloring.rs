use crate::coloring::Color;
use crate::graph::*;
use ahash::RandomState;
use log::{debug, trace};
use std::collections::{HashMap, VecDeque};

/// Breadth-first two-coloring of low-level graphs.
pub trait TwoColoring
where
    Self: QueryableGraph + Sized,
{
    /// Colors every vertex with `ColorA` or `ColorB`
    /// so that no edge joins two vertices of the same color.
    ///
    /// Connected components are visited in vertex order, each one starting from `ColorA`.
    /// Returns `None` as soon as an edge, loops included, joins two equally colored vertices.
    fn two_coloring(&self) -> Option<HashMap<VertexId, Color, RandomState>> {
        let mut colors: HashMap<VertexId, Color, RandomState> =
            HashMap::with_capacity_and_hasher(self.vertex_size(), RandomState::new());
        for v in self.iter_vertices() {
            colors.insert(v, Color::Uncolored);
        }

        let mut queue = VecDeque::new();
        for root in self.iter_vertices() {
            if colors[&root].is_colored() {
                continue;
            }
            trace!("new component from {:?}", root);
            colors.insert(root, Color::ColorA);
            queue.push_back(root);
            while let Some(current) = queue.pop_front() {
                let current_color = colors[&current];
                for e in self.out_edges(&current) {
                    let neighbour = colors.entry(e.sink).or_default();
                    if !neighbour.is_colored() {
                        *neighbour = current_color.opposite();
                        queue.push_back(e.sink);
                    } else if *neighbour == current_color {
                        if e.is_loop() {
                            debug!("{:?} is a loop on {:?}", e.id, e.source);
                        } else {
                            debug!(
                                "{:?} joins {:?} and {:?}, both {:?}",
                                e.id, e.source, e.sink, current_color
                            );
                        }
                        return None;
                    }
                }
            }
        }
        Some(colors)
    }
}

impl<G: QueryableGraph> TwoColoring for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::undirected::*;
    use quickcheck_macros::quickcheck;

    fn path(n: usize) -> TreeBackedGraph {
        let mut g = TreeBackedGraph::new();
        let vs: Vec<_> = (0..n).map(|_| g.add_vertex()).collect();
        for w in vs.windows(2) {
            g.add_edge(w[0], w[1]);
        }
        g
    }

    fn cycle(n: usize) -> TreeBackedGraph {
        let mut g = path(n);
        g.add_edge(VertexId(n - 1), VertexId(0));
        g
    }

    /// Tries every assignment of two colors.
    fn brute_force_bipartite<G: QueryableGraph>(g: &G) -> bool {
        let vs: Vec<_> = g.iter_vertices().collect();
        let pos: HashMap<VertexId, usize> = vs.iter().enumerate().map(|(i, v)| (*v, i)).collect();
        (0u32..(1 << vs.len())).any(|mask| {
            g.iter_edges().all(|e| {
                let a = (mask >> pos[&e.source]) & 1;
                let b = (mask >> pos[&e.sink]) & 1;
                a != b
            })
        })
    }

    #[test]
    fn empty_graph() {
        let g = TreeBackedGraph::new();
        assert_eq!(g.two_coloring().map(|c| c.len()), Some(0));
    }

    #[test]
    fn path_alternates() {
        let g = path(5);
        let colors = g.two_coloring().unwrap();
        let trial: Vec<_> = g.iter_vertices().map(|v| colors[&v]).collect();
        assert_eq!(
            trial,
            vec![
                Color::ColorA,
                Color::ColorB,
                Color::ColorA,
                Color::ColorB,
                Color::ColorA
            ]
        );
    }

    #[test]
    fn odd_cycles_are_rejected() {
        for n in [3, 5, 7, 9] {
            assert!(cycle(n).two_coloring().is_none(), "cycle of {}", n);
        }
    }

    #[test]
    fn even_cycles_are_accepted() {
        for n in [2, 4, 6, 8] {
            assert!(cycle(n).two_coloring().is_some(), "cycle of {}", n);
        }
    }

    #[test]
    fn loop_is_rejected() {
        let mut g = path(2);
        g.add_edge(VertexId(1), VertexId(1));
        assert!(g.two_coloring().is_none());
    }

    #[test]
    fn every_component_starts_from_color_a() {
        let mut g = TreeBackedGraph::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();
        let d = g.add_vertex();
        g.add_edge(c, a);
        g.add_edge(d, b);
        let colors = g.two_coloring().unwrap();
        assert_eq!(colors[&a], Color::ColorA);
        assert_eq!(colors[&b], Color::ColorA);
        assert_eq!(colors[&c], Color::ColorB);
        assert_eq!(colors[&d], Color::ColorB);
    }

    #[test]
    fn conflict_in_later_component() {
        let mut g = path(2);
        let x = g.add_vertex();
        let y = g.add_vertex();
        let z = g.add_vertex();
        g.add_edge(x, y);
        g.add_edge(y, z);
        g.add_edge(z, x);
        assert!(g.two_coloring().is_none());
    }

    #[quickcheck]
    fn coloring_is_proper(ops: Ops) {
        let g: TreeBackedGraph = ops.build();
        if let Some(colors) = g.two_coloring() {
            assert_eq!(colors.len(), g.vertex_size());
            for v in g.iter_vertices() {
                assert!(colors[&v].is_colored());
            }
            for e in g.iter_edges() {
                assert_ne!(colors[&e.source], colors[&e.sink], "{:?}", e);
            }
        }
    }

    #[quickcheck]
    fn agrees_with_brute_force(ops: Ops) {
        let g: TreeBackedGraph = ops.build();
        assert_eq!(g.two_coloring().is_some(), brute_force_bipartite(&g));
    }

    #[quickcheck]
    fn backends_agree(ops: Ops) {
        let oracle: TreeBackedGraph = ops.build();
        let trial: AdjacentListGraph = ops.build();
        assert_eq!(oracle.two_coloring(), trial.two_coloring());
    }
}
