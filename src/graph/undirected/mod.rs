//! Implementations of low-level undirected graphs

mod tree_backed;
pub use self::tree_backed::*;
mod adjacent_list;
pub use self::adjacent_list::*;

#[cfg(test)]
pub use self::tests::*;

#[cfg(test)]
mod tests {
    use crate::graph::*;
    use quickcheck::Arbitrary;
    use rs_quickcheck_util::*;

    /// Keeps generated graphs small enough to brute-force their 2-colorings.
    pub const MAX_VERTICES: usize = 10;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Op {
        AddVertex,
        /// Endpoints are indices into the vertices added so far.
        AddEdge(usize, usize),
    }

    #[derive(Clone)]
    pub struct Ops {
        pub ops: Vec<Op>,
    }

    impl std::fmt::Debug for Ops {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.ops)
        }
    }

    impl Ops {
        pub fn iter(&self) -> impl Iterator<Item = &Op> + '_ {
            self.ops.iter()
        }

        pub fn build<G: GrowableGraph>(&self) -> G {
            let mut g = G::new();
            let mut vertices = vec![];
            for op in self.iter() {
                match op {
                    Op::AddVertex => vertices.push(g.add_vertex()),
                    Op::AddEdge(a, b) => {
                        g.add_edge(vertices[*a], vertices[*b]);
                    }
                }
            }
            g
        }
    }

    impl quickcheck::Arbitrary for Ops {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let mut vertex_size = 0usize;
            let ops = gen_bytes(g, b"abcd.", b'.', 0..)
                .iter()
                .filter_map(|_| match u8::arbitrary(g) % 3 {
                    0 => {
                        if vertex_size >= MAX_VERTICES {
                            None
                        } else {
                            vertex_size += 1;
                            Some(Op::AddVertex)
                        }
                    }
                    1 | 2 => {
                        if vertex_size == 0 {
                            None
                        } else {
                            let a = usize::arbitrary(g) % vertex_size;
                            let b = usize::arbitrary(g) % vertex_size;
                            Some(Op::AddEdge(a, b))
                        }
                    }
                    _ => unreachable!(),
                })
                .collect();
            Self { ops }
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            let l = self.ops.len();
            let me = self.clone();
            let it = std::iter::successors(Some(l / 2), move |n| {
                let nxt = (n + l) / 2 + 1;
                if nxt >= l {
                    None
                } else {
                    Some(nxt)
                }
            })
            .map(move |n| Self {
                ops: me.ops[0..n].to_vec(),
            });
            Box::new(it)
        }
    }
}
