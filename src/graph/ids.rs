/// Declares a `usize`-backed handle together with the factory minting it.
macro_rules! define_id {
    ($(#[$doc:meta])* $id:ident, $factory:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
        pub struct $id(pub usize);

        impl $id {
            pub const MIN: $id = $id(0);

            pub fn new(x: usize) -> Self {
                Self(x)
            }

            pub fn to_raw(&self) -> usize {
                self.0
            }

            pub fn next(&self) -> Self {
                Self(self.0 + 1)
            }
        }

        #[doc = concat!("Mints [", stringify!($id), "]s in increasing order.")]
        #[derive(Debug, Clone, Default)]
        pub struct $factory(usize);

        impl $factory {
            pub fn new() -> Self {
                Self(0)
            }

            pub fn one_more(&mut self) -> $id {
                let cur = self.0;
                self.0 += 1;
                $id(cur)
            }
        }
    };
}

define_id!(
    /// ID for vertices in low-level graphs, which is essentially `usize`.
    VertexId,
    VertexIdFactory
);

define_id!(
    /// ID for edges in low-level graphs, which is essentially `usize`.
    EdgeId,
    EdgeIdFactory
);

/// An edge of a low-level graph.
///
/// For undirected graphs, `source` is the endpoint the edge was reached from.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub id: EdgeId,
    pub source: VertexId,
    pub sink: VertexId,
}

impl Edge {
    pub fn is_loop(&self) -> bool {
        self.source == self.sink
    }
}
