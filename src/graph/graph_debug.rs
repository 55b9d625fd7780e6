use crate::graph::*;

/// Inspects into a low-level graph, one vertex per line followed by its incident edges.
pub struct GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    init_indent: usize,
    indent_step: usize,
}

impl<'a, G> GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            init_indent: 0,
            indent_step: 2,
        }
    }

    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.init_indent = init;
        self.indent_step = step;
        self
    }

    fn pad(&self, level: usize) -> String {
        " ".repeat(self.init_indent + self.indent_step * level)
    }
}

impl<'a, G> std::fmt::Debug for GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.graph.iter_vertices() {
            writeln!(f, "{}{:?}", self.pad(0), v)?;
            for e in self.graph.out_edges(&v) {
                writeln!(f, "{}--{:?}-- {:?}", self.pad(1), e.id, e.sink)?;
            }
        }
        Ok(())
    }
}
