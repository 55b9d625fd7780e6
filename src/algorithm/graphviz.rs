//! Dump keyed graphs in the graphviz format, filling vertices by their side of the bipartition.
use crate::coloring::{Bipartiteness, Color};
use crate::graph::*;
use std::hash::Hash;

/// Graphviz colors used for the two sides of a bipartite graph,
/// and for every vertex of a graph that is not bipartite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub color_a: String,
    pub color_b: String,
    pub neutral: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            color_a: "red".to_owned(),
            color_b: "blue".to_owned(),
            neutral: "skyblue".to_owned(),
        }
    }
}

impl Palette {
    pub fn fill(&self, color: Color) -> &str {
        match color {
            Color::ColorA => &self.color_a,
            Color::ColorB => &self.color_b,
            Color::Uncolored => &self.neutral,
        }
    }
}

/// Quotes a graphviz ID.
fn quoted(raw: &str) -> String {
    let mut res = String::with_capacity(raw.len() + 2);
    res.push('"');
    for c in raw.chars() {
        if c == '"' || c == '\\' {
            res.push('\\');
        }
        res.push(c);
    }
    res.push('"');
    res
}

/**
 * Dumps a keyed graph into graphviz format.
 *
 * # Examples
 *
 * ```rust
 * use bicolor::{algorithm::graphviz::*, graph::*};
 *
 * let mut g = BipartiteGraph::<&str>::new(["x", "y", "z"]);
 * g.add_edge(&"x", &"y").unwrap();
 * let trial = {
 *     let mut buf = vec![];
 *     g.dump_in_graphviz(&mut buf, "trial", &Palette::default()).unwrap();
 *     String::from_utf8(buf).unwrap()
 * };
 * assert_eq!(
 *     trial,
 *     r#"graph "trial" {
 *   "x" [style=filled, fillcolor=red] ;
 *   "y" [style=filled, fillcolor=blue] ;
 *   "z" [style=filled, fillcolor=red] ;
 *   "x" -- "y" ;
 * }
 * "#
 * );
 * ```
 */
pub trait DumpInGraphviz {
    fn dump_in_graphviz<W>(
        &self,
        out: &mut W,
        graph_name: &str,
        palette: &Palette,
    ) -> std::io::Result<()>
    where
        W: std::io::Write;
}

impl<K, G> DumpInGraphviz for BipartiteGraph<K, G>
where
    K: Hash + Eq + Clone + std::fmt::Display,
    G: QueryableGraph,
{
    fn dump_in_graphviz<W>(
        &self,
        out: &mut W,
        graph_name: &str,
        palette: &Palette,
    ) -> std::io::Result<()>
    where
        W: std::io::Write,
    {
        let result = self.is_bipartite();
        writeln!(out, "graph {} {{", quoted(graph_name))?;
        for v in self.vertices() {
            let color = match &result {
                Bipartiteness::Bipartite(coloring) => coloring.get(v).unwrap_or_default(),
                Bipartiteness::NotBipartite => Color::Uncolored,
            };
            writeln!(
                out,
                "  {} [style=filled, fillcolor={}] ;",
                quoted(&v.to_string()),
                palette.fill(color)
            )?;
        }
        for (src, snk) in self.edges() {
            writeln!(
                out,
                "  {} -- {} ;",
                quoted(&src.to_string()),
                quoted(&snk.to_string())
            )?;
        }
        writeln!(out, "}}")?;
        Ok(())
    }
}
