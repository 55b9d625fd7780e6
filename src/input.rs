//! Reading a graph from line-oriented text.
//!
//! The first line lists vertices separated by whitespace.
//! Every following line is an edge `vertex1 vertex2`, until a line holding only the terminator word
//! (`done` by default, case-insensitive) or the end of input.
//! Lines that are not exactly two known vertices are reported and skipped.
use crate::error::InputError;
use crate::graph::*;
use log::{debug, warn};
use std::io::{BufRead, Write};

pub const VERTICES_PROMPT: &str = "Enter vertices (separated by space): ";
pub const EDGE_PROMPT: &str = "Enter edge as 'vertex1 vertex2' (or 'done' to finish): ";
pub const INVALID_EDGE: &str = "Invalid input. Please enter two valid vertices.";

pub struct EdgeListReader<R, W> {
    input: R,
    output: W,
    prompts: bool,
    terminator: String,
}

impl<R, W> EdgeListReader<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            prompts: true,
            terminator: "done".to_owned(),
        }
    }

    /// Whether to write prompts before reading each line.
    pub fn prompts(mut self, on: bool) -> Self {
        self.prompts = on;
        self
    }

    pub fn terminator(mut self, word: &str) -> Self {
        self.terminator = word.to_owned();
        self
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn next_line(&mut self, prompt: &str) -> Result<Option<String>, InputError> {
        if self.prompts {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;
        }
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    pub fn read_vertices(&mut self) -> Result<Vec<String>, InputError> {
        let line = self
            .next_line(VERTICES_PROMPT)?
            .ok_or(InputError::UnexpectedEof)?;
        let res: Vec<String> = line.split_whitespace().map(str::to_owned).collect();
        debug!("read {} vertices", res.len());
        Ok(res)
    }

    /// Adds edges to `graph` until the terminator or the end of input.
    /// Returns how many edges were added.
    pub fn read_edges<G>(
        &mut self,
        graph: &mut BipartiteGraph<String, G>,
    ) -> Result<usize, InputError>
    where
        G: GrowableGraph + QueryableGraph,
    {
        let mut added = 0;
        while let Some(line) = self.next_line(EDGE_PROMPT)? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.eq_ignore_ascii_case(&self.terminator) {
                break;
            }
            let tokens: Vec<String> = line.split_whitespace().map(str::to_owned).collect();
            match tokens.as_slice() {
                [u, v] if graph.contains(u) && graph.contains(v) => {
                    graph.add_edge(u, v)?;
                    added += 1;
                }
                _ => {
                    warn!("rejected edge line {:?}", line);
                    writeln!(self.output, "{}", INVALID_EDGE)?;
                }
            }
        }
        debug!("read {} edges", added);
        Ok(added)
    }

    pub fn read_graph(&mut self) -> Result<BipartiteGraph<String>, InputError> {
        let mut graph: BipartiteGraph<String> = BipartiteGraph::new(self.read_vertices()?);
        self.read_edges(&mut graph)?;
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str, prompts: bool) -> (BipartiteGraph<String>, String) {
        let mut reader = EdgeListReader::new(text.as_bytes(), Vec::new()).prompts(prompts);
        let g = reader.read_graph().unwrap();
        let (_, out) = reader.into_inner();
        (g, String::from_utf8(out).unwrap())
    }

    fn edges(g: &BipartiteGraph<String>) -> Vec<(String, String)> {
        g.edges().map(|(a, b)| (a.clone(), b.clone())).collect()
    }

    #[test]
    fn reads_until_done() {
        let (g, out) = read("A B C\nA B\nB C\nDONE\nC A\n", false);
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(
            edges(&g),
            vec![
                ("A".to_owned(), "B".to_owned()),
                ("B".to_owned(), "C".to_owned())
            ]
        );
        assert_eq!(out, "");
    }

    #[test]
    fn reads_until_eof() {
        let (g, _) = read("A B\n  A   B  \n", false);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn invalid_lines_are_reported() {
        let (g, out) = read("A B\nA\nA B C\nA Z\n\nB A\ndone\n", false);
        assert_eq!(edges(&g), vec![("B".to_owned(), "A".to_owned())]);
        assert_eq!(out, format!("{0}\n{0}\n{0}\n", INVALID_EDGE));
    }

    #[test]
    fn prompts_are_written() {
        let (_, out) = read("A B\nA B\ndone\n", true);
        assert_eq!(out, format!("{}{}{}", VERTICES_PROMPT, EDGE_PROMPT, EDGE_PROMPT));
    }

    #[test]
    fn custom_terminator() {
        let mut reader = EdgeListReader::new("A B\nA B\nend\nB A\n".as_bytes(), Vec::new())
            .prompts(false)
            .terminator("END");
        let g = reader.read_graph().unwrap();
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn empty_input_has_no_vertices() {
        let mut reader = EdgeListReader::new("".as_bytes(), Vec::new()).prompts(false);
        assert!(matches!(reader.read_graph(), Err(InputError::UnexpectedEof)));
    }

    #[test]
    fn loops_are_accepted() {
        let (g, _) = read("A\nA A\ndone\n", false);
        assert_eq!(g.edge_count(), 1);
        assert!(!g.is_bipartite().is_bipartite());
    }
}
