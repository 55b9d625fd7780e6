use anyhow::{Context, Result};
use bicolor::{
    algorithm::graphviz::{DumpInGraphviz, Palette},
    coloring::Bipartiteness,
    graph::BipartiteGraph,
    input::EdgeListReader,
};
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bicolor")]
#[command(about = "Read a graph and tell whether it is bipartite", long_about = None)]
struct Cli {
    /// Read the vertex line and edge lines from a file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write the graph in graphviz format, `-` for stdout
    #[arg(long)]
    dot: Option<PathBuf>,

    /// Graph name in the graphviz output
    #[arg(long, default_value = "G")]
    name: String,

    /// Fill color of the first side
    #[arg(long, default_value = "red")]
    color_a: String,

    /// Fill color of the second side
    #[arg(long, default_value = "blue")]
    color_b: String,

    /// Fill color of every vertex when the graph is not bipartite
    #[arg(long, default_value = "skyblue")]
    neutral: String,

    /// Do not prompt, even when reading from a terminal
    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}

impl Cli {
    fn palette(&self) -> Palette {
        Palette {
            color_a: self.color_a.clone(),
            color_b: self.color_b.clone(),
            neutral: self.neutral.clone(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let graph = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            read_graph(BufReader::new(file), false)?
        }
        None => read_graph(io::stdin().lock(), !cli.quiet)?,
    };
    info!(
        "graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    report(&graph, &mut io::stdout().lock())?;

    if let Some(path) = &cli.dot {
        if path.as_os_str() == "-" {
            let mut out = io::stdout().lock();
            graph.dump_in_graphviz(&mut out, &cli.name, &cli.palette())?;
        } else {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            graph.dump_in_graphviz(&mut out, &cli.name, &cli.palette())?;
            out.flush()?;
            info!("graphviz written to {}", path.display());
        }
    }
    Ok(())
}

fn read_graph<R: BufRead>(input: R, prompts: bool) -> Result<BipartiteGraph<String>> {
    let mut reader = EdgeListReader::new(input, io::stdout()).prompts(prompts);
    let graph = reader.read_graph().context("failed to read the graph")?;
    Ok(graph)
}

fn report<W: Write>(graph: &BipartiteGraph<String>, out: &mut W) -> Result<()> {
    match graph.is_bipartite() {
        Bipartiteness::Bipartite(coloring) => {
            writeln!(out, "The graph is Bipartite.")?;
            let (a, b) = coloring.partition();
            writeln!(out, "{}", join(&a))?;
            writeln!(out, "{}", join(&b))?;
        }
        Bipartiteness::NotBipartite => {
            writeln!(out, "The graph is Not Bipartite. Displaying without coloring.")?;
        }
    }
    Ok(())
}

fn join(side: &[&String]) -> String {
    let names: Vec<&str> = side.iter().map(|s| s.as_str()).collect();
    format!("{{{}}}", names.join(", "))
}
