//! Command implementations and argument parsing for the spanwise CLI.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use spanwise_core::{
    Adjacency, AdjacencyList, DirectedGraph, GraphError, ShortestPath, ShortestPathTree,
    SpanningForest, UndirectedGraph, VertexId, Weight,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::edge_list::{EdgeList, EdgeListError, Malformed};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanwise",
    about = "Run shortest-path and spanning-tree algorithms on edge-list files."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the adjacency list of every vertex.
    Show(ShowCommand),
    /// Compute single-source shortest paths on a directed graph.
    Paths(PathsCommand),
    /// Compute a minimum spanning tree of an undirected graph.
    Mst(MstCommand),
}

/// Options accepted by the `show` command.
#[derive(Debug, Args, Clone)]
pub struct ShowCommand {
    /// Edge-list file to load.
    pub path: PathBuf,

    /// Load edges as undirected, mirroring each into both endpoints.
    #[arg(long)]
    pub undirected: bool,
}

/// Options accepted by the `paths` command.
#[derive(Debug, Args, Clone)]
pub struct PathsCommand {
    /// Edge-list file to load as a directed graph.
    pub path: PathBuf,

    /// Vertex the shortest paths start from.
    #[arg(long)]
    pub source: VertexId,

    /// Use edge weights instead of counting hops.
    #[arg(long)]
    pub weighted: bool,

    /// Also print the path to this vertex.
    #[arg(long)]
    pub target: Option<VertexId>,
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstCommand {
    /// Edge-list file to load as an undirected graph.
    pub path: PathBuf,

    /// Spanning-tree algorithm to run.
    #[arg(long, value_enum)]
    pub algorithm: MstAlgorithm,
}

/// Supported minimum spanning tree algorithms.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum MstAlgorithm {
    /// Grow trees vertex by vertex with a linear selection scan.
    Prim,
    /// Accept edges in weight order, rejecting cycles with a disjoint-set forest.
    Kruskal,
}

impl MstAlgorithm {
    /// Returns the lowercase algorithm name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prim => "prim",
            Self::Kruskal => "kruskal",
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened or read.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: std::io::Error,
    },
    /// The input file is not a valid edge list.
    #[error("`{path}` line {line}: {reason}")]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        #[source]
        reason: Malformed,
    },
    /// The declared vertex count was rejected by the graph.
    #[error("line {line}: {source}")]
    Header {
        /// 1-based line number of the vertex count.
        line: usize,
        /// Error raised by the graph.
        #[source]
        source: GraphError,
    },
    /// An edge named a vertex the graph does not have.
    #[error("line {line}: {source}")]
    Edge {
        /// 1-based line number of the edge.
        line: usize,
        /// Error raised by the graph.
        #[source]
        source: GraphError,
    },
    /// A graph operation failed.
    #[error(transparent)]
    Core(#[from] GraphError),
}

impl CliError {
    /// Returns the graph error behind this failure, if any.
    #[must_use]
    pub const fn graph_error(&self) -> Option<&GraphError> {
        match self {
            Self::Header { source, .. } | Self::Edge { source, .. } | Self::Core(source) => {
                Some(source)
            }
            Self::Io { .. } | Self::Parse { .. } => None,
        }
    }
}

/// Structured outcome of a CLI command, rendered by [`super::render_report`].
#[derive(Debug, Clone)]
pub enum Report {
    /// Output of `show`.
    Adjacency(AdjacencyReport),
    /// Output of `paths`.
    Paths(PathsReport),
    /// Output of `mst`.
    Spanning(SpanningReport),
}

/// Adjacency lists of a loaded graph.
#[derive(Debug, Clone)]
pub struct AdjacencyReport {
    /// Whether edges were loaded as directed.
    pub directed: bool,
    /// Number of edges in the graph.
    pub edge_count: usize,
    /// Each vertex with its adjacency records in storage order.
    pub rows: Vec<(VertexId, Vec<Adjacency>)>,
}

/// Shortest-path table with an optional reconstructed path.
#[derive(Debug, Clone)]
pub struct PathsReport {
    /// Whether weights were used.
    pub weighted: bool,
    /// The computed distances and predecessors.
    pub tree: ShortestPathTree,
    /// The requested target and its path, `None` inside when unreached.
    pub target: Option<(VertexId, Option<ShortestPath>)>,
}

/// A minimum spanning tree or forest.
#[derive(Debug, Clone)]
pub struct SpanningReport {
    /// Algorithm that produced the forest.
    pub algorithm: MstAlgorithm,
    /// The computed forest.
    pub forest: SpanningForest,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the input or running the algorithm
/// fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanwise_cli::cli::{Cli, Command, MstAlgorithm, MstCommand, Report, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3\n1 2 1\n2 3 2\n1 3 4\n")?;
/// let cli = Cli {
///     command: Command::Mst(MstCommand {
///         path: file.path().to_path_buf(),
///         algorithm: MstAlgorithm::Kruskal,
///     }),
/// };
/// let Report::Spanning(report) = run_cli(cli)? else {
///     unreachable!("mst yields a spanning report");
/// };
/// assert_eq!(report.forest.total_weight(), 3);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<Report, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Show(show) => {
            span.record("command", field::display("show"));
            run_show(&show).map(Report::Adjacency)
        }
        Command::Paths(paths) => {
            span.record("command", field::display("paths"));
            run_paths(&paths).map(Report::Paths)
        }
        Command::Mst(mst) => {
            span.record("command", field::display("mst"));
            run_mst(&mst).map(Report::Spanning)
        }
    }
}

#[instrument(
    name = "cli.show",
    err,
    skip(command),
    fields(undirected = command.undirected),
)]
pub(super) fn run_show(command: &ShowCommand) -> Result<AdjacencyReport, CliError> {
    let list = load_edge_list(&command.path)?;
    let (edge_count, rows) = if command.undirected {
        let graph: UndirectedGraph = build_graph(&list)?;
        let rows = collect_rows(graph.vertex_count(), |vertex| graph.neighbours(vertex))?;
        (graph.edge_count(), rows)
    } else {
        let graph: DirectedGraph = build_graph(&list)?;
        let rows = collect_rows(graph.vertex_count(), |vertex| graph.neighbours(vertex))?;
        (graph.edge_count(), rows)
    };
    info!(vertices = rows.len(), edges = edge_count, "graph loaded");
    Ok(AdjacencyReport {
        directed: !command.undirected,
        edge_count,
        rows,
    })
}

#[instrument(
    name = "cli.paths",
    err,
    skip(command),
    fields(source = command.source, weighted = command.weighted, target = field::Empty),
)]
pub(super) fn run_paths(command: &PathsCommand) -> Result<PathsReport, CliError> {
    let list = load_edge_list(&command.path)?;
    let mut graph: DirectedGraph = build_graph(&list)?;

    let tree = if command.weighted {
        graph.positive_weighted_shortest_paths(command.source)?
    } else {
        graph.unweighted_shortest_paths(command.source)?
    }
    .clone();

    let target = match command.target {
        Some(target) => {
            Span::current().record("target", target);
            Some((target, graph.path_to(target)?))
        }
        None => None,
    };
    info!(
        reached = tree.reached_count(),
        vertices = tree.vertex_count(),
        "shortest paths computed"
    );
    Ok(PathsReport {
        weighted: command.weighted,
        tree,
        target,
    })
}

#[instrument(
    name = "cli.mst",
    err,
    skip(command),
    fields(algorithm = command.algorithm.as_str()),
)]
pub(super) fn run_mst(command: &MstCommand) -> Result<SpanningReport, CliError> {
    let list = load_edge_list(&command.path)?;
    let graph: UndirectedGraph = build_graph(&list)?;
    let forest = match command.algorithm {
        MstAlgorithm::Prim => graph.minimum_spanning_tree_prim(),
        MstAlgorithm::Kruskal => graph.minimum_spanning_tree_kruskal()?,
    };
    info!(
        total_weight = forest.total_weight(),
        components = forest.component_count(),
        "spanning forest computed"
    );
    Ok(SpanningReport {
        algorithm: command.algorithm,
        forest,
    })
}

#[instrument(name = "cli.load_edge_list", err, fields(path = field::Empty))]
pub(super) fn load_edge_list(path: &Path) -> Result<EdgeList, CliError> {
    Span::current().record("path", field::display(path.display()));
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_error)?;
    EdgeList::parse(BufReader::new(file)).map_err(|err| match err {
        EdgeListError::Read(source) => io_error(source),
        EdgeListError::Malformed { line, reason } => CliError::Parse {
            path: path.to_path_buf(),
            line,
            reason,
        },
    })
}

/// Graphs the CLI can build from an [`EdgeList`].
pub(super) trait LoadTarget: Sized {
    fn with_vertices(vertex_count: usize) -> Result<Self, GraphError>;

    fn add_edge(&mut self, tail: VertexId, head: VertexId, weight: Weight)
    -> Result<(), GraphError>;
}

impl LoadTarget for DirectedGraph {
    fn with_vertices(vertex_count: usize) -> Result<Self, GraphError> {
        Self::new(vertex_count)
    }

    fn add_edge(
        &mut self,
        tail: VertexId,
        head: VertexId,
        weight: Weight,
    ) -> Result<(), GraphError> {
        self.insert_edge(tail, head, weight)
    }
}

impl LoadTarget for UndirectedGraph {
    fn with_vertices(vertex_count: usize) -> Result<Self, GraphError> {
        Self::new(vertex_count)
    }

    fn add_edge(
        &mut self,
        tail: VertexId,
        head: VertexId,
        weight: Weight,
    ) -> Result<(), GraphError> {
        self.insert_edge(tail, head, weight)
    }
}

pub(super) fn build_graph<G: LoadTarget>(list: &EdgeList) -> Result<G, CliError> {
    let mut graph = G::with_vertices(list.vertex_count()).map_err(|source| CliError::Header {
        line: list.header_line(),
        source,
    })?;
    for edge in list.edges() {
        graph
            .add_edge(edge.tail, edge.head, edge.weight)
            .map_err(|source| CliError::Edge {
                line: edge.line,
                source,
            })?;
    }
    Ok(graph)
}

fn collect_rows<'g, F>(
    vertex_count: usize,
    neighbours: F,
) -> Result<Vec<(VertexId, Vec<Adjacency>)>, CliError>
where
    F: Fn(VertexId) -> Result<&'g AdjacencyList, GraphError>,
{
    (1..=vertex_count)
        .map(|vertex| Ok((vertex, neighbours(vertex)?.iter().collect())))
        .collect()
}
