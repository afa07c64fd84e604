//! Text rendering of command reports.
//!
//! Tables use fixed-width columns so output lines up for graphs with up to
//! four-digit vertex ids.

use std::io::{self, Write};

use spanwise_core::ShortestPath;

use super::commands::{AdjacencyReport, PathsReport, Report, SpanningReport};

const WIDE_RULE: &str = "------------------------------------------------------------------";
const NARROW_RULE: &str = "----------------------";

/// Renders `report` to `writer` in a human-readable text format.
///
/// Unreached vertices and missing predecessors print as `-`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanwise_cli::cli::{MstAlgorithm, Report, SpanningReport, render_report};
/// # use spanwise_core::UndirectedGraph;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut graph = UndirectedGraph::new(2)?;
/// graph.insert_edge(1, 2, 5)?;
/// let report = Report::Spanning(SpanningReport {
///     algorithm: MstAlgorithm::Prim,
///     forest: graph.minimum_spanning_tree_prim(),
/// });
/// let mut buffer = Vec::new();
/// render_report(&report, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "(1, 2, 5)\ntotal weight: 5\n");
/// # Ok(())
/// # }
/// ```
pub fn render_report(report: &Report, writer: impl Write) -> io::Result<()> {
    match report {
        Report::Adjacency(adjacency) => render_adjacency(adjacency, writer),
        Report::Paths(paths) => render_paths(paths, writer),
        Report::Spanning(spanning) => render_spanning(spanning, writer),
    }
}

fn render_adjacency(report: &AdjacencyReport, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "{WIDE_RULE}")?;
    writeln!(writer, "vertex  adjacency list")?;
    writeln!(writer, "{WIDE_RULE}")?;
    for (vertex, records) in &report.rows {
        write!(writer, "{vertex:>4} :")?;
        for record in records {
            write!(writer, " ({}, {})", record.neighbour(), record.weight())?;
        }
        writeln!(writer)?;
    }
    writeln!(writer, "{WIDE_RULE}")?;
    let kind = if report.directed { "directed" } else { "undirected" };
    writeln!(
        writer,
        "{} vertices, {} {kind} edges",
        report.rows.len(),
        report.edge_count
    )
}

fn render_paths(report: &PathsReport, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "{NARROW_RULE}")?;
    writeln!(writer, "vertex    dist    pred")?;
    writeln!(writer, "{NARROW_RULE}")?;
    for (vertex, distance, predecessor) in report.tree.rows() {
        writeln!(
            writer,
            "{vertex:>4} :{:>8}{:>8}",
            dash_or(distance),
            dash_or(predecessor)
        )?;
    }
    writeln!(writer, "{NARROW_RULE}")?;

    match &report.target {
        Some((_, Some(path))) => render_path(path, &mut writer),
        Some((target, None)) => writeln!(
            writer,
            "{target} is unreachable from {}",
            report.tree.source()
        ),
        None => Ok(()),
    }
}

fn render_path(path: &ShortestPath, mut writer: impl Write) -> io::Result<()> {
    let mut vertices = path.vertices().iter();
    if let Some(first) = vertices.next() {
        write!(writer, "{first}")?;
    }
    for vertex in vertices {
        write!(writer, " {vertex}")?;
    }
    writeln!(writer, " ({})", path.distance())
}

fn render_spanning(report: &SpanningReport, mut writer: impl Write) -> io::Result<()> {
    let forest = &report.forest;
    for edge in forest.edges() {
        writeln!(writer, "({}, {}, {})", edge.tail(), edge.head(), edge.weight())?;
    }
    writeln!(writer, "total weight: {}", forest.total_weight())?;
    if !forest.is_tree() {
        writeln!(
            writer,
            "forest: graph is disconnected ({} components)",
            forest.component_count()
        )?;
    }
    Ok(())
}

fn dash_or<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_owned(), |value| value.to_string())
}
