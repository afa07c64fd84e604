//! Command-line interface for the spanwise graph algorithms.
//!
//! Each command loads an edge-list file, builds a directed or undirected
//! graph, runs one algorithm, and returns a [`Report`] that
//! [`render_report`] turns into text.

mod commands;
mod edge_list;
mod render;

pub use commands::{
    AdjacencyReport, Cli, CliError, Command, MstAlgorithm, MstCommand, PathsCommand, PathsReport,
    Report, ShowCommand, SpanningReport, run_cli,
};
pub use edge_list::{EdgeLine, EdgeList, EdgeListError, Malformed};
pub use render::render_report;
