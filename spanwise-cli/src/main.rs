//! CLI entry point for the spanwise graph tools.
//!
//! Parses arguments with clap, runs the requested algorithm over an
//! edge-list file, renders the report to stdout, and maps failures to a
//! non-zero exit code. Logging is initialised first so every step can emit
//! structured diagnostics via `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use spanwise_cli::{
    cli::{Cli, CliError, render_report, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parse CLI arguments, execute the command, render the report, and flush the
/// output stream.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let report = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_report(&report, &mut writer).context("failed to render report")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let graph_error = err
            .downcast_ref::<CliError>()
            .and_then(CliError::graph_error);
        let code = graph_error.map(|graph| field::display(graph.code().as_str()));
        let logic_error = graph_error.is_some_and(|graph| graph.is_logic_error());
        let message = format!("{err:#}");

        error!(
            error = %message,
            code,
            logic_error,
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
