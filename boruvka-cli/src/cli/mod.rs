//! Command-line orchestration for the Borůvka MST tool.
//!
//! Offers four commands: `generate` writes a random connected graph to disk,
//! `single` and `parallel` compute its minimum spanning tree with the
//! respective engine variant, and `compare` runs both and reports the speed
//! ratio.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, GenerateArgs, RunArgs, RunSummary, render_summary,
    run_cli,
};
