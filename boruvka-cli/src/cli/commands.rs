//! Command implementations and argument parsing for the boruvka CLI.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use boruvka_core::{Edge, Graph, MstError, parallel_boruvka, sequential_boruvka};
use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use crate::generate::{
    EDGE_COUNT_RANGE, GenerateError, VERTEX_COUNT_RANGE, random_connected_graph,
};
use crate::graph_io::{GraphIoError, load_graph, save_graph};

const DEFAULT_GRAPH_PATH: &str = "graph_data.txt";
const DEFAULT_RESULT_PATH: &str = "result.txt";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "boruvka",
    about = "Compute minimum spanning trees with Borůvka's algorithm."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a random connected graph and save it to disk.
    Generate(GenerateArgs),
    /// Compute the MST on a single thread.
    Single(RunArgs),
    /// Compute the MST with fork-join parallel rounds.
    Parallel(RunArgs),
    /// Run both variants on the same input and report the speed ratio.
    Compare(RunArgs),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateArgs {
    /// Output path for the generated graph.
    #[arg(long, default_value = DEFAULT_GRAPH_PATH)]
    pub output: PathBuf,

    /// Vertex count (defaults to a random draw from 300..=500).
    #[arg(long)]
    pub vertices: Option<u64>,

    /// Edge count (defaults to a random draw from 4000..=6000).
    #[arg(long)]
    pub edges: Option<u64>,

    /// Seed for reproducible generation (defaults to entropy).
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Options shared by the `single`, `parallel`, and `compare` commands.
#[derive(Debug, Args, Clone)]
pub struct RunArgs {
    /// Input graph path.
    #[arg(long, default_value = DEFAULT_GRAPH_PATH)]
    pub input: PathBuf,

    /// Output path for the resulting spanning tree.
    #[arg(long, default_value = DEFAULT_RESULT_PATH)]
    pub output: PathBuf,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Graph file reading, writing, or parsing failed.
    #[error(transparent)]
    GraphIo(#[from] GraphIoError),
    /// Random generation could not satisfy the requested dimensions.
    #[error(transparent)]
    Generate(#[from] GenerateError),
    /// The MST engine rejected the input graph.
    #[error(transparent)]
    Mst(#[from] MstError),
}

/// Summarises the outcome of one CLI invocation.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// A random graph was generated and saved.
    Generated {
        /// Path the graph was written to.
        path: PathBuf,
        /// Number of vertices in the generated graph.
        vertices: usize,
        /// Number of edges in the generated graph.
        edges: usize,
    },
    /// One engine variant ran to completion.
    Computed(RunSummary),
    /// Both engine variants ran on the same input.
    Compared {
        /// Summary of the single-threaded run.
        single: RunSummary,
        /// Summary of the fork-join parallel run.
        parallel: RunSummary,
    },
}

/// Timing and result figures for one MST computation.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Human-readable variant label.
    pub variant: &'static str,
    /// Wall-clock time of the engine call alone (excludes file I/O).
    pub elapsed: Duration,
    /// Sum of the spanning tree's edge weights.
    pub total_weight: u64,
    /// Number of edges in the spanning tree.
    pub edge_count: usize,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when generation, graph I/O, or the MST engine fails.
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Generate(args) => {
            span.record("command", field::display("generate"));
            run_generate(args)
        }
        Command::Single(args) => {
            span.record("command", field::display("single"));
            run_engine(&args, Variant::Single).map(ExecutionSummary::Computed)
        }
        Command::Parallel(args) => {
            span.record("command", field::display("parallel"));
            run_engine(&args, Variant::Parallel).map(ExecutionSummary::Computed)
        }
        Command::Compare(args) => {
            span.record("command", field::display("compare"));
            let single = run_engine(&args, Variant::Single)?;
            let parallel = run_engine(&args, Variant::Parallel)?;
            Ok(ExecutionSummary::Compared { single, parallel })
        }
    }
}

/// Engine variant selected by a run command.
#[derive(Clone, Copy, Debug)]
enum Variant {
    Single,
    Parallel,
}

impl Variant {
    const fn label(self) -> &'static str {
        match self {
            Self::Single => "single-threaded",
            Self::Parallel => "multi-threaded",
        }
    }

    fn compute(self, graph: &Graph) -> Result<Graph, MstError> {
        match self {
            Self::Single => sequential_boruvka(graph),
            Self::Parallel => parallel_boruvka(graph),
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(args),
    fields(output = %args.output.display()),
)]
fn run_generate(args: GenerateArgs) -> Result<ExecutionSummary, CliError> {
    let mut rng = args.seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);

    let vertices = args
        .vertices
        .unwrap_or_else(|| rng.gen_range(VERTEX_COUNT_RANGE.0..=VERTEX_COUNT_RANGE.1));
    let edges = args
        .edges
        .unwrap_or_else(|| rng.gen_range(EDGE_COUNT_RANGE.0..=EDGE_COUNT_RANGE.1));

    let graph = random_connected_graph(&mut rng, vertices, edges)?;
    save_graph(&graph, &args.output)?;

    Ok(ExecutionSummary::Generated {
        path: args.output,
        vertices: graph.vertices().len(),
        edges: graph.edges().len(),
    })
}

#[instrument(
    name = "cli.compute",
    err,
    skip(args, variant),
    fields(variant = variant.label(), input = %args.input.display()),
)]
fn run_engine(args: &RunArgs, variant: Variant) -> Result<RunSummary, CliError> {
    let graph = load_graph(&args.input)?;

    info!(variant = variant.label(), "starting MST calculation");
    let started = Instant::now();
    let mst = variant.compute(&graph)?;
    let elapsed = started.elapsed();

    let total_weight = mst.edges().iter().map(Edge::weight).sum();
    save_graph(&mst, &args.output)?;

    let summary = RunSummary {
        variant: variant.label(),
        elapsed,
        total_weight,
        edge_count: mst.edges().len(),
    };
    info!(
        variant = summary.variant,
        elapsed_ms = u64::try_from(summary.elapsed.as_millis()).unwrap_or(u64::MAX),
        total_weight = summary.total_weight,
        "MST calculation finished"
    );
    Ok(summary)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Generated {
            path,
            vertices,
            edges,
        } => {
            writeln!(
                writer,
                "generated a connected graph with {vertices} vertices and {edges} edges"
            )?;
            writeln!(writer, "saved to {}", path.display())?;
        }
        ExecutionSummary::Computed(run) => render_run(run, &mut writer)?,
        ExecutionSummary::Compared { single, parallel } => {
            render_run(single, &mut writer)?;
            render_run(parallel, &mut writer)?;
            writeln!(writer, "{}", comparison_line(single, parallel))?;
        }
    }
    Ok(())
}

fn render_run(run: &RunSummary, writer: &mut impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "the {} MST calculation took {} ms",
        run.variant,
        run.elapsed.as_millis()
    )?;
    writeln!(
        writer,
        "the sum of edge weights is {} across {} edges",
        run.total_weight, run.edge_count
    )?;
    Ok(())
}

fn comparison_line(single: &RunSummary, parallel: &RunSummary) -> String {
    if single.elapsed == parallel.elapsed {
        return "both simulations took the same time".to_owned();
    }

    let (faster, slower, label) = if parallel.elapsed < single.elapsed {
        (parallel, single, "multi-threaded")
    } else {
        (single, parallel, "single-threaded")
    };

    let faster_secs = faster.elapsed.as_secs_f64();
    if faster_secs == 0.0 {
        return format!("the {label} simulation finished before the timer could resolve");
    }

    let coefficient = slower.elapsed.as_secs_f64() / faster_secs;
    format!("the {label} simulation was approximately {coefficient:.2}x faster!")
}
