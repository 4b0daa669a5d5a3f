//! Support library for the boruvka CLI binary.
//!
//! Re-exports the command pipeline, graph persistence, and generation
//! helpers so doctests and integration tests can exercise them without
//! forking a subprocess.

pub mod cli;
pub mod generate;
pub mod graph_io;
pub mod logging;
