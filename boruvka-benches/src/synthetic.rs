//! Deterministic synthetic graph construction for benchmarks.
//!
//! Graphs are built from a shuffled spanning chain plus extra random edges,
//! so every generated graph is connected by construction and a fixed seed
//! reproduces the same graph across runs.

use boruvka_core::{Edge, Graph};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Inclusive range for synthetic edge weights.
const WEIGHT_RANGE: (u64, u64) = (1, 100);

/// Parameters for synthetic graph construction.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticConfig {
    /// Number of vertices in the generated graph.
    pub vertex_count: u64,
    /// Number of random edges added on top of the spanning chain.
    pub extra_edge_count: usize,
    /// Seed for the deterministic generator.
    pub seed: u64,
}

/// Errors raised while building a synthetic graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BenchSetupError {
    /// A spanning chain needs at least one vertex to anchor it.
    #[error("synthetic graphs need at least one vertex")]
    EmptyGraph,
}

/// Builds a connected graph from `config`.
///
/// Vertices are labelled `0..vertex_count`. A spanning chain over a shuffled
/// vertex order guarantees connectivity; `extra_edge_count` further draws add
/// density. Extra draws that duplicate an existing undirected edge are
/// dropped rather than redrawn, so the final edge count may fall short of
/// the requested total.
///
/// # Errors
/// Returns [`BenchSetupError::EmptyGraph`] when `vertex_count` is zero.
pub fn connected_graph(config: &SyntheticConfig) -> Result<Graph, BenchSetupError> {
    if config.vertex_count == 0 {
        return Err(BenchSetupError::EmptyGraph);
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut graph = Graph::new();
    for vertex in 0..config.vertex_count {
        graph.add_vertex(vertex);
    }

    let mut order: Vec<u64> = (0..config.vertex_count).collect();
    order.shuffle(&mut rng);
    for pair in order.windows(2) {
        let &[start, end] = pair else { continue };
        let weight = rng.gen_range(WEIGHT_RANGE.0..=WEIGHT_RANGE.1);
        graph.add_edge(Edge::new(start, end, weight));
    }

    for _ in 0..config.extra_edge_count {
        let start = rng.gen_range(0..config.vertex_count);
        let end = rng.gen_range(0..config.vertex_count);
        let weight = rng.gen_range(WEIGHT_RANGE.0..=WEIGHT_RANGE.1);
        graph.add_edge(Edge::new(start, end, weight));
    }

    Ok(graph)
}
