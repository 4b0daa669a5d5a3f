//! Random connected graph generation.
//!
//! Dimensions default to 300-500 vertices and 4000-6000 edges with weights
//! 1-100. Edge endpoints are drawn uniformly through `vertex_at`; a drawn
//! edge is rejected and redrawn while its endpoint pair is already taken.
//! When the finished graph is not connected the whole graph is thrown away
//! and regenerated.

use boruvka_core::{Edge, Graph, Vertex};
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

/// Inclusive sampling range for the random vertex count.
pub const VERTEX_COUNT_RANGE: (u64, u64) = (300, 500);
/// Inclusive sampling range for the random edge count.
pub const EDGE_COUNT_RANGE: (u64, u64) = (4_000, 6_000);
/// Inclusive range for random edge weights.
const WEIGHT_RANGE: (u64, u64) = (1, 100);

/// Errors raised while generating a random graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// A connected graph needs at least one vertex.
    #[error("cannot generate a graph with no vertices")]
    NoVertices,
    /// Fewer edges were requested than any connected graph on the vertex
    /// count can have, so regeneration could never produce a connected
    /// result.
    #[error("{edges} edges cannot connect {vertices} vertices")]
    TooFewEdges {
        /// Requested vertex count.
        vertices: u64,
        /// Requested edge count.
        edges: u64,
    },
    /// More unique endpoint pairs were requested than the vertex count
    /// admits, so edge placement could never finish.
    #[error("cannot place {edges} unique edges among {vertices} vertices")]
    TooManyEdges {
        /// Requested vertex count.
        vertices: u64,
        /// Requested edge count.
        edges: u64,
    },
}

/// Generates a connected random graph with `vertex_count` vertices labelled
/// `0..vertex_count` and `edge_count` unique undirected edges.
///
/// # Errors
/// Returns [`GenerateError::NoVertices`] for a zero vertex count,
/// [`GenerateError::TooFewEdges`] when `edge_count` is below the
/// `vertex_count - 1` connectivity minimum (either way the regenerate loop
/// could never terminate), and [`GenerateError::TooManyEdges`] when
/// `edge_count` exceeds the number of distinct endpoint pairs (self-loops
/// included, since the endpoint drawing admits them).
pub fn random_connected_graph(
    rng: &mut impl Rng,
    vertex_count: u64,
    edge_count: u64,
) -> Result<Graph, GenerateError> {
    if vertex_count == 0 {
        return Err(GenerateError::NoVertices);
    }
    if edge_count < vertex_count - 1 {
        return Err(GenerateError::TooFewEdges {
            vertices: vertex_count,
            edges: edge_count,
        });
    }
    let capacity = vertex_count
        .saturating_mul(vertex_count.saturating_add(1))
        .saturating_div(2);
    if edge_count > capacity {
        return Err(GenerateError::TooManyEdges {
            vertices: vertex_count,
            edges: edge_count,
        });
    }

    let mut attempt = 0u32;
    loop {
        attempt += 1;
        let graph = place_random_edges(rng, vertex_count, edge_count);
        if graph.is_connected() {
            info!(
                vertices = vertex_count,
                edges = edge_count,
                attempt,
                "generated connected graph"
            );
            return Ok(graph);
        }
        debug!(attempt, "generated graph is not connected; regenerating");
    }
}

fn place_random_edges(rng: &mut impl Rng, vertex_count: u64, edge_count: u64) -> Graph {
    let mut graph = Graph::new();
    for vertex in 0..vertex_count {
        graph.add_vertex(vertex);
    }

    for _ in 0..edge_count {
        loop {
            let Some(start) = random_vertex(rng, &graph, vertex_count) else {
                break;
            };
            let Some(end) = random_vertex(rng, &graph, vertex_count) else {
                break;
            };
            let weight = rng.gen_range(WEIGHT_RANGE.0..=WEIGHT_RANGE.1);
            let edge = Edge::new(start, end, weight);
            if !has_endpoint_pair(&graph, &edge) {
                graph.add_edge(edge);
                break;
            }
        }
    }

    graph
}

fn random_vertex(rng: &mut impl Rng, graph: &Graph, vertex_count: u64) -> Option<Vertex> {
    let index = rng.gen_range(0..vertex_count);
    graph.vertex_at(usize::try_from(index).ok()?)
}

/// Endpoint-pair membership regardless of weight, so two weights between the
/// same pair can never both be placed.
fn has_endpoint_pair(graph: &Graph, candidate: &Edge) -> bool {
    graph.edges().iter().any(|stored| {
        (stored.start() == candidate.start() && stored.end() == candidate.end())
            || (stored.start() == candidate.end() && stored.end() == candidate.start())
    })
}
