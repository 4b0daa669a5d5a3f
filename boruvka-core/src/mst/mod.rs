//! Borůvka minimum spanning tree engine.
//!
//! Both entry points drive the same convergence loop: each round finds the
//! cheapest edge leaving every component of the MST built so far, adds the
//! chosen edges, and recomputes the component partition, until a single
//! component remains. A round that fails to reduce the component count means
//! the input is not connected and the computation aborts with
//! [`MstError::NoSpanningTree`].
//!
//! The parallel variant fans the per-component searches (and component
//! discovery itself) out over rayon tasks. Tasks only read the round's
//! adjacency map and component index; the per-round `collect` is the join
//! barrier, after which the calling thread alone mutates the output graph.
//! That read-snapshot/write-barrier split keeps the rounds race-free without
//! locks and makes the parallel result identical to the sequential one.

use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::graph::{AdjacencyMap, Component, Edge, Graph, Vertex};

/// Errors returned while computing a minimum spanning tree.
#[derive(Clone, Debug, Eq, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum MstError {
    /// A full round reduced no components, so no spanning tree exists for
    /// the input graph.
    #[error("no spanning tree exists: component count stalled at {component_count}")]
    NoSpanningTree {
        /// Component count at which the convergence loop stalled.
        component_count: usize,
    },
}

impl MstError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> MstErrorCode {
        match self {
            Self::NoSpanningTree { .. } => MstErrorCode::NoSpanningTree,
        }
    }
}

/// Machine-readable error codes for [`MstError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MstErrorCode {
    /// A full round reduced no components.
    NoSpanningTree,
}

impl MstErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoSpanningTree => "NO_SPANNING_TREE",
        }
    }
}

/// Selects how each Borůvka round executes its independent work items.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExecutionMode {
    /// A single thread throughout.
    Sequential,
    /// Fork-join rayon tasks within each round, joined before any mutation.
    Parallel,
}

/// Computes the minimum spanning tree of `graph` on the calling thread only.
///
/// The result contains the same vertex set as the input and, for a connected
/// input with `V` vertices, exactly `V - 1` edges.
///
/// # Errors
/// Returns [`MstError::NoSpanningTree`] when the input graph is not
/// connected.
pub fn sequential_boruvka(graph: &Graph) -> Result<Graph, MstError> {
    minimum_spanning_tree(graph, ExecutionMode::Sequential)
}

/// Computes the minimum spanning tree of `graph`, fanning each round's
/// component searches out over the rayon thread pool.
///
/// Produces the identical edge set and weight sum as [`sequential_boruvka`]
/// for any input; only the wall-clock cost differs.
///
/// # Errors
/// Returns [`MstError::NoSpanningTree`] when the input graph is not
/// connected.
pub fn parallel_boruvka(graph: &Graph) -> Result<Graph, MstError> {
    minimum_spanning_tree(graph, ExecutionMode::Parallel)
}

/// Computes the minimum spanning tree of `graph` under `mode`.
///
/// # Errors
/// Returns [`MstError::NoSpanningTree`] when the input graph is not
/// connected.
#[instrument(
    level = "debug",
    skip(graph),
    fields(vertices = graph.vertices().len(), edges = graph.edges().len()),
)]
pub fn minimum_spanning_tree(graph: &Graph, mode: ExecutionMode) -> Result<Graph, MstError> {
    let mut mst = Graph::new();
    for &vertex in graph.vertices() {
        mst.add_vertex(vertex);
    }

    // Candidate edges always come from the input graph; this snapshot stays
    // fixed for the whole computation while the partition of `mst` evolves.
    let adjacency = graph.adjacency_map();

    let mut components = partition(&mst, mode);
    let mut component_of = index_by_vertex(&components);
    let mut previous_count = 0usize;
    let mut round = 0u32;

    while components.len() > 1 {
        if components.len() == previous_count {
            return Err(MstError::NoSpanningTree {
                component_count: components.len(),
            });
        }
        previous_count = components.len();
        round += 1;

        let chosen: Vec<Option<Edge>> = match mode {
            ExecutionMode::Sequential => components
                .iter()
                .map(|component| cheapest_cross_edge(component, &adjacency, &component_of))
                .collect(),
            ExecutionMode::Parallel => components
                .par_iter()
                .map(|component| cheapest_cross_edge(component, &adjacency, &component_of))
                .collect(),
        };

        // Join barrier passed: all tasks are done, mutation happens here and
        // only here. Two components may have chosen the same physical edge,
        // so insertion must be idempotent.
        let mut added = 0usize;
        for edge in chosen.into_iter().flatten() {
            if mst.add_edge(edge) {
                added += 1;
            }
        }
        debug!(
            round,
            components = components.len(),
            added,
            "borůvka round complete"
        );

        components = partition(&mst, mode);
        component_of = index_by_vertex(&components);
    }

    Ok(mst)
}

/// Discovers the current component partition of `mst` under `mode`.
///
/// The discovered set-of-sets is flattened into a vector; `BTreeSet`
/// iteration keeps the order deterministic for both modes.
fn partition(mst: &Graph, mode: ExecutionMode) -> Vec<Component> {
    let discovered = match mode {
        ExecutionMode::Sequential => mst.components(),
        ExecutionMode::Parallel => mst.components_parallel(),
    };
    discovered.into_iter().collect()
}

/// Builds the reverse index from each vertex to the position of its
/// component within the partition.
fn index_by_vertex(components: &[Component]) -> BTreeMap<Vertex, usize> {
    let mut index = BTreeMap::new();
    for (position, component) in components.iter().enumerate() {
        for &vertex in component {
            index.insert(vertex, position);
        }
    }
    index
}

/// Finds the component's cheapest edge whose far endpoint lies in a
/// different component, or `None` when no such edge exists.
///
/// Scans every vertex of the component through the input graph's adjacency
/// map and skips edges whose endpoints share a component. Ties are settled
/// by the `(weight, start, end)` edge order, so the result is independent of
/// vertex iteration order.
fn cheapest_cross_edge(
    component: &Component,
    adjacency: &AdjacencyMap,
    component_of: &BTreeMap<Vertex, usize>,
) -> Option<Edge> {
    let mut cheapest: Option<Edge> = None;

    for vertex in component {
        let Some(incident) = adjacency.get(vertex) else {
            continue;
        };
        for &edge in incident {
            if component_of.get(&edge.start()) == component_of.get(&edge.end()) {
                continue;
            }
            if cheapest.is_none_or(|current| edge < current) {
                cheapest = Some(edge);
            }
        }
    }

    cheapest
}

#[cfg(test)]
mod property;
