//! Borůvka minimum spanning tree engine, sequential and fork-join parallel.
//!
//! The crate owns the graph representation, connected-component discovery,
//! and the Borůvka convergence loop in its two concurrency strategies. Both
//! strategies produce the identical spanning tree for any input. Random graph
//! generation, the on-disk adjacency-list format, and the command-line front
//! end are external collaborators and live in the companion CLI crate.

mod graph;
mod mst;

pub use crate::{
    graph::{AdjacencyMap, Component, Edge, Graph, Vertex},
    mst::{
        ExecutionMode, MstError, MstErrorCode, minimum_spanning_tree, parallel_boruvka,
        sequential_boruvka,
    },
};
