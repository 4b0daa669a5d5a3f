//! Weighted undirected graph primitives.
//!
//! A [`Graph`] is a deduplicated set of vertices and a deduplicated set of
//! edges. Adjacency and component views are derived on demand and never
//! cached, so each caller works against a fresh snapshot of the edge set.

mod components;

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Opaque vertex identifier. Identifiers are assigned by the caller and are
/// never reused or renumbered by the engine.
pub type Vertex = u64;

/// A maximal set of vertices mutually reachable via a graph's own edges.
pub type Component = BTreeSet<Vertex>;

/// Derived adjacency view: each vertex maps to every edge touching it by
/// either endpoint, so an edge appears in both endpoints' lists.
pub type AdjacencyMap = BTreeMap<Vertex, Vec<Edge>>;

/// An immutable weighted, undirected connection between two vertices.
///
/// Two distinct relations exist on edges and both are load-bearing:
///
/// - `Ord` is the strict total order on the stored `(weight, start, end)`
///   tuple. It is the single tie-break authority for every "cheapest edge"
///   decision, so edges with equal weight but different stored endpoints
///   never compare equal.
/// - [`Edge::eq_undirected`] is the looser duplicate relation: weights match
///   and the endpoint *sets* match regardless of orientation. [`Graph`] uses
///   it to keep the edge set free of undirected duplicates.
///
/// `PartialEq`/`Eq` are structural so they stay consistent with `Ord`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Edge {
    start: Vertex,
    end: Vertex,
    weight: u64,
}

impl Edge {
    /// Creates an edge between `start` and `end` with the given weight.
    #[must_use]
    pub const fn new(start: Vertex, end: Vertex, weight: u64) -> Self {
        Self { start, end, weight }
    }

    /// Returns the stored start vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn start(&self) -> Vertex { self.start }

    /// Returns the stored end vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn end(&self) -> Vertex { self.end }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> u64 { self.weight }

    /// Returns `true` when `other` describes the same undirected connection:
    /// equal weights and equal endpoint sets, in either orientation.
    #[must_use]
    pub const fn eq_undirected(&self, other: &Self) -> bool {
        self.weight == other.weight
            && ((self.start == other.start && self.end == other.end)
                || (self.start == other.end && self.end == other.start))
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.start.cmp(&other.start))
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A set of vertices and a set of undirected weighted edges.
///
/// Vertices and edges are stored in ordered sets, so iteration order is
/// deterministic: vertices ascend by identifier and edges ascend by the
/// `(weight, start, end)` tuple order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Graph {
    vertices: BTreeSet<Vertex>,
    edges: BTreeSet<Edge>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `vertex` into the vertex set. Returns `true` when the vertex
    /// was not already present.
    pub fn add_vertex(&mut self, vertex: Vertex) -> bool {
        self.vertices.insert(vertex)
    }

    /// Inserts `edge` into the edge set. Returns `true` when the edge was
    /// added.
    ///
    /// Insertion is idempotent under the undirected relation: an edge equal
    /// to a stored edge by [`Edge::eq_undirected`] (in either orientation)
    /// leaves the set unchanged.
    pub fn add_edge(&mut self, edge: Edge) -> bool {
        if self.has_edge(&edge) {
            return false;
        }
        self.edges.insert(edge)
    }

    /// Returns `true` when an edge equal to `edge` under
    /// [`Edge::eq_undirected`] is stored. Linear scan over the edge set.
    #[must_use]
    pub fn has_edge(&self, edge: &Edge) -> bool {
        self.edges.iter().any(|stored| stored.eq_undirected(edge))
    }

    /// Returns the vertex set.
    #[must_use]
    pub const fn vertices(&self) -> &BTreeSet<Vertex> {
        &self.vertices
    }

    /// Returns the edge set.
    #[must_use]
    pub const fn edges(&self) -> &BTreeSet<Edge> {
        &self.edges
    }

    /// Returns the vertex at `index` within the ascending vertex-set
    /// iteration, or `None` when the index is out of range.
    #[must_use]
    pub fn vertex_at(&self, index: usize) -> Option<Vertex> {
        self.vertices.iter().nth(index).copied()
    }

    /// Builds a fresh adjacency map over the current edge set.
    ///
    /// Every vertex appears in the map, isolated vertices with an empty
    /// list. Each edge is listed under both of its endpoints (once under a
    /// single endpoint for self-loops).
    #[must_use]
    pub fn adjacency_map(&self) -> AdjacencyMap {
        let mut map: AdjacencyMap = self
            .vertices
            .iter()
            .map(|&vertex| (vertex, Vec::new()))
            .collect();

        for &edge in &self.edges {
            map.entry(edge.start).or_default().push(edge);
            if edge.end != edge.start {
                map.entry(edge.end).or_default().push(edge);
            }
        }

        map
    }

    /// Returns `true` when the graph consists of exactly one component.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.components().len() == 1
    }
}
