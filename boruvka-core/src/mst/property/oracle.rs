//! Sequential Kruskal reference for engine verification.
//!
//! A simple, trusted union-find Kruskal that consumes the graph's edge set
//! in its natural `(weight, start, end)` order — the same order the engine
//! uses for tie-breaks — so the reference selects exactly the edges the
//! engine must select.

use std::collections::{BTreeMap, BTreeSet};

use crate::graph::{Edge, Graph, Vertex};

/// Result of the Kruskal reference run.
#[derive(Clone, Debug)]
pub(super) struct KruskalResult {
    /// Edges accepted into the spanning forest.
    pub edges: BTreeSet<Edge>,
    /// Total weight of the accepted edges.
    pub total_weight: u64,
    /// Connected components remaining after the run.
    pub component_count: usize,
}

/// Computes a minimum spanning forest of `graph` with sequential Kruskal.
pub(super) fn kruskal_reference(graph: &Graph) -> KruskalResult {
    let positions: BTreeMap<Vertex, usize> = graph
        .vertices()
        .iter()
        .enumerate()
        .map(|(position, &vertex)| (vertex, position))
        .collect();

    let mut parent: Vec<usize> = (0..positions.len()).collect();
    let mut rank: Vec<usize> = vec![0; positions.len()];
    let mut accepted = BTreeSet::new();
    let mut total_weight = 0u64;
    let mut component_count = positions.len();

    for &edge in graph.edges() {
        let (Some(&left), Some(&right)) =
            (positions.get(&edge.start()), positions.get(&edge.end()))
        else {
            continue;
        };
        let left_root = find_root(&mut parent, left);
        let right_root = find_root(&mut parent, right);
        if left_root == right_root {
            continue;
        }
        union_by_rank(&mut parent, &mut rank, left_root, right_root);
        accepted.insert(edge);
        total_weight += edge.weight();
        component_count -= 1;
    }

    KruskalResult {
        edges: accepted,
        total_weight,
        component_count,
    }
}

/// Root lookup with path halving.
fn find_root(parent: &mut [usize], node: usize) -> usize {
    let mut current = node;
    while parent[current] != current {
        parent[current] = parent[parent[current]];
        current = parent[current];
    }
    current
}

/// Union by rank, smaller root index winning ties.
fn union_by_rank(parent: &mut [usize], rank: &mut [usize], left: usize, right: usize) {
    let (root, child) = match rank[left].cmp(&rank[right]) {
        std::cmp::Ordering::Greater => (left, right),
        std::cmp::Ordering::Less => (right, left),
        std::cmp::Ordering::Equal if left <= right => (left, right),
        std::cmp::Ordering::Equal => (right, left),
    };
    parent[child] = root;
    if rank[root] == rank[child] {
        rank[root] += 1;
    }
}
