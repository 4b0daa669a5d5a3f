//! Property: both engine variants agree with the Kruskal reference.
//!
//! For connected fixtures the sequential and parallel engines must return
//! the identical edge set, the reference edge set, the reference weight, and
//! `V - 1` edges. For disconnected fixtures both variants must fail with the
//! no-spanning-tree error rather than hang or return a partial forest.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::graph::{Edge, Graph};
use crate::mst::{MstError, parallel_boruvka, sequential_boruvka};

use super::oracle::kruskal_reference;
use super::strategies::GraphFixture;

pub(super) fn run_engine_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let reference = kruskal_reference(&fixture.graph);

    if reference.component_count == 1 {
        let sequential = spanning_tree(&fixture.graph, sequential_boruvka, "sequential", fixture)?;
        let parallel = spanning_tree(&fixture.graph, parallel_boruvka, "parallel", fixture)?;

        ensure(
            sequential == parallel,
            "sequential and parallel trees differ",
            fixture,
        )?;
        ensure(
            sequential.edges() == &reference.edges,
            "engine edge set differs from Kruskal reference",
            fixture,
        )?;
        ensure(
            total_weight(&sequential) == reference.total_weight,
            "engine weight differs from Kruskal reference",
            fixture,
        )?;
        ensure(
            sequential.edges().len() == fixture.graph.vertices().len().saturating_sub(1),
            "spanning tree does not have V - 1 edges",
            fixture,
        )?;
        ensure(
            sequential.vertices() == fixture.graph.vertices(),
            "spanning tree vertex set differs from input",
            fixture,
        )?;
    } else {
        expect_no_spanning_tree(&fixture.graph, sequential_boruvka, "sequential", fixture)?;
        expect_no_spanning_tree(&fixture.graph, parallel_boruvka, "parallel", fixture)?;
    }

    Ok(())
}

fn spanning_tree(
    graph: &Graph,
    engine: fn(&Graph) -> Result<Graph, MstError>,
    variant: &str,
    fixture: &GraphFixture,
) -> Result<Graph, TestCaseError> {
    engine(graph).map_err(|error| {
        TestCaseError::fail(format!(
            "{variant} engine failed on connected input: {error} \
             (topology={:?}, vertices={}, edges={})",
            fixture.topology,
            fixture.graph.vertices().len(),
            fixture.graph.edges().len(),
        ))
    })
}

fn expect_no_spanning_tree(
    graph: &Graph,
    engine: fn(&Graph) -> Result<Graph, MstError>,
    variant: &str,
    fixture: &GraphFixture,
) -> TestCaseResult {
    match engine(graph) {
        Err(MstError::NoSpanningTree { .. }) => Ok(()),
        other => Err(TestCaseError::fail(format!(
            "{variant} engine did not report NoSpanningTree on disconnected \
             input: got {other:?} (topology={:?}, vertices={}, edges={})",
            fixture.topology,
            fixture.graph.vertices().len(),
            fixture.graph.edges().len(),
        ))),
    }
}

fn ensure(condition: bool, message: &str, fixture: &GraphFixture) -> TestCaseResult {
    if condition {
        Ok(())
    } else {
        Err(TestCaseError::fail(format!(
            "{message} (topology={:?}, vertices={}, edges={})",
            fixture.topology,
            fixture.graph.vertices().len(),
            fixture.graph.edges().len(),
        )))
    }
}

fn total_weight(graph: &Graph) -> u64 {
    graph.edges().iter().map(Edge::weight).sum()
}
