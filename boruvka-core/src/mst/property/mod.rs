//! Property-based tests for the Borůvka engine.
//!
//! Verifies both engine variants against a trusted sequential Kruskal
//! reference and against each other, across connected, tie-heavy, and
//! disconnected topologies. Because every cheapest-edge decision uses the
//! strict `(weight, start, end)` order, the spanning tree is unique and the
//! comparison can be edge-for-edge rather than weight-only.

mod equivalence;
mod oracle;
mod strategies;
