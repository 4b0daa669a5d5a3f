//! Benchmark support crate for the Borůvka MST engine.
//!
//! Provides deterministic synthetic graph construction used by Criterion
//! benchmarks to compare the single-threaded and fork-join engine variants.

pub mod synthetic;
