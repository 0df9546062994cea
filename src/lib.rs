#![forbid(unsafe_code)]
//! collkit: generic helpers over homogeneous sequences.
//!
//! Two independent pieces, re-exported here:
//! - `collkit-seq`: `filter`, `transform`, `transform_with_error`, and the
//!   fold-style derivations `derive`, `max`, `min`, `sum`.
//! - `collkit-set`: [`Set`], a mathematical set with in-place union/intersection.
//!
//! Cargo features: `tracing` (debug/trace events), `serde` (serialize `Set`).

pub use collkit_seq::{
    derive, derive_with, filter, max, max_params, min, min_params, sum, sum_params, transform,
    transform_with_error, Ordered, TransformError, TransformResult,
};
pub use collkit_set::{set, Set};

pub mod prelude;
