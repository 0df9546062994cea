//! Convenient re-exports for downstream crates.
//!
//! The everyday operations only; error types, `derive_with` and the
//! `*_params!` macros are imported from the crate root.

pub use collkit_seq::{derive, filter, max, min, sum, transform, transform_with_error};
pub use collkit_set::Set;
