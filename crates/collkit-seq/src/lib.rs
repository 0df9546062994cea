#![forbid(unsafe_code)]
//! collkit-seq: element-wise filtering/mapping and fold-style derivations.
//!
//! Design intent:
//! - Everything here is a free function over `IntoIterator`, so slices, `Vec`s,
//!   arrays and iterators all work.
//! - An absent sequence is passed as an empty one: `opt.into_iter().flatten()`
//!   for an `Option<Vec<T>>`, `opt.unwrap_or(&[])` for an `Option<&[T]>`, or
//!   `std::iter::empty()`. Passing the `Option` itself would iterate over the
//!   `Vec`, not its elements.
//! - No operation mutates its input; new `Vec`s are produced.
//! - `transform_with_error` is the only fallible operation and fails fast.

pub mod derive;
pub mod error;
pub mod filter;
pub mod map;
pub mod ordered;

pub use derive::{derive, derive_with, max, min, sum};
pub use error::{TransformError, TransformResult};
pub use filter::filter;
pub use map::{transform, transform_with_error};
pub use ordered::Ordered;
