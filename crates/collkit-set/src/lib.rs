#![forbid(unsafe_code)]
//! collkit-set: a mathematical set over a presence map.
//!
//! Named operations (`add_all`, `keep_only`, `contains_all`, ...) make the
//! intent clearer than raw map/set calls. Enumeration order is unspecified.
//!
//! Not synchronized: mutators take `&mut self`, so sharing a set between
//! threads that write to it needs an external lock.

pub mod set;

pub use set::Set;
