//! Fold-style derivations: scan a sequence to derive a single insight from it.
//!
//! The accumulator is seeded with the first element rather than a default, so
//! `combine` never needs an identity value (`max` over all-negative input
//! returns the largest negative, not zero).
//!
//! Seeding rule:
//! - 0 elements: `T::default()`, `combine` not called.
//! - 1 element: that element, `combine` not called.
//! - n >= 2: `acc = e0`, then `acc = combine(e_i, acc)` for `i = 1..n`.

use crate::ordered::Ordered;

/// Left-fold `seq` with `combine(current, accumulated) -> accumulated`.
pub fn derive<I, T, F>(seq: I, combine: F) -> T
where
    I: IntoIterator<Item = T>,
    T: Default,
    F: FnMut(T, T) -> T,
{
    derive_with(seq, Some(combine))
}

/// [`derive`] with an optional combiner.
///
/// A missing combiner degrades to "nothing computed": the result is
/// `T::default()` for every input, and the sequence is never iterated.
pub fn derive_with<I, T, F>(seq: I, combine: Option<F>) -> T
where
    I: IntoIterator<Item = T>,
    T: Default,
    F: FnMut(T, T) -> T,
{
    let Some(mut combine) = combine else {
        #[cfg(feature = "tracing")]
        tracing::trace!("derive called without a combiner; returning default");
        return T::default();
    };

    let mut iter = seq.into_iter();
    let Some(first) = iter.next() else {
        return T::default();
    };

    iter.fold(first, |acc, current| combine(current, acc))
}

/// Greatest element; ties keep the earlier one. Empty input gives the default.
///
/// Only comparison is needed, so borrowed items such as `&str` work too.
pub fn max<I, T>(seq: I) -> T
where
    I: IntoIterator<Item = T>,
    T: PartialOrd + Default,
{
    derive(seq, |current, max| if current > max { current } else { max })
}

/// Least element; ties keep the earlier one. Empty input gives the default.
pub fn min<I, T>(seq: I) -> T
where
    I: IntoIterator<Item = T>,
    T: PartialOrd + Default,
{
    derive(seq, |current, min| if current < min { current } else { min })
}

/// Sum of numbers, or in-order concatenation of strings.
pub fn sum<I, T>(seq: I) -> T
where
    I: IntoIterator<Item = T>,
    T: Ordered,
{
    derive(seq, |current, sum: T| sum.plus(current))
}

/// `max` over a literal argument list.
///
/// Only comparison is needed, so `&str` literals work as-is. [`sum_params!`]
/// differs: it concatenates, so text must be `String`.
///
/// ```
/// assert_eq!(collkit_seq::max_params!(3, 9, 4), 9);
/// assert_eq!(collkit_seq::max_params!("abc", "xyz", "mno"), "xyz");
/// ```
#[macro_export]
macro_rules! max_params {
    ($($item:expr),* $(,)?) => {
        $crate::derive::max([$($item),*])
    };
}

/// `min` over a literal argument list.
#[macro_export]
macro_rules! min_params {
    ($($item:expr),* $(,)?) => {
        $crate::derive::min([$($item),*])
    };
}

/// `sum` over a literal argument list. Items must be [`Ordered`](crate::Ordered),
/// so text is passed as `String`; `&str` literals are rejected at compile time
/// because concatenation needs an owned buffer.
///
/// ```
/// assert_eq!(collkit_seq::sum_params!(-40, 60, 3), 23);
/// assert_eq!(
///     collkit_seq::sum_params!(String::from("ab"), String::from("cd")),
///     "abcd"
/// );
/// ```
///
/// ```compile_fail
/// let _ = collkit_seq::sum_params!("ab", "cd");
/// ```
#[macro_export]
macro_rules! sum_params {
    ($($item:expr),* $(,)?) => {
        $crate::derive::sum([$($item),*])
    };
}
