//! Element-wise transforms, with and without a failure path.

use crate::error::{TransformError, TransformResult};

/// Apply `mapper` to every element, in order.
///
/// The output has the same length as the input. Empty input yields an empty
/// `Vec`; pass an absent `Option<Vec<T>>` as `opt.into_iter().flatten()`.
pub fn transform<I, U, F>(seq: I, mapper: F) -> Vec<U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    seq.into_iter().map(mapper).collect()
}

/// Like [`transform`], but `mapper` may fail.
///
/// Fail-fast: the first `Err` stops the walk (later elements are never passed
/// to `mapper`), the partial output is dropped, and the mapper's error is
/// returned together with the index of the failing element.
pub fn transform_with_error<I, U, E, F>(seq: I, mut mapper: F) -> TransformResult<U, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<U, E>,
{
    let iter = seq.into_iter();
    let mut out = Vec::with_capacity(iter.size_hint().0);

    for (index, item) in iter.enumerate() {
        match mapper(item) {
            Ok(u) => out.push(u),
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(index, produced = out.len(), "transform aborted");
                return Err(TransformError::new(index, error));
            }
        }
    }

    Ok(out)
}
