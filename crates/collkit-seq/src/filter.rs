//! Order-preserving filter over any sequence.

/// Keep exactly the elements for which `pred` returns true.
///
/// Relative order and multiplicity are preserved. An empty sequence yields an
/// empty `Vec`; pass an absent `Option<Vec<T>>` as `opt.into_iter().flatten()`.
pub fn filter<I, P>(seq: I, mut pred: P) -> Vec<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut kept = Vec::new();
    for item in seq {
        if pred(&item) {
            kept.push(item);
        }
    }
    kept
}
