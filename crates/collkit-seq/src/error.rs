use thiserror::Error;

/// Result of [`transform_with_error`](crate::map::transform_with_error).
pub type TransformResult<U, E> = std::result::Result<Vec<U>, TransformError<E>>;

/// The mapper reported a failure; the whole transform was abandoned.
///
/// The caller's error value is carried unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("element {index} failed to transform: {error}")]
pub struct TransformError<E> {
    index: usize,
    error: E,
}

impl<E> TransformError<E> {
    pub fn new(index: usize, error: E) -> Self {
        Self { index, error }
    }

    /// Position of the element the mapper rejected.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn error(&self) -> &E {
        &self.error
    }

    pub fn into_inner(self) -> E {
        self.error
    }
}
