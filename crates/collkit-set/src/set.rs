//! `Set<T>` and the `set!` constructor.

use std::borrow::Borrow;
use std::collections::hash_set::{self, HashSet};
use std::fmt;
use std::hash::Hash;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unordered collection of unique elements.
///
/// Presence in the backing hash set is the only signal; there is no payload.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        transparent,
        bound(
            serialize = "T: serde::Serialize",
            deserialize = "T: serde::Deserialize<'de> + Eq + std::hash::Hash"
        )
    )
)]
pub struct Set<T: Eq + Hash> {
    items: HashSet<T>,
}

impl<T: Eq + Hash> Set<T> {
    pub fn new() -> Self {
        Self {
            items: HashSet::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: HashSet::with_capacity(capacity),
        }
    }

    /// True iff no elements are in the set.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of unique elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Insert every element; ones already present are no-ops.
    pub fn add<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(elements);
    }

    /// Insert one element, returning whether it was newly added.
    pub fn insert(&mut self, element: T) -> bool {
        self.items.insert(element)
    }

    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.items.contains(element)
    }

    /// True iff *every* queried element is present. An empty query is
    /// vacuously true.
    pub fn contains_all<'a, Q, I>(&self, elements: I) -> bool
    where
        I: IntoIterator<Item = &'a Q>,
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized + 'a,
    {
        elements.into_iter().all(|e| self.items.contains(e))
    }

    /// Remove one element, returning whether it was present.
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.items.remove(element)
    }

    /// Remove every given element that is present.
    pub fn remove_all<'a, Q, I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = &'a Q>,
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized + 'a,
    {
        for e in elements {
            self.items.remove(e);
        }
    }

    /// Set union, in place. `other` is untouched.
    pub fn add_all(&mut self, other: &Set<T>)
    where
        T: Clone,
    {
        #[cfg(feature = "tracing")]
        let before = self.len();

        self.items.extend(other.items.iter().cloned());

        #[cfg(feature = "tracing")]
        tracing::trace!(before, after = self.len(), other = other.len(), "set union");
    }

    /// Set intersection, in place: drop everything `other` lacks.
    pub fn keep_only(&mut self, other: &Set<T>) {
        #[cfg(feature = "tracing")]
        let before = self.len();

        self.items.retain(|e| other.items.contains(e));

        #[cfg(feature = "tracing")]
        tracing::trace!(before, after = self.len(), other = other.len(), "set intersection");
    }

    /// Snapshot of the elements, in unspecified order. Mutating the returned
    /// `Vec` does not affect the set.
    pub fn elements(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().cloned().collect()
    }

    /// Visit every element once, in unspecified order.
    pub fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&T),
    {
        self.items.iter().for_each(visitor);
    }

    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.items.iter()
    }
}

impl Set<String> {
    /// Build a `Set<String>` from string slices (the common case).
    pub fn from_strs<'a, I>(elements: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        elements.into_iter().map(str::to_owned).collect()
    }
}

impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for Set<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Eq + Hash> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Build a [`Set`] from a list of elements; duplicates collapse.
///
/// ```
/// let s = collkit_set::set!["a", "a", "b"];
/// assert_eq!(s.len(), 2);
/// ```
#[macro_export]
macro_rules! set {
    ($($item:expr),* $(,)?) => {
        $crate::Set::from([$($item),*])
    };
}
