//! Append-only collection with a minimum query.

use crate::domain::error::{DomainError, DomainResult};

/// Multiset over any totally ordered `T`; grows only, keeps insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinContainer<T> {
    elements: Vec<T>,
}

impl<T> Default for MinContainer<T> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}

impl<T: Ord> MinContainer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, element: T) {
        self.elements.push(element);
    }

    /// Smallest element by `T`'s ordering.
    ///
    /// Scans from the first element and only replaces the candidate on a strictly
    /// smaller one, so among equal minima the earliest added wins.
    ///
    /// # Errors
    /// [`DomainError::EmptyContainer`] if nothing was added.
    pub fn find_min(&self) -> DomainResult<&T> {
        let (first, rest) = self
            .elements
            .split_first()
            .ok_or(DomainError::EmptyContainer)?;

        let mut min = first;
        for element in rest {
            if element < min {
                min = element;
            }
        }
        Ok(min)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T: Ord> FromIterator<T> for MinContainer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T: Ord> Extend<T> for MinContainer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a MinContainer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
