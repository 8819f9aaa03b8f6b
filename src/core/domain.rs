use std::hash::Hash;

use indexmap::IndexSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("candidate at index {index} repeats an earlier candidate")]
    Duplicate { index: usize },
}

/// The ordered, duplicate-free universe a selection is drawn from.
///
/// Fixed for the lifetime of a picker session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateDomain<T: Hash + Eq> {
    items: IndexSet<T>,
}

impl<T: Hash + Eq> CandidateDomain<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Result<Self, DomainError> {
        let mut set = IndexSet::new();
        for (index, item) in items.into_iter().enumerate() {
            if !set.insert(item) {
                return Err(DomainError::Duplicate { index });
            }
        }
        Ok(Self { items: set })
    }

    /// Builds a domain from items already known to be unique; later repeats are dropped.
    pub(crate) fn from_unique(items: Vec<T>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    #[must_use]
    pub fn position(&self, item: &T) -> Option<usize> {
        self.items.get_index_of(item)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get_index(index)
    }

    pub fn items(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.items.iter()
    }
}
