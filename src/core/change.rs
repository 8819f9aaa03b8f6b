use thiserror::Error;

/// The surface's change bookkeeping went inconsistent while a batch was applied.
///
/// Always recovered by a full resync; never surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionFault {
    #[error("change window {from}..{to} does not fit a selection of {len} items")]
    IndexOutOfBounds { from: usize, to: usize, len: usize },
}

/// One entry of a change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent<T> {
    Added(Vec<T>),
    Removed(Vec<T>),
    /// Selected entries changed content in place; membership is untouched.
    Updated,
    /// Selection order changed; membership is untouched.
    Permuted,
    /// The surface's bookkeeping could not be turned into an Added/Removed entry.
    Malformed(SelectionFault),
}

impl<T: Clone> ChangeEvent<T> {
    /// Resolves an "added" window `from..to` against the selection snapshot it was reported for.
    ///
    /// A window that no longer fits the snapshot becomes `Malformed`. That happens on
    /// surfaces whose snapshot has moved on by the time the window is resolved.
    #[must_use]
    pub fn added_window(selection: &[T], from: usize, to: usize) -> Self {
        match selection.get(from..to) {
            Some(items) => Self::Added(items.to_vec()),
            None => Self::Malformed(SelectionFault::IndexOutOfBounds {
                from,
                to,
                len: selection.len(),
            }),
        }
    }
}

impl<T> ChangeEvent<T> {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Added(_) => "added",
            Self::Removed(_) => "removed",
            Self::Updated => "updated",
            Self::Permuted => "permuted",
            Self::Malformed(_) => "malformed",
        }
    }
}

/// The ordered entries delivered by a single change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeBatch<T> {
    pub events: Vec<ChangeEvent<T>>,
}

impl<T> ChangeBatch<T> {
    #[must_use]
    pub const fn new(events: Vec<ChangeEvent<T>>) -> Self {
        Self { events }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<T> From<Vec<ChangeEvent<T>>> for ChangeBatch<T> {
    fn from(events: Vec<ChangeEvent<T>>) -> Self {
        Self::new(events)
    }
}

impl<T> FromIterator<ChangeEvent<T>> for ChangeBatch<T> {
    fn from_iter<I: IntoIterator<Item = ChangeEvent<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a ChangeBatch<T> {
    type Item = &'a ChangeEvent<T>;
    type IntoIter = std::slice::Iter<'a, ChangeEvent<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
