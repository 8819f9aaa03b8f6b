use std::{fmt, hash::Hash};

use indexmap::IndexSet;

use super::{CandidateDomain, ChangeBatch, ChangeEvent, SelectionFault, SelectionSurface};

/// The authoritative chosen items. Iterates in insertion order.
pub type ChosenSet<T> = IndexSet<T>;

/// What happened while a batch was applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Events applied incrementally.
    pub applied: usize,
    /// Events left unapplied because a resync already covered them.
    pub skipped: usize,
    /// The fault that forced a resync, if any.
    pub fault: Option<SelectionFault>,
}

impl BatchOutcome {
    #[must_use]
    pub const fn resynced(&self) -> bool {
        self.fault.is_some()
    }
}

/// Keeps a [`ChosenSet`] equal to what a selection surface reports as selected.
///
/// Batches are applied incrementally. The first `Malformed` entry drops
/// incremental state and rebuilds the set from the surface's full current selection.
#[derive(Debug, Clone)]
pub struct SelectionSetSynchronizer<T: Hash + Eq> {
    domain: CandidateDomain<T>,
    chosen: ChosenSet<T>,
}

impl<T> SelectionSetSynchronizer<T>
where
    T: Hash + Eq + Clone + fmt::Debug,
{
    /// An empty synchronizer over `domain`. Nothing is marked on any surface.
    #[must_use]
    pub fn new(domain: CandidateDomain<T>) -> Self {
        Self {
            domain,
            chosen: ChosenSet::new(),
        }
    }

    /// Marks every seed item selected on `surface` and adopts the seed as the chosen set.
    ///
    /// The seed must be drawn from the surface's candidates; this is not checked.
    pub fn initialize<S>(seed: impl IntoIterator<Item = T>, surface: &mut S) -> Self
    where
        S: SelectionSurface<T> + ?Sized,
    {
        let chosen: ChosenSet<T> = seed.into_iter().collect();
        for item in &chosen {
            surface.select(item);
        }
        tracing::debug!(seeded = chosen.len(), "selection synchronizer initialized");
        Self {
            domain: surface.candidates().clone(),
            chosen,
        }
    }

    #[must_use]
    pub const fn chosen(&self) -> &ChosenSet<T> {
        &self.chosen
    }

    #[must_use]
    pub fn into_chosen(self) -> ChosenSet<T> {
        self.chosen
    }

    #[must_use]
    pub const fn domain(&self) -> &CandidateDomain<T> {
        &self.domain
    }

    /// Applies every event of `batch` in delivery order.
    ///
    /// `current` is the surface's full selection at the time the batch is handled.
    /// On the first fault the chosen set becomes exactly `current` and the rest of
    /// the batch is not reapplied.
    pub fn apply_batch(&mut self, batch: &ChangeBatch<T>, current: &[T]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();

        for (i, event) in batch.events.iter().enumerate() {
            match self.apply_event(event) {
                Ok(()) => outcome.applied += 1,
                Err(fault) => {
                    tracing::warn!(
                        event = event.kind(),
                        "inconsistent selection change, resyncing: {fault}"
                    );
                    self.resync(current);
                    outcome.skipped = batch.len() - i - 1;
                    outcome.fault = Some(fault);
                    break;
                }
            }
        }

        outcome
    }

    /// Applies a single event incrementally.
    ///
    /// Only a `Malformed` entry fails; on `Err` the chosen set is untouched.
    pub fn apply_event(&mut self, event: &ChangeEvent<T>) -> Result<(), SelectionFault> {
        match event {
            ChangeEvent::Updated | ChangeEvent::Permuted => {
                tracing::debug!(event = event.kind(), "selection membership unchanged");
            }
            ChangeEvent::Added(items) => {
                for item in items {
                    self.chosen.insert(item.clone());
                }
                tracing::trace!(count = items.len(), "applied added items");
            }
            ChangeEvent::Removed(items) => {
                for item in items {
                    self.chosen.shift_remove(item);
                }
                tracing::trace!(count = items.len(), "applied removed items");
            }
            ChangeEvent::Malformed(fault) => return Err(fault.clone()),
        }
        Ok(())
    }

    /// Replaces the chosen set with `current`, in the surface's order.
    pub fn resync(&mut self, current: &[T]) {
        self.chosen = current.iter().cloned().collect();
    }
}
