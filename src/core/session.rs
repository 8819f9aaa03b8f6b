use std::{fmt, hash::Hash, sync::mpsc};

use super::{
    BatchOutcome, ChangeBatch, ChoiceStore, ChosenSet, SelectionSetSynchronizer, SelectionSurface,
    format_summary,
};

/// Receives the rendered summary whenever the chosen set changes.
pub trait DisplaySink {
    fn show_summary(&mut self, text: &str);
}

impl DisplaySink for String {
    fn show_summary(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Keeps every summary shown, oldest first.
impl DisplaySink for Vec<String> {
    fn show_summary(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

/// One open picker: a surface, the store it edits, and where the summary goes.
///
/// Owned by a single thread. Batches queue on the surface's channel and are only
/// applied from [`pump`](Self::pump), one at a time and to completion.
pub struct LampChoiceSession<T, Su, St, Sk>
where
    T: Hash + Eq,
{
    surface: Su,
    store: St,
    sink: Sk,
    sync: SelectionSetSynchronizer<T>,
    changes: mpsc::Receiver<ChangeBatch<T>>,
    summary: String,
}

impl<T, Su, St, Sk> LampChoiceSession<T, Su, St, Sk>
where
    T: Hash + Eq + Clone + fmt::Debug + fmt::Display,
    Su: SelectionSurface<T>,
    St: ChoiceStore<T>,
    Sk: DisplaySink,
{
    /// Seeds the surface from the store and shows the initial summary.
    pub fn open(mut surface: Su, store: St, mut sink: Sk) -> Self {
        let sync = SelectionSetSynchronizer::initialize(store.chosen(), &mut surface);
        // Subscribe after seeding so the programmatic selection isn't echoed back.
        let changes = surface.subscribe();
        let summary = format_summary(sync.chosen());
        sink.show_summary(&summary);

        Self {
            surface,
            store,
            sink,
            sync,
            changes,
            summary,
        }
    }

    /// Applies every queued batch. Returns how many were processed.
    pub fn pump(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(batch) = self.changes.try_recv() {
            self.handle(&batch);
            processed += 1;
        }
        processed
    }

    /// Applies one batch, publishes the result and refreshes the summary.
    pub fn handle(&mut self, batch: &ChangeBatch<T>) -> BatchOutcome {
        let current = self.surface.current_selection();
        let outcome = self.sync.apply_batch(batch, &current);

        self.store.set_chosen(self.sync.chosen());
        self.summary = format_summary(self.sync.chosen());
        self.sink.show_summary(&self.summary);

        tracing::debug!(
            applied = outcome.applied,
            skipped = outcome.skipped,
            resynced = outcome.resynced(),
            chosen = self.sync.chosen().len(),
            "selection batch processed"
        );
        outcome
    }

    #[must_use]
    pub const fn chosen(&self) -> &ChosenSet<T> {
        self.sync.chosen()
    }

    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    #[must_use]
    pub const fn surface(&self) -> &Su {
        &self.surface
    }

    pub const fn surface_mut(&mut self) -> &mut Su {
        &mut self.surface
    }

    #[must_use]
    pub const fn store(&self) -> &St {
        &self.store
    }

    #[must_use]
    pub const fn sink(&self) -> &Sk {
        &self.sink
    }

    /// Ends the session. The chosen set is dropped; the store keeps the last published value.
    pub fn close(self) -> St {
        self.store
    }
}
