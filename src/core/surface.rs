use std::{hash::Hash, sync::mpsc};

use super::{CandidateDomain, ChangeBatch, ChangeEvent};

/// A multi-select list the user toggles items on.
pub trait SelectionSurface<T: Hash + Eq> {
    fn candidates(&self) -> &CandidateDomain<T>;

    /// Programmatically marks `item` selected.
    fn select(&mut self, item: &T);

    /// Everything currently selected, in the surface's order.
    fn current_selection(&self) -> Vec<T>;

    /// Batches are delivered in order, one per effective selection change.
    fn subscribe(&mut self) -> mpsc::Receiver<ChangeBatch<T>>;
}

/// In-memory [`SelectionSurface`] over a [`CandidateDomain`].
///
/// The selection is kept in the order items were selected.
#[derive(Debug)]
pub struct SelectionList<T: Hash + Eq> {
    domain: CandidateDomain<T>,
    selected: Vec<usize>,
    subscribers: Vec<mpsc::Sender<ChangeBatch<T>>>,
}

impl<T: Hash + Eq + Clone> SelectionList<T> {
    #[must_use]
    pub fn new(domain: CandidateDomain<T>) -> Self {
        Self {
            domain,
            selected: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Candidates paired with their selected flag, in candidate order.
    pub fn rows(&self) -> impl Iterator<Item = (&T, bool)> + '_ {
        self.domain
            .items()
            .enumerate()
            .map(|(i, item)| (item, self.selected.contains(&i)))
    }

    pub fn select_index(&mut self, index: usize) {
        if index >= self.domain.len() || self.is_selected(index) {
            return;
        }
        self.selected.push(index);
        let snapshot = self.current_selection();
        let len = snapshot.len();
        self.emit(vec![ChangeEvent::added_window(&snapshot, len - 1, len)]);
    }

    pub fn deselect_index(&mut self, index: usize) {
        let Some(pos) = self.selected.iter().position(|&i| i == index) else {
            return;
        };
        self.selected.remove(pos);
        if let Some(item) = self.domain.get(index) {
            let removed = vec![item.clone()];
            self.emit(vec![ChangeEvent::Removed(removed)]);
        }
    }

    pub fn deselect(&mut self, item: &T) {
        if let Some(index) = self.domain.position(item) {
            self.deselect_index(index);
        }
    }

    /// Flips row `index` and returns its new state. Out-of-range rows stay unselected.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.is_selected(index) {
            self.deselect_index(index);
            false
        } else {
            self.select_index(index);
            self.is_selected(index)
        }
    }

    /// Selects every unselected candidate, in candidate order, as one batch.
    pub fn select_all(&mut self) {
        let from = self.selected.len();
        for index in 0..self.domain.len() {
            if !self.selected.contains(&index) {
                self.selected.push(index);
            }
        }
        let snapshot = self.current_selection();
        if snapshot.len() > from {
            self.emit(vec![ChangeEvent::added_window(&snapshot, from, snapshot.len())]);
        }
    }

    /// Deselects everything as one batch.
    pub fn clear(&mut self) {
        if self.selected.is_empty() {
            return;
        }
        let removed = self.current_selection();
        self.selected.clear();
        self.emit(vec![ChangeEvent::Removed(removed)]);
    }

    fn emit(&mut self, events: Vec<ChangeEvent<T>>) {
        let batch = ChangeBatch::new(events);
        // Receivers that were dropped are forgotten.
        self.subscribers.retain(|tx| tx.send(batch.clone()).is_ok());
    }
}

impl<T: Hash + Eq + Clone> SelectionSurface<T> for SelectionList<T> {
    fn candidates(&self) -> &CandidateDomain<T> {
        &self.domain
    }

    fn select(&mut self, item: &T) {
        if let Some(index) = self.domain.position(item) {
            self.select_index(index);
        }
    }

    fn current_selection(&self) -> Vec<T> {
        self.selected
            .iter()
            .filter_map(|&i| self.domain.get(i).cloned())
            .collect()
    }

    fn subscribe(&mut self) -> mpsc::Receiver<ChangeBatch<T>> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }
}
