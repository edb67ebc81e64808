//! In-memory storage of quotations.
//!
//! The store owns every quotation for the lifetime of a session. Identifiers
//! are allocated from a counter that only ever moves forward, so an id is
//! never handed out twice, even after the quotation holding it was removed.

use log::debug;

use crate::quotation::{Quotation, QuotationId};

#[derive(Debug, Default)]
pub struct QuotationStore {
    last_id: QuotationId,
    quotations: Vec<Quotation>,
}

impl QuotationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new quotation under the next free id and returns a copy of it.
    pub fn add(&mut self, content: String, author_name: String) -> Quotation {
        self.last_id += 1;

        let quotation = Quotation {
            id: self.last_id,
            content,
            author_name,
        };
        self.quotations.push(quotation.clone());
        debug!("Added quotation {}", quotation.id);

        quotation
    }

    /// Returns a snapshot of all quotations, most recently added first.
    #[must_use]
    pub fn list_all(&self) -> Vec<Quotation> {
        self.quotations.iter().rev().cloned().collect()
    }

    /// Removes the first quotation with the given id.
    ///
    /// Returns `false` when no quotation matches; the store is left untouched.
    pub fn remove(&mut self, id: QuotationId) -> bool {
        let Some(position) = self.quotations.iter().position(|q| q.id == id) else {
            debug!("No quotation with id {id} to remove");
            return false;
        };

        self.quotations.remove(position);
        debug!("Removed quotation {id}");
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.quotations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotations.is_empty()
    }

    /// The most recently allocated id, or 0 if nothing was ever added.
    #[must_use]
    pub fn last_id(&self) -> QuotationId {
        self.last_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(store: &mut QuotationStore, content: &str, author_name: &str) -> Quotation {
        store.add(content.to_string(), author_name.to_string())
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = QuotationStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.last_id(), 0);
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn test_add_assigns_increasing_ids() {
        let mut store = QuotationStore::new();
        let first = add(&mut store, "A", "B");
        let second = add(&mut store, "C", "D");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.last_id(), 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_accepts_empty_text() {
        let mut store = QuotationStore::new();
        let quotation = add(&mut store, "", "");
        assert_eq!(quotation.id, 1);
        assert_eq!(quotation.content, "");
        assert_eq!(quotation.author_name, "");
    }

    #[test]
    fn test_list_all_is_reverse_insertion_order() {
        let mut store = QuotationStore::new();
        add(&mut store, "A", "B");
        add(&mut store, "C", "D");

        let listed = store.list_all();
        assert_eq!(
            listed,
            vec![
                Quotation {
                    id: 2,
                    content: "C".to_string(),
                    author_name: "D".to_string(),
                },
                Quotation {
                    id: 1,
                    content: "A".to_string(),
                    author_name: "B".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_list_all_is_a_snapshot() {
        let mut store = QuotationStore::new();
        add(&mut store, "A", "B");

        let snapshot = store.list_all();
        add(&mut store, "C", "D");
        store.remove(1);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, 1);
    }

    #[test]
    fn test_remove_existing() {
        let mut store = QuotationStore::new();
        add(&mut store, "A", "B");
        add(&mut store, "C", "D");

        assert!(store.remove(1));
        let ids: Vec<_> = store.list_all().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_remove_unknown_id_leaves_store_untouched() {
        let mut store = QuotationStore::new();
        add(&mut store, "A", "B");

        assert!(!store.remove(5));
        assert!(!store.remove(-1));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_twice_reports_not_found() {
        let mut store = QuotationStore::new();
        add(&mut store, "A", "B");

        assert!(store.remove(1));
        assert!(!store.remove(1));
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut store = QuotationStore::new();
        add(&mut store, "A", "B");
        add(&mut store, "C", "D");
        store.remove(2);
        store.remove(1);

        let next = add(&mut store, "E", "F");
        assert_eq!(next.id, 3);
        assert_eq!(store.len(), 1);
    }
}
