//! Support computation over the transaction store
//!
//! Support is the fraction of transactions satisfying a presence predicate,
//! always in [0,1]. The store guarantees a non-empty matrix, so the divisions
//! here are well-defined.

use crate::data::TransactionStore;

/// Support of a single item: fraction of transactions containing it
pub fn item_support(store: &TransactionStore, item: usize) -> f64 {
    let count = (0..store.num_transactions())
        .filter(|&t| store.contains(t, item))
        .count();
    count as f64 / store.num_transactions() as f64
}

/// Joint support of an item pair: fraction of transactions containing both
pub fn pair_support(store: &TransactionStore, item1: usize, item2: usize) -> f64 {
    let count = (0..store.num_transactions())
        .filter(|&t| store.contains(t, item1) && store.contains(t, item2))
        .count();
    count as f64 / store.num_transactions() as f64
}

/// Support of every catalog item, in catalog order
///
/// Computed once per run; the mining and rule stages both read from this
/// vector so their confidence denominators stay consistent.
pub fn item_supports(store: &TransactionStore) -> Vec<f64> {
    (0..store.num_items())
        .map(|item| item_support(store, item))
        .collect()
}
