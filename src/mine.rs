//! Frequent itemset mining (L1 and L2) and the full pipeline entry point

use crate::data::TransactionStore;
use crate::rules::{derive_rules, AssociationRule};
use crate::support::{item_supports, pair_support};

/// A catalog item whose support reached the minimum threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequentItem {
    /// Catalog index
    pub item: usize,
    /// Single-item support in [0,1]
    pub support: f64,
}

/// An unordered pair of frequent items with their joint support
///
/// Invariant: `item1 < item2` (catalog order) and both members are in L1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequentPair {
    pub item1: usize,
    pub item2: usize,
    /// Joint support of both items in the same transaction
    pub support: f64,
}

/// Output of the full mining pipeline
#[derive(Debug)]
pub struct MiningReport {
    /// Support of every catalog item, in catalog order
    pub item_supports: Vec<f64>,
    /// L1: frequent items in catalog order
    pub frequent_items: Vec<FrequentItem>,
    /// L2: frequent pairs in nested L1 iteration order
    pub frequent_pairs: Vec<FrequentPair>,
    /// Rules surviving the confidence filter, grouped by source pair
    pub rules: Vec<AssociationRule>,
}

/// Derive L1: retain every catalog item with support >= min_support.
///
/// Output follows catalog order, so the result is deterministic for a
/// given store and threshold.
pub fn frequent_items(supports: &[f64], min_support: f64) -> Vec<FrequentItem> {
    supports
        .iter()
        .enumerate()
        .filter(|(_, &support)| support >= min_support)
        .map(|(item, &support)| FrequentItem { item, support })
        .collect()
}

/// Derive L2: enumerate unordered pairs drawn only from L1.
///
/// Candidates come from L1, not the full catalog: a pair's support can never
/// exceed either member's support, so a pair containing a non-frequent item
/// cannot itself be frequent. Pairs are emitted in nested iteration order
/// over L1 positions.
pub fn frequent_pairs(
    store: &TransactionStore,
    l1: &[FrequentItem],
    min_support: f64,
) -> Vec<FrequentPair> {
    let mut pairs = Vec::new();

    for (i, first) in l1.iter().enumerate() {
        for second in &l1[i + 1..] {
            let support = pair_support(store, first.item, second.item);
            if support >= min_support {
                pairs.push(FrequentPair {
                    item1: first.item,
                    item2: second.item,
                    support,
                });
            }
        }
    }

    pairs
}

/// Run the full pipeline: item supports -> L1 -> L2 -> rules
///
/// # Arguments
/// * `store` - Validated transaction store (non-empty by construction)
/// * `min_support` - Minimum support for L1 and L2 membership, in [0,1]
/// * `min_confidence` - Minimum confidence for rule retention, in [0,1]
///
/// # Returns
/// * `MiningReport` with all intermediate stages and the final rule list
pub fn mine(
    store: &TransactionStore,
    min_support: f64,
    min_confidence: f64,
) -> crate::Result<MiningReport> {
    // Support is count/N; a store with no transactions has no defined support
    if store.num_transactions() == 0 {
        anyhow::bail!("Cannot mine an empty transaction store");
    }

    let item_supports = item_supports(store);
    let l1 = frequent_items(&item_supports, min_support);
    let l2 = frequent_pairs(store, &l1, min_support);
    let rules = derive_rules(&l2, &item_supports, min_confidence);

    Ok(MiningReport {
        item_supports,
        frequent_items: l1,
        frequent_pairs: l2,
        rules,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::item_supports;

    fn create_test_store() -> TransactionStore {
        let items = vec![
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
            "d".to_string(),
        ];
        // a: 4/5, b: 3/5, c: 2/5, d: 0/5; {a,b}: 3/5, {a,c}: 2/5, {b,c}: 1/5
        let rows = vec![
            vec![true, true, false, false],
            vec![true, true, true, false],
            vec![true, true, false, false],
            vec![true, false, true, false],
            vec![false, false, false, false],
        ];
        TransactionStore::new(items, rows).unwrap()
    }

    #[test]
    fn test_frequent_items_membership() {
        let store = create_test_store();
        let supports = item_supports(&store);

        let l1 = frequent_items(&supports, 0.5);
        let members: Vec<usize> = l1.iter().map(|f| f.item).collect();
        assert_eq!(members, vec![0, 1]);
        assert_eq!(l1[0].support, 0.8);
        assert_eq!(l1[1].support, 0.6);
    }

    #[test]
    fn test_frequent_items_catalog_order() {
        let supports = vec![0.4, 0.9, 0.4, 0.9];
        let l1 = frequent_items(&supports, 0.4);
        let members: Vec<usize> = l1.iter().map(|f| f.item).collect();
        assert_eq!(members, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_frequent_pairs_membership_and_order() {
        let store = create_test_store();
        let supports = item_supports(&store);
        let l1 = frequent_items(&supports, 0.4);
        let l2 = frequent_pairs(&store, &l1, 0.4);

        // {a,b} at 0.6 and {a,c} at 0.4 survive; {b,c} at 0.2 does not
        let edges: Vec<(usize, usize)> = l2.iter().map(|p| (p.item1, p.item2)).collect();
        assert_eq!(edges, vec![(0, 1), (0, 2)]);
        assert_eq!(l2[0].support, 0.6);
        assert_eq!(l2[1].support, 0.4);
    }

    #[test]
    fn test_pruned_l2_matches_unpruned_enumeration() {
        let store = create_test_store();
        let supports = item_supports(&store);
        let min_support = 0.2;

        let l1 = frequent_items(&supports, min_support);
        let pruned = frequent_pairs(&store, &l1, min_support);

        // Direct enumeration over the full catalog, keeping only pairs whose
        // members are both frequent, must give identical membership.
        let mut direct = Vec::new();
        for i in 0..store.num_items() {
            for j in (i + 1)..store.num_items() {
                if supports[i] < min_support || supports[j] < min_support {
                    continue;
                }
                let support = crate::support::pair_support(&store, i, j);
                if support >= min_support {
                    direct.push(FrequentPair {
                        item1: i,
                        item2: j,
                        support,
                    });
                }
            }
        }
        assert_eq!(pruned, direct);
    }

    #[test]
    fn test_min_support_zero_admits_all_items() {
        let store = create_test_store();
        let supports = item_supports(&store);
        let l1 = frequent_items(&supports, 0.0);
        assert_eq!(l1.len(), store.num_items());
    }

    #[test]
    fn test_min_support_one_admits_universal_items_only() {
        let items = vec!["a".to_string(), "b".to_string()];
        let rows = vec![vec![true, true], vec![true, false]];
        let store = TransactionStore::new(items, rows).unwrap();
        let supports = item_supports(&store);

        let l1 = frequent_items(&supports, 1.0);
        assert_eq!(l1.len(), 1);
        assert_eq!(l1[0].item, 0);
    }

    #[test]
    fn test_pipeline_idempotence() {
        let store = create_test_store();
        let first = mine(&store, 0.4, 0.5).unwrap();
        let second = mine(&store, 0.4, 0.5).unwrap();

        assert_eq!(first.item_supports, second.item_supports);
        assert_eq!(first.frequent_items, second.frequent_items);
        assert_eq!(first.frequent_pairs, second.frequent_pairs);
        assert_eq!(first.rules, second.rules);
    }
}
