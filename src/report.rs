//! Stdout rendering of mining stages and the final rule list
//!
//! The mining core is index-based and never prints; this module maps catalog
//! indices back to item names for display.

use crate::data::TransactionStore;
use crate::mine::{FrequentItem, FrequentPair};
use crate::rules::AssociationRule;

/// Print L1 with per-item supports and a stage total
pub fn print_frequent_items(store: &TransactionStore, l1: &[FrequentItem]) {
    println!("--- Step 1: Frequent Items (L1) ---");
    for frequent in l1 {
        println!(
            "Item {{{}}} is frequent. (Support: {:.2})",
            store.item_name(frequent.item),
            frequent.support
        );
    }
    println!("Total frequent items (L1): {}\n", l1.len());
}

/// Print L2 with joint supports and a stage total
pub fn print_frequent_pairs(store: &TransactionStore, l2: &[FrequentPair]) {
    println!("--- Step 2: Frequent Pairs (L2) ---");
    for pair in l2 {
        println!(
            "Pair {{{}, {}}} is frequent. (Support: {:.2})",
            store.item_name(pair.item1),
            store.item_name(pair.item2),
            pair.support
        );
    }
    println!("Total frequent pairs (L2): {}\n", l2.len());
}

/// Print the surviving rules, or an explicit message when there are none
pub fn print_rules(
    store: &TransactionStore,
    rules: &[AssociationRule],
    min_support: f64,
    min_confidence: f64,
) {
    println!("--- Result: Valid Association Rules ---");
    println!(
        "Minimum support: {:.0}% | Minimum confidence: {:.0}%\n",
        min_support * 100.0,
        min_confidence * 100.0
    );

    if rules.is_empty() {
        println!("No association rules found with the given criteria.");
        return;
    }

    for rule in rules {
        println!(
            "Rule: {{{}}} -> {{{}}}",
            store.item_name(rule.antecedent),
            store.item_name(rule.consequent)
        );
        println!("   - Support: {:.0}%", rule.support * 100.0);
        println!("   - Confidence: {:.0}%\n", rule.confidence * 100.0);
    }
}
