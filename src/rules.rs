//! Directional association rule generation from frequent pairs

use crate::mine::FrequentPair;

/// A directed rule antecedent -> consequent with its quality figures
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssociationRule {
    /// Catalog index of the antecedent item
    pub antecedent: usize,
    /// Catalog index of the consequent item
    pub consequent: usize,
    /// Joint support of the source pair
    pub support: f64,
    /// confidence = pair support / antecedent support
    pub confidence: f64,
}

/// Derive rules from L2: two directional candidates per pair, each kept
/// independently iff its confidence reaches min_confidence.
///
/// For every pair the item1 -> item2 candidate is evaluated before
/// item2 -> item1, so output order is grouped by source pair in L2 order.
/// Confidence denominators come from the support vector computed during L1,
/// not from a recomputation. A candidate whose antecedent support is exactly
/// zero has undefined confidence and is rejected outright; this can only
/// arise when min_support is 0.
pub fn derive_rules(
    pairs: &[FrequentPair],
    item_supports: &[f64],
    min_confidence: f64,
) -> Vec<AssociationRule> {
    let mut rules = Vec::new();

    for pair in pairs {
        push_candidate(
            &mut rules,
            pair.item1,
            pair.item2,
            pair.support,
            item_supports[pair.item1],
            min_confidence,
        );
        push_candidate(
            &mut rules,
            pair.item2,
            pair.item1,
            pair.support,
            item_supports[pair.item2],
            min_confidence,
        );
    }

    rules
}

fn push_candidate(
    rules: &mut Vec<AssociationRule>,
    antecedent: usize,
    consequent: usize,
    pair_support: f64,
    antecedent_support: f64,
    min_confidence: f64,
) {
    if antecedent_support == 0.0 {
        return;
    }

    let confidence = pair_support / antecedent_support;
    if confidence >= min_confidence {
        rules.push(AssociationRule {
            antecedent,
            consequent,
            support: pair_support,
            confidence,
        });
    }
}
