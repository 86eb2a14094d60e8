//! RuleMine: A Rust CLI application for market-basket analysis
//!
//! This library mines pairwise association rules from a boolean transaction
//! table using the Apriori L1/L2 derivation: frequent single items, frequent
//! item pairs, then directional rules filtered by minimum confidence.

pub mod cli;
pub mod data;
pub mod mine;
pub mod report;
pub mod rules;
pub mod support;

// Re-export public items for easier access
pub use cli::Args;
pub use data::{load_transactions, TransactionStore};
pub use mine::{mine, FrequentItem, FrequentPair, MiningReport};
pub use rules::{derive_rules, AssociationRule};
pub use support::{item_support, item_supports, pair_support};

/// Common result type used throughout the application
pub type Result<T> = anyhow::Result<T>;
