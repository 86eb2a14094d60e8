//! RuleMine: pairwise association rule mining CLI
//!
//! This is the main entrypoint that orchestrates table loading, the mining
//! pipeline, and result rendering.

use anyhow::Result;
use clap::Parser;
use rulemine::{load_transactions, mine, report, Args};
use std::time::Instant;

fn main() -> Result<()> {
    // Parse and validate command-line arguments
    let args = Args::parse();
    args.validate()?;

    if args.verbose {
        println!("RuleMine - Association Rules over Item Pairs");
        println!("============================================\n");
    }

    let start_time = Instant::now();

    // Step 1: Load the transaction table
    if args.verbose {
        println!("Step 1: Loading transaction table");
        println!("  Input file: {}", args.input);
    }

    let load_start = Instant::now();
    let store = load_transactions(&args.input)?;
    let load_time = load_start.elapsed();

    println!(
        "✓ Table loaded: {} transactions over {} items",
        store.num_transactions(),
        store.num_items()
    );
    if args.verbose {
        println!("  Loading time: {:.2}s", load_time.as_secs_f64());
    }

    // Step 2: Run the mining pipeline
    if args.verbose {
        println!("\nStep 2: Mining frequent itemsets and rules");
        println!("  Minimum support: {}", args.min_support);
        println!("  Minimum confidence: {}", args.min_confidence);
    }

    let mine_start = Instant::now();
    let result = mine(&store, args.min_support, args.min_confidence)?;
    let mine_time = mine_start.elapsed();

    println!(
        "✓ Mining complete: {} frequent items, {} frequent pairs, {} rules",
        result.frequent_items.len(),
        result.frequent_pairs.len(),
        result.rules.len()
    );
    if args.verbose {
        println!("  Mining time: {:.2}s", mine_time.as_secs_f64());
    }
    println!();

    // Step 3: Render each stage and the final rule list
    report::print_frequent_items(&store, &result.frequent_items);
    report::print_frequent_pairs(&store, &result.frequent_pairs);
    report::print_rules(&store, &result.rules, args.min_support, args.min_confidence);

    if args.verbose {
        let total_time = start_time.elapsed();
        println!("\nTotal processing time: {:.2}s", total_time.as_secs_f64());
    }

    Ok(())
}
