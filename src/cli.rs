//! Command-line interface definitions and argument parsing

use clap::Parser;

/// Market-basket association rule mining over a yes/no transaction table
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input CSV file (header row names the items)
    #[arg(short, long, default_value = "transactions.csv")]
    pub input: String,

    /// Minimum support threshold in [0,1] (e.g. 0.3 for 30%)
    #[arg(short = 's', long, default_value = "0.3")]
    pub min_support: f64,

    /// Minimum confidence threshold in [0,1] (e.g. 0.7 for 70%)
    #[arg(short = 'c', long, default_value = "0.7")]
    pub min_confidence: f64,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Reject thresholds outside [0,1] before the pipeline runs
    pub fn validate(&self) -> crate::Result<()> {
        if !(0.0..=1.0).contains(&self.min_support) {
            anyhow::bail!(
                "Minimum support must be between 0.0 and 1.0, got {}",
                self.min_support
            );
        }
        if !(0.0..=1.0).contains(&self.min_confidence) {
            anyhow::bail!(
                "Minimum confidence must be between 0.0 and 1.0, got {}",
                self.min_confidence
            );
        }
        Ok(())
    }
}
