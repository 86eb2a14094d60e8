//! Transaction table representation and CSV ingestion

use ndarray::Array2;

/// Cell markers treated as "item present" when loading a table
const PRESENT_MARKERS: [&str; 5] = ["yes", "y", "true", "1", "sim"];

/// Immutable boolean transaction matrix plus the ordered item catalog
#[derive(Debug, Clone)]
pub struct TransactionStore {
    /// Item names in catalog order (display only; computation is index-based)
    items: Vec<String>,
    /// Presence matrix, shape (n_transactions, n_items)
    matrix: Array2<bool>,
}

impl TransactionStore {
    /// Build a store from an item catalog and one boolean row per transaction.
    ///
    /// Rejects an empty catalog, an empty transaction list, and any row whose
    /// length differs from the catalog size, so every downstream support
    /// computation can assume a rectangular, non-empty matrix.
    pub fn new(items: Vec<String>, rows: Vec<Vec<bool>>) -> crate::Result<Self> {
        if items.is_empty() {
            anyhow::bail!("Item catalog must contain at least one item");
        }
        if rows.is_empty() {
            anyhow::bail!("Transaction table must contain at least one transaction");
        }

        let n_items = items.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_items {
                anyhow::bail!(
                    "Transaction {} has {} cells, expected {} (catalog size)",
                    i,
                    row.len(),
                    n_items
                );
            }
        }

        let n_transactions = rows.len();
        let flat: Vec<bool> = rows.into_iter().flatten().collect();
        let matrix = Array2::from_shape_vec((n_transactions, n_items), flat)?;

        Ok(TransactionStore { items, matrix })
    }

    /// Number of transactions (matrix rows), always > 0
    pub fn num_transactions(&self) -> usize {
        self.matrix.nrows()
    }

    /// Number of catalog items (matrix columns), always > 0
    pub fn num_items(&self) -> usize {
        self.matrix.ncols()
    }

    /// Display name for a catalog index
    pub fn item_name(&self, item: usize) -> &str {
        &self.items[item]
    }

    /// Whether `item` is present in transaction `transaction`
    pub fn contains(&self, transaction: usize, item: usize) -> bool {
        self.matrix[[transaction, item]]
    }
}

/// Load a transaction table from a delimited text file
///
/// The header row names the item catalog; each following row marks one
/// transaction with yes/no-style cells. Recognized presence markers are
/// yes, y, true, 1 and sim (case-insensitive); any other cell value is
/// treated as absence.
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Returns
/// * `TransactionStore` with the catalog and presence matrix
pub fn load_transactions(path: &str) -> crate::Result<TransactionStore> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| anyhow::anyhow!("Could not open transaction table '{}': {}", path, e))?;

    let items: Vec<String> = reader
        .headers()?
        .iter()
        .map(|name| name.to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<bool> = record.iter().map(cell_is_present).collect();
        rows.push(row);
    }

    TransactionStore::new(items, rows)
}

fn cell_is_present(cell: &str) -> bool {
    PRESENT_MARKERS
        .iter()
        .any(|marker| cell.eq_ignore_ascii_case(marker))
}
