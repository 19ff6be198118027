use log::debug;
use ndarray::ArrayView2;

use crate::error::{MiningError, Result};

/// One non-empty row of the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Sequential id in input order, counting only non-empty rows.
    pub id: usize,
    /// Column indices of the items present, ascending and unique.
    pub items: Vec<usize>,
}

/// The transaction collection of a run and the attribute names its items refer to.
///
/// Construction drops all-zero rows and fails if nothing is left, so
/// `transaction_count()` is always at least 1.
#[derive(Debug, Clone)]
pub struct TransactionIndex {
    attributes: Vec<String>,
    transactions: Vec<Transaction>,
}

impl TransactionIndex {
    /// Build from a binary matrix with one column per attribute.
    pub fn from_matrix(matrix: ArrayView2<'_, i32>, attributes: &[String]) -> Result<Self> {
        let (num_rows, num_columns) = matrix.dim();
        if num_columns != attributes.len() {
            return Err(MiningError::ShapeMismatch {
                attributes: attributes.len(),
                columns: num_columns,
            });
        }

        let mut rows = Vec::with_capacity(num_rows);
        for (row_idx, row) in matrix.outer_iter().enumerate() {
            let mut items = Vec::new();
            for (column, &value) in row.iter().enumerate() {
                match value {
                    0 => {}
                    1 => items.push(column),
                    other => {
                        return Err(MiningError::InvalidCell {
                            row: row_idx,
                            column,
                            value: other.to_string(),
                        })
                    }
                }
            }
            rows.push(items);
        }

        Self::from_rows(attributes.to_vec(), rows)
    }

    /// Build from per-row lists of column indices. Empty rows are dropped.
    pub fn from_rows(attributes: Vec<String>, rows: Vec<Vec<usize>>) -> Result<Self> {
        let num_rows = rows.len();
        let mut transactions = Vec::with_capacity(num_rows);

        for mut items in rows {
            if let Some(&item) = items.iter().find(|&&item| item >= attributes.len()) {
                return Err(MiningError::UnknownItem {
                    item,
                    attributes: attributes.len(),
                });
            }
            if items.is_empty() {
                continue;
            }
            items.sort_unstable();
            items.dedup();
            transactions.push(Transaction {
                id: transactions.len(),
                items,
            });
        }

        if transactions.is_empty() {
            return Err(MiningError::EmptyDataset);
        }

        debug!(
            "Dropped {} empty rows, kept {} transactions",
            num_rows - transactions.len(),
            transactions.len()
        );

        Ok(Self {
            attributes,
            transactions,
        })
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// The mining universe: every item present in at least one transaction, ascending.
    pub fn items(&self) -> Vec<usize> {
        let mut present = vec![false; self.attributes.len()];
        for transaction in &self.transactions {
            for &item in &transaction.items {
                present[item] = true;
            }
        }
        present
            .iter()
            .enumerate()
            .filter_map(|(item, &seen)| seen.then_some(item))
            .collect()
    }

    /// Number of transactions containing every item of `itemset`.
    ///
    /// `itemset` must be sorted ascending. Counts are recomputed on every call.
    pub fn frequency(&self, itemset: &[usize]) -> usize {
        self.transactions
            .iter()
            .filter(|transaction| is_subset(itemset, &transaction.items))
            .count()
    }

    pub fn support(&self, itemset: &[usize]) -> f64 {
        self.frequency(itemset) as f64 / self.transaction_count() as f64
    }

    pub fn item_name(&self, item: usize) -> Option<&str> {
        self.attributes.get(item).map(String::as_str)
    }

    /// Names for an itemset taken from this index (mined itemsets and rule
    /// sides). Panics on an item outside the attribute universe.
    pub(crate) fn names(&self, itemset: &[usize]) -> Vec<&str> {
        itemset
            .iter()
            .map(|&item| self.attributes[item].as_str())
            .collect()
    }
}

/// Both slices sorted ascending.
pub(crate) fn is_subset(small: &[usize], large: &[usize]) -> bool {
    let mut large = large.iter();
    small
        .iter()
        .all(|needle| large.by_ref().any(|item| item == needle))
}

/// Both slices sorted ascending.
pub(crate) fn is_disjoint(a: &[usize], b: &[usize]) -> bool {
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => return false,
        }
    }
    true
}

/// Sorted union of two sorted itemsets.
pub(crate) fn union(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    merged.extend_from_slice(a);
    merged.extend_from_slice(b);
    merged.sort_unstable();
    merged.dedup();
    merged
}
