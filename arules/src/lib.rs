//! Frequent itemset mining and association rules over binary transaction data.
//!
//! ```no_run
//! use arules::{association_rules, MiningConfig, TransactionIndex};
//! use std::path::Path;
//!
//! let attributes = arules::dataset::read_attributes(Path::new("attr.csv"))?;
//! let matrix = arules::dataset::read_dataset(Path::new("data.csv"), attributes.len())?;
//! let index = TransactionIndex::from_matrix(matrix.view(), &attributes)?;
//!
//! let result = association_rules(&index, &MiningConfig::new(0.03, 0.5, Some(1.0)))?;
//! print!("{}", arules::report::format_text(&result.rules, &index));
//! # Ok::<(), arules::MiningError>(())
//! ```

pub mod apriori;
pub mod config;
pub mod dataset;
pub mod error;
pub mod report;

pub use apriori::{
    apriori_algorithm, association_rules, generate_rules, FrequentItemsets, FrequentLevel,
    Metrics, MiningResult, Rule, Transaction, TransactionIndex,
};
pub use config::{MiningConfig, DEFAULT_MIN_LIFT};
pub use error::{MiningError, Result};

#[cfg(feature = "python")]
mod python {
    use numpy::PyReadonlyArray2;
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::{apriori_algorithm, association_rules, MiningConfig, MiningError, TransactionIndex};

    type PyRule = (Vec<String>, Vec<String>, f64, f64, f64);

    impl From<MiningError> for PyErr {
        fn from(err: MiningError) -> Self {
            PyValueError::new_err(err.to_string())
        }
    }

    fn owned_names(index: &TransactionIndex, itemset: &[usize]) -> Vec<String> {
        index.names(itemset).into_iter().map(str::to_owned).collect()
    }

    #[pyfunction]
    #[pyo3(name = "association_rules", signature = (transactions, attributes, min_support, min_confidence, min_lift=None))]
    fn association_rules_py(
        transactions: PyReadonlyArray2<'_, i32>,
        attributes: Vec<String>,
        min_support: f64,
        min_confidence: f64,
        min_lift: Option<f64>,
    ) -> PyResult<Vec<PyRule>> {
        let index = TransactionIndex::from_matrix(transactions.as_array(), &attributes)?;
        let config = MiningConfig::new(min_support, min_confidence, min_lift);
        let result = association_rules(&index, &config)?;

        Ok(result
            .rules
            .iter()
            .map(|rule| {
                (
                    owned_names(&index, &rule.antecedent),
                    owned_names(&index, &rule.consequent),
                    rule.support,
                    rule.confidence,
                    rule.lift,
                )
            })
            .collect())
    }

    #[pyfunction]
    #[pyo3(name = "frequent_itemsets")]
    fn frequent_itemsets_py(
        transactions: PyReadonlyArray2<'_, i32>,
        attributes: Vec<String>,
        min_support: f64,
    ) -> PyResult<Vec<(Vec<String>, usize)>> {
        MiningConfig::new(min_support, 0.0, None).validate()?;
        let index = TransactionIndex::from_matrix(transactions.as_array(), &attributes)?;
        let itemsets = apriori_algorithm(&index, min_support);

        Ok(itemsets
            .iter()
            .map(|(itemset, frequency)| (owned_names(&index, itemset), frequency))
            .collect())
    }

    #[pymodule]
    fn arules(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(association_rules_py, m)?)?;
        m.add_function(wrap_pyfunction!(frequent_itemsets_py, m)?)?;
        Ok(())
    }
}
