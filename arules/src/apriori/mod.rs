pub mod combinations;
pub mod index;
pub mod metrics;
pub mod mining;
pub mod rules;
pub mod storage;


pub use index::{Transaction, TransactionIndex};
pub use metrics::Metrics;
pub use mining::apriori_algorithm;
pub use rules::{generate_rules, Rule};
pub use storage::{FrequentItemsets, FrequentLevel};

use crate::config::MiningConfig;
use crate::error::Result;

/// Frequent itemsets and the rules derived from them for one batch run.
#[derive(Debug, Clone)]
pub struct MiningResult {
    pub itemsets: FrequentItemsets,
    pub rules: Vec<Rule>,
}

/// Validate `config`, mine frequent itemsets, then generate rules from them.
pub fn association_rules(index: &TransactionIndex, config: &MiningConfig) -> Result<MiningResult> {
    config.validate()?;
    let itemsets = apriori_algorithm(index, config.min_support);
    let rules = generate_rules(index, &itemsets, config)?;
    Ok(MiningResult { itemsets, rules })
}
