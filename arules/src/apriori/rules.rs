use log::info;
use rayon::prelude::*;

use super::combinations::pair_count;
use super::index::{is_disjoint, TransactionIndex};
use super::metrics::Metrics;
use super::storage::FrequentItemsets;
use crate::config::MiningConfig;
use crate::error::Result;

/// A scored rule `antecedent -> consequent`. Both sides are sorted column indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub antecedent: Vec<usize>,
    pub consequent: Vec<usize>,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
}

/// Pair up every two distinct frequent itemsets and keep the rules passing `config`.
///
/// Itemsets are flattened level by level; for each pair `(i, j)` with `i < j`
/// only the rule `itemsets[i] -> itemsets[j]` is scored. Output keeps that
/// enumeration order.
pub fn generate_rules(
    index: &TransactionIndex,
    itemsets: &FrequentItemsets,
    config: &MiningConfig,
) -> Result<Vec<Rule>> {
    let flat: Vec<&[usize]> = itemsets.iter().map(|(itemset, _)| itemset).collect();
    info!(
        "Creating association rules from {} candidate pairs...",
        pair_count(flat.len())
    );

    let metrics = Metrics::new(index);
    let per_antecedent: Vec<Vec<Rule>> = (0..flat.len())
        .into_par_iter()
        .map(|i| -> Result<Vec<Rule>> {
            let mut rules = Vec::new();
            for &consequent in &flat[i + 1..] {
                if let Some(rule) = score_pair(&metrics, flat[i], consequent, config)? {
                    rules.push(rule);
                }
            }
            Ok(rules)
        })
        .collect::<Result<_>>()?;

    let rules: Vec<Rule> = per_antecedent.into_iter().flatten().collect();
    info!("Total rules: {}", rules.len());
    Ok(rules)
}

/// Score one directed pair, returning `None` when a filter rejects it.
pub fn score_pair(
    metrics: &Metrics<'_>,
    antecedent: &[usize],
    consequent: &[usize],
    config: &MiningConfig,
) -> Result<Option<Rule>> {
    if !is_disjoint(antecedent, consequent) {
        return Ok(None);
    }

    let support = metrics.support(antecedent, consequent);
    if support < config.min_support {
        return Ok(None);
    }

    let confidence = metrics.confidence(antecedent, consequent)?;
    if confidence < config.min_confidence {
        return Ok(None);
    }

    let lift = metrics.lift(consequent, confidence)?;
    if !config.passes_lift(lift) {
        return Ok(None);
    }

    Ok(Some(Rule {
        antecedent: antecedent.to_vec(),
        consequent: consequent.to_vec(),
        support,
        confidence,
        lift,
    }))
}
