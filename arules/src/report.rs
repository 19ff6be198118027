//! Rendering rules and itemsets with attribute names.

use serde::Serialize;

use crate::apriori::{FrequentItemsets, Rule, TransactionIndex};

#[derive(Debug, Serialize)]
pub struct RuleRecord<'a> {
    pub antecedent: Vec<&'a str>,
    pub consequent: Vec<&'a str>,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
}

impl<'a> RuleRecord<'a> {
    pub fn new(rule: &Rule, index: &'a TransactionIndex) -> Self {
        Self {
            antecedent: index.names(&rule.antecedent),
            consequent: index.names(&rule.consequent),
            support: rule.support,
            confidence: rule.confidence,
            lift: rule.lift,
        }
    }
}

fn braced(names: &[&str]) -> String {
    format!("{{{}}}", names.join(", "))
}

/// One line per rule: `{a, b} -> {c} [ SUPP=.., CONF=.., LIFT=.. ]`.
pub fn format_text(rules: &[Rule], index: &TransactionIndex) -> String {
    let mut out = format!("Total rules: {}\n", rules.len());
    for rule in rules {
        let record = RuleRecord::new(rule, index);
        out.push_str(&format!(
            "{} -> {} [ SUPP={:?}, CONF={:?}, LIFT={:?} ]\n",
            braced(&record.antecedent),
            braced(&record.consequent),
            record.support,
            record.confidence,
            record.lift
        ));
    }
    out
}

pub fn format_json(rules: &[Rule], index: &TransactionIndex) -> serde_json::Result<String> {
    let records: Vec<RuleRecord<'_>> = rules.iter().map(|rule| RuleRecord::new(rule, index)).collect();
    serde_json::to_string_pretty(&records)
}

pub fn format_itemsets(itemsets: &FrequentItemsets, index: &TransactionIndex) -> String {
    let total = index.transaction_count() as f64;
    let mut out = format!("Total frequent itemsets: {}\n", itemsets.len());
    for (itemset, frequency) in itemsets.iter() {
        out.push_str(&format!(
            "{} [ FREQ={}, SUPP={:?} ]\n",
            braced(&index.names(itemset)),
            frequency,
            frequency as f64 / total
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apriori::association_rules;
    use crate::config::MiningConfig;

    fn index() -> TransactionIndex {
        let attributes = vec!["milk".to_string(), "bread".to_string(), "jam".to_string()];
        TransactionIndex::from_rows(attributes, vec![vec![0, 1], vec![0, 1], vec![0, 2], vec![1]]).unwrap()
    }

    #[test]
    fn test_format_text() {
        let index = index();
        let result = association_rules(&index, &MiningConfig::new(0.25, 0.5, None)).unwrap();
        let text = format_text(&result.rules, &index);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Total rules: 1");
        assert!(lines[1].starts_with("{milk} -> {bread} [ SUPP=0.5, CONF=0.6666666666666666, LIFT="));
    }

    #[test]
    fn test_format_text_keeps_decimal_point() {
        let attributes = vec!["milk".to_string(), "bread".to_string()];
        let index = TransactionIndex::from_rows(attributes, vec![vec![0, 1], vec![0, 1]]).unwrap();
        let result = association_rules(&index, &MiningConfig::new(0.5, 0.5, Some(1.0))).unwrap();
        let text = format_text(&result.rules, &index);

        assert!(
            text.contains("{milk} -> {bread} [ SUPP=1.0, CONF=1.0, LIFT=1.0 ]"),
            "unexpected output: {text}"
        );

        let listing = format_itemsets(&result.itemsets, &index);
        assert!(listing.contains("{milk} [ FREQ=2, SUPP=1.0 ]"), "unexpected output: {listing}");
    }

    #[test]
    fn test_format_json() {
        let index = index();
        let result = association_rules(&index, &MiningConfig::new(0.25, 0.5, None)).unwrap();
        let json = format_json(&result.rules, &index).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["antecedent"][0], "milk");
        assert_eq!(parsed[0]["consequent"][0], "bread");
        assert_eq!(parsed[0]["support"], 0.5);
    }

    #[test]
    fn test_format_itemsets() {
        let index = index();
        let result = association_rules(&index, &MiningConfig::new(0.5, 0.5, None)).unwrap();
        let text = format_itemsets(&result.itemsets, &index);

        assert!(text.starts_with("Total frequent itemsets: 3\n"));
        assert!(text.contains("{milk, bread} [ FREQ=2, SUPP=0.5 ]"));
    }
}
