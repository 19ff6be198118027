use super::index::{union, TransactionIndex};
use crate::error::{MiningError, Result};

/// Support, confidence and lift for directed splits `A -> B` over one index.
#[derive(Debug, Clone, Copy)]
pub struct Metrics<'a> {
    index: &'a TransactionIndex,
}

impl<'a> Metrics<'a> {
    pub fn new(index: &'a TransactionIndex) -> Self {
        Self { index }
    }

    /// `freq(A ∪ B) / N`
    pub fn support(&self, antecedent: &[usize], consequent: &[usize]) -> f64 {
        self.index.support(&union(antecedent, consequent))
    }

    /// `freq(A ∪ B) / freq(A)`
    pub fn confidence(&self, antecedent: &[usize], consequent: &[usize]) -> Result<f64> {
        let joint = self.index.frequency(&union(antecedent, consequent));
        let base = self.nonzero_frequency(antecedent)?;
        Ok(joint as f64 / base as f64)
    }

    /// `confidence / support(B)`
    pub fn lift(&self, consequent: &[usize], confidence: f64) -> Result<f64> {
        let frequency = self.nonzero_frequency(consequent)?;
        let support = frequency as f64 / self.index.transaction_count() as f64;
        Ok(confidence / support)
    }

    fn nonzero_frequency(&self, itemset: &[usize]) -> Result<usize> {
        match self.index.frequency(itemset) {
            0 => Err(MiningError::ZeroFrequency {
                itemset: itemset.to_vec(),
            }),
            frequency => Ok(frequency),
        }
    }
}
