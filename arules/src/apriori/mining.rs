use log::{debug, info};
use rayon::prelude::*;

use super::combinations::k_combinations;
use super::index::TransactionIndex;
use super::storage::{FrequentItemsets, FrequentLevel};

/// Level-wise search for every itemset with `frequency / N >= min_support`.
///
/// Level `k` takes all `k`-combinations of the current item pool, which starts
/// as every item present in the data and is then narrowed to the items of the
/// itemsets that survived the previous level. Candidates are not joined on a
/// shared prefix and their subsets are not checked. The search stops at the
/// first level with no survivor, and never goes past `|items| - 1`.
pub fn apriori_algorithm(index: &TransactionIndex, min_support: f64) -> FrequentItemsets {
    let universe = index.items();
    let num_transactions = index.transaction_count();
    let min_count = min_support * num_transactions as f64;

    let mut result = FrequentItemsets::new();
    let mut pool = universe.clone();

    for k in 1..universe.len() {
        info!("Itemset size {k}...");
        let level = frequent_level(index, &pool, k, min_count);
        info!("Found {} frequent itemsets", level.len());

        if level.is_empty() {
            break;
        }

        pool = level.items();
        debug!("Item pool for size {} has {} items", k + 1, pool.len());
        result.push_level(level);
    }

    info!("Total frequent itemsets: {}", result.len());
    result
}

/// Count every `k`-combination of `pool` and keep those reaching `min_count`.
///
/// Counting runs in parallel; `collect` keeps candidate order so the level
/// is filled in lexicographic order.
fn frequent_level(
    index: &TransactionIndex,
    pool: &[usize],
    k: usize,
    min_count: f64,
) -> FrequentLevel {
    let candidates = k_combinations(pool, k);
    debug!("Counting {} candidates of size {k}", candidates.len());

    let counted: Vec<(Vec<usize>, usize)> = candidates
        .into_par_iter()
        .map(|candidate| {
            let frequency = index.frequency(&candidate);
            (candidate, frequency)
        })
        .collect();

    let mut level = FrequentLevel::new(k);
    for (candidate, frequency) in counted {
        // A combination that never occurs is not frequent even at zero support.
        if frequency > 0 && frequency as f64 >= min_count {
            level.add_itemset(candidate, frequency);
        }
    }
    level
}
