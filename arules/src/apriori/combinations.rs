/// All `k`-combinations of `pool`, in lexicographic order of positions.
///
/// With `pool` sorted ascending every combination comes out sorted too.
pub fn k_combinations(pool: &[usize], k: usize) -> Vec<Vec<usize>> {
    let mut result = Vec::new();
    if k == 0 || k > pool.len() {
        return result;
    }

    let mut callback = |combination: &[usize]| result.push(combination.to_vec());
    generate_combinations_recursive(pool, k, 0, &mut Vec::with_capacity(k), &mut callback);
    result
}

pub(crate) fn generate_combinations_recursive<F>(
    items: &[usize],
    k: usize,
    start: usize,
    current: &mut Vec<usize>,
    callback: &mut F,
) where
    F: FnMut(&[usize]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    // Stop early once there are not enough items left to fill the combination.
    let remaining = k - current.len();
    for i in start..=items.len().saturating_sub(remaining) {
        current.push(items[i]);
        generate_combinations_recursive(items, k, i + 1, current, callback);
        current.pop();
    }
}

/// Number of index pairs `(i, j)` with `i < j < n`.
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}
