/// Flat storage for itemsets of one size together with their frequencies.
#[derive(Debug, Clone, Default)]
pub struct ItemsetStorage {
    items: Vec<usize>,
    offsets: Vec<(usize, usize)>,
    frequencies: Vec<usize>,
}

/// Frequent itemsets discovered at one level of the search.
#[derive(Debug, Clone)]
pub struct FrequentLevel {
    storage: ItemsetStorage,
    pub itemset_size: usize,
}

impl ItemsetStorage {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_itemset(&mut self, mut items: Vec<usize>, frequency: usize) {
        items.sort_unstable();
        items.dedup();
        let start = self.items.len();
        self.items.extend_from_slice(&items);
        self.offsets.push((start, items.len()));
        self.frequencies.push(frequency);
    }

    pub(crate) fn get_itemset(&self, idx: usize) -> &[usize] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub(crate) fn frequency(&self, idx: usize) -> usize {
        self.frequencies[idx]
    }

    pub(crate) fn len(&self) -> usize {
        self.offsets.len()
    }
}

impl FrequentLevel {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            storage: ItemsetStorage::new(),
            itemset_size,
        }
    }

    pub fn add_itemset(&mut self, items: Vec<usize>, frequency: usize) -> usize {
        debug_assert_eq!(items.len(), self.itemset_size);
        self.storage.add_itemset(items, frequency);
        self.storage.len() - 1
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.len() == 0
    }

    pub fn get_itemset(&self, idx: usize) -> &[usize] {
        self.storage.get_itemset(idx)
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[usize]> {
        (0..self.storage.len()).map(move |idx| self.get_itemset(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[usize], usize)> {
        (0..self.storage.len()).map(move |idx| (self.get_itemset(idx), self.storage.frequency(idx)))
    }

    /// Distinct items appearing in any itemset of this level, ascending.
    pub fn items(&self) -> Vec<usize> {
        let mut items = self.storage.items.clone();
        items.sort_unstable();
        items.dedup();
        items
    }

    /// Itemsets are added in lexicographic order, so lookup is a binary search.
    fn position(&self, itemset: &[usize]) -> Option<usize> {
        let mut lo = 0;
        let mut hi = self.len();
        while lo < hi {
            let mid = (lo + hi) / 2;
            match self.get_itemset(mid).cmp(itemset) {
                std::cmp::Ordering::Less => lo = mid + 1,
                std::cmp::Ordering::Greater => hi = mid,
                std::cmp::Ordering::Equal => return Some(mid),
            }
        }
        None
    }
}

/// All frequent itemsets of a run, one [`FrequentLevel`] per itemset size
/// starting at size 1.
#[derive(Debug, Clone, Default)]
pub struct FrequentItemsets {
    levels: Vec<FrequentLevel>,
}

impl FrequentItemsets {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_level(&mut self, level: FrequentLevel) {
        debug_assert_eq!(level.itemset_size, self.levels.len() + 1);
        self.levels.push(level);
    }

    pub fn levels(&self) -> &[FrequentLevel] {
        &self.levels
    }

    pub fn level(&self, itemset_size: usize) -> Option<&FrequentLevel> {
        itemset_size.checked_sub(1).and_then(|idx| self.levels.get(idx))
    }

    pub fn len(&self) -> usize {
        self.levels.iter().map(FrequentLevel::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every frequent itemset with its frequency, level by level.
    pub fn iter(&self) -> impl Iterator<Item = (&[usize], usize)> {
        self.levels.iter().flat_map(FrequentLevel::iter)
    }

    /// Frequency of `itemset` if it was found frequent. `itemset` must be sorted.
    pub fn frequency(&self, itemset: &[usize]) -> Option<usize> {
        let level = self.level(itemset.len())?;
        level
            .position(itemset)
            .map(|idx| level.storage.frequency(idx))
    }

    pub fn contains(&self, itemset: &[usize]) -> bool {
        self.frequency(itemset).is_some()
    }
}
