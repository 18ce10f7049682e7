// Substitution and case expansion
//
// Both expanders are Cartesian products over one pool per character
// position. The product is enumerated lazily, odometer style: the rightmost
// position varies fastest and the leftmost slowest, and each pool is walked
// in the order given. Result sizes are exponential in the word length, so
// callers must never collect an expansion eagerly.

use std::iter::FusedIterator;

use passmorph_core::SubstitutionTable;
use passmorph_core::character::case_pool;

/// Lazy Cartesian product of ordered string pools, yielding the
/// concatenation of one entry per pool.
///
/// An empty pool list yields exactly one empty string. Any empty pool makes
/// the product empty.
#[derive(Debug, Clone)]
pub struct CartesianProduct {
    pools: Vec<Vec<String>>,
    /// Current entry index per pool.
    indices: Vec<usize>,
    done: bool,
}

impl CartesianProduct {
    pub fn new(pools: Vec<Vec<String>>) -> Self {
        let done = pools.iter().any(Vec::is_empty);
        let indices = vec![0; pools.len()];
        Self {
            pools,
            indices,
            done,
        }
    }

    /// Total number of products, or `None` if it does not fit in `usize`.
    pub fn size(&self) -> Option<usize> {
        self.pools
            .iter()
            .try_fold(1usize, |acc, pool| acc.checked_mul(pool.len()))
    }

    /// Step the odometer. Marks the product done after the last combination.
    fn advance(&mut self) {
        for pos in (0..self.pools.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.pools[pos].len() {
                return;
            }
            self.indices[pos] = 0;
        }
        self.done = true;
    }
}

impl Iterator for CartesianProduct {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        let item: String = self
            .pools
            .iter()
            .zip(&self.indices)
            .map(|(pool, &i)| pool[i].as_str())
            .collect();
        self.advance();
        Some(item)
    }
}

impl FusedIterator for CartesianProduct {}

/// Every look-alike spelling of `word`.
///
/// Characters are looked up case-insensitively; a character without an entry
/// contributes only itself.
pub fn substitution_variants(word: &str, table: &SubstitutionTable) -> CartesianProduct {
    let pools = word
        .chars()
        .map(|c| match table.pool(c) {
            Some(pool) => pool.to_vec(),
            None => vec![c.to_string()],
        })
        .collect();
    CartesianProduct::new(pools)
}

/// Every upper/lower casing of the letters in `word`. Non-letters stay fixed.
pub fn case_variants(word: &str) -> CartesianProduct {
    CartesianProduct::new(word.chars().map(case_pool).collect())
}
