// Lazy k-permutations without replacement
//
// Selections come out in lexicographic order of pool indices:
// (0,1), (0,2), ..., (1,0), (1,2), ... The enumeration keeps one index
// array and one countdown per selected position, so memory stays O(n)
// while the number of selections grows as n! / (n - k)!.

use std::iter::FusedIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Fresh,
    Running,
    Done,
}

/// Ordered selections of `k` distinct positions from `pool`.
///
/// Equal values at different positions are distinct elements: a pool with a
/// duplicate string yields selections that concatenate to the same text.
pub struct Permutations<'a, T> {
    pool: &'a [T],
    k: usize,
    /// Pool indices; the first `k` form the current selection.
    indices: Vec<usize>,
    /// Remaining swaps per selected position before it rotates.
    cycles: Vec<usize>,
    state: State,
}

impl<'a, T> Permutations<'a, T> {
    pub fn new(pool: &'a [T], k: usize) -> Self {
        let n = pool.len();
        let state = if k > n { State::Done } else { State::Fresh };
        Self {
            pool,
            k,
            indices: (0..n).collect(),
            cycles: (0..k.min(n)).map(|i| n - i).collect(),
            state,
        }
    }

    /// Total number of selections, or `None` on overflow.
    pub fn count_total(pool_len: usize, k: usize) -> Option<usize> {
        if k > pool_len {
            return Some(0);
        }
        (pool_len - k + 1..=pool_len).try_fold(1usize, |acc, f| acc.checked_mul(f))
    }

    fn current(&self) -> Vec<&'a T> {
        self.indices[..self.k].iter().map(|&i| &self.pool[i]).collect()
    }

    fn advance(&mut self) -> bool {
        let n = self.pool.len();
        for i in (0..self.k).rev() {
            self.cycles[i] -= 1;
            if self.cycles[i] == 0 {
                self.indices[i..].rotate_left(1);
                self.cycles[i] = n - i;
            } else {
                let j = self.cycles[i];
                self.indices.swap(i, n - j);
                return true;
            }
        }
        false
    }
}

impl<'a, T> Iterator for Permutations<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Vec<&'a T>> {
        match self.state {
            State::Done => None,
            State::Fresh => {
                self.state = State::Running;
                Some(self.current())
            }
            State::Running => {
                if self.advance() {
                    Some(self.current())
                } else {
                    self.state = State::Done;
                    None
                }
            }
        }
    }
}

impl<T> FusedIterator for Permutations<'_, T> {}
