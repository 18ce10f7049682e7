// Multi-word combiner
//
// Materializes each seed's distinct variants into one shared pool, then
// concatenates every ordered selection of 2 and 3 pool entries and hands it
// to the affix combinator. Only the pool is materialized; selections are
// enumerated lazily.

use std::hash::BuildHasher;
use std::ops::RangeInclusive;

use hashbrown::{DefaultHashBuilder, HashTable};
use log::{debug, info};

use crate::GenerateError;
use crate::affix::AffixCombinator;
use crate::budget::Emitter;
use crate::permutation::Permutations;
use crate::pipeline::TransformPipeline;

/// Selection sizes, in enumeration order.
pub const COMBINATION_WIDTHS: RangeInclusive<usize> = 2..=3;

/// Builds the cross-seed pool and enumerates the multi-word combinations.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiWordCombiner {
    /// Upper bound on the pool size; `None` leaves it unbounded.
    pub max_pool: Option<usize>,
}

impl MultiWordCombiner {
    pub fn new(max_pool: Option<usize>) -> Self {
        Self { max_pool }
    }

    /// Collect the distinct variants of every seed, seed by seed.
    ///
    /// Each seed's variants are deduplicated in first-seen order. Seeds are
    /// appended without deduplicating across them, so a variant reachable
    /// from two seeds appears twice.
    ///
    /// The per-seed dedup index stores pool positions, not strings. Both the
    /// pool and the index reserve before growing, so allocation failure in
    /// either is reported instead of aborting.
    pub fn build_pool<S: AsRef<str>>(
        &self,
        pipeline: &TransformPipeline,
        seeds: &[S],
    ) -> Result<Vec<String>, GenerateError> {
        let hasher = DefaultHashBuilder::default();
        let mut pool: Vec<String> = Vec::new();
        for seed in seeds {
            let seed = seed.as_ref();
            let before = pool.len();
            // Indices into `pool`, restricted to this seed's entries.
            let mut seen: HashTable<usize> = HashTable::new();
            for variant in pipeline.variants(seed) {
                let hash = hasher.hash_one(variant.as_str());
                if seen.find(hash, |&i| pool[i] == variant).is_some() {
                    continue;
                }
                if let Some(limit) = self.max_pool {
                    if pool.len() >= limit {
                        return Err(GenerateError::PoolLimit { limit });
                    }
                }
                pool.try_reserve(1)?;
                seen
                    .try_reserve(1, |&i| hasher.hash_one(pool[i].as_str()))
                    .map_err(GenerateError::PoolIndexAllocation)?;
                seen.insert_unique(hash, pool.len(), |&i| hasher.hash_one(pool[i].as_str()));
                pool.push(variant);
            }
            debug!("seed {seed:?}: {} distinct variants pooled", pool.len() - before);
        }
        Ok(pool)
    }

    /// Emit the affixed concatenation of every 2- and 3-entry selection.
    pub fn combine(
        &self,
        pool: &[String],
        affixes: &AffixCombinator,
        emitter: &mut Emitter<'_>,
    ) -> Result<(), GenerateError> {
        let mut joined = String::new();
        for width in COMBINATION_WIDTHS {
            match Permutations::<String>::count_total(pool.len(), width) {
                Some(total) => info!("combining {width} words: {total} selections"),
                None => info!("combining {width} words: selection count overflows usize"),
            }
            for selection in Permutations::new(pool, width) {
                if emitter.should_abort() {
                    return Ok(());
                }
                joined.clear();
                for part in selection {
                    joined.push_str(part);
                }
                affixes.combine(&joined, emitter)?;
            }
        }
        Ok(())
    }
}
