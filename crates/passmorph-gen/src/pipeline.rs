// Transformation pipeline: substitution -> casing -> structural mutators
//
// For one seed, every substituted spelling is case-expanded. A cased variant
// that was not seen before during this seed's run is emitted together with
// all of its structural mutations, in the pipeline's mutator order. The
// dedup set lives inside the per-seed iterator and is dropped with it.

use hashbrown::HashSet;

use passmorph_core::{SubstitutionTable, Tables};

use crate::expand::{CartesianProduct, case_variants, substitution_variants};
use crate::mutation::{
    Deletion, Doubling, Insertion, Mutation, Reversal, SeparatorInjection,
};

/// Holds the substitution table and the ordered structural mutators.
pub struct TransformPipeline {
    substitutions: SubstitutionTable,
    mutations: Vec<Box<dyn Mutation>>,
}

impl TransformPipeline {
    pub fn new(substitutions: SubstitutionTable, mutations: Vec<Box<dyn Mutation>>) -> Self {
        Self {
            substitutions,
            mutations,
        }
    }

    /// Lazily enumerate every variant of `seed`.
    pub fn variants(&self, seed: &str) -> SeedVariants<'_> {
        SeedVariants {
            pipeline: self,
            substitutions: substitution_variants(seed, &self.substitutions),
            casings: None,
            seen: HashSet::new(),
            pending: Vec::new().into_iter(),
        }
    }

    /// Number of strings emitted for one new cased variant of `len`
    /// characters: the variant itself plus every mutation.
    pub fn batch_size(&self, len: usize) -> usize {
        1 + self
            .mutations
            .iter()
            .map(|m| m.output_count(len))
            .sum::<usize>()
    }
}

/// Build the standard pipeline from the fixed tables.
///
/// Mutator order: reversal, insertion, deletion, doubling, separator
/// injection.
pub fn standard_pipeline(tables: &Tables) -> TransformPipeline {
    let mutations: Vec<Box<dyn Mutation>> = vec![
        Box::new(Reversal),
        Box::new(Insertion {
            characters: tables.insert_chars.clone(),
        }),
        Box::new(Deletion),
        Box::new(Doubling),
        Box::new(SeparatorInjection {
            separators: tables.separators.clone(),
        }),
    ];
    TransformPipeline::new(tables.substitutions.clone(), mutations)
}

/// Lazy variant stream for a single seed.
///
/// Holds at most one batch of pending mutations plus the local dedup set,
/// which grows with the number of distinct cased variants.
pub struct SeedVariants<'p> {
    pipeline: &'p TransformPipeline,
    substitutions: CartesianProduct,
    casings: Option<CartesianProduct>,
    /// Cased variants already expanded for this seed.
    seen: HashSet<String>,
    pending: std::vec::IntoIter<String>,
}

impl SeedVariants<'_> {
    /// Number of distinct cased variants reached so far.
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    /// Pull the next cased variant not yet seen, advancing the substitution
    /// product whenever the current casing run is exhausted.
    fn next_unseen(&mut self) -> Option<String> {
        loop {
            if let Some(casings) = self.casings.as_mut() {
                for cased in casings.by_ref() {
                    if !self.seen.contains(cased.as_str()) {
                        self.seen.insert(cased.clone());
                        return Some(cased);
                    }
                }
            }
            let substituted = self.substitutions.next()?;
            self.casings = Some(case_variants(&substituted));
        }
    }

    fn fill(&mut self, cased: String) {
        let chars: Vec<char> = cased.chars().collect();
        let mut batch = Vec::with_capacity(self.pipeline.batch_size(chars.len()));
        batch.push(cased);
        for mutation in &self.pipeline.mutations {
            mutation.mutate(&chars, &mut batch);
        }
        self.pending = batch.into_iter();
    }
}

impl Iterator for SeedVariants<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(variant) = self.pending.next() {
                return Some(variant);
            }
            let cased = self.next_unseen()?;
            self.fill(cased);
        }
    }
}
