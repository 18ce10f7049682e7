// PasswordGenerator: top-level integration point.
//
// Owns the transformation pipeline, the affix combinator and the multi-word
// combiner, and drives them through the two phases of a run:
//
//   SingleSeed -- every seed's variants, affixed, in seed order
//   MultiWord  -- affixed 2- and 3-word concatenations of the pooled variants
//
// One emission budget spans both phases. Every loop checks it before
// pulling more work, so hitting the ceiling stops the run at whatever
// nesting depth it happens in. The multi-word pool is only built if the
// single-seed phase finishes under the ceiling.

use std::fmt;

use log::{debug, info, warn};

use passmorph_core::Tables;
use passmorph_core::tables::DEFAULT_CEILING;

use crate::GenerateError;
use crate::affix::AffixCombinator;
use crate::budget::{EmissionBudget, Emitter};
use crate::combine::MultiWordCombiner;
use crate::pipeline::{TransformPipeline, standard_pipeline};
use crate::sink::CandidateSink;

/// Run limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Maximum number of candidates a run emits.
    pub ceiling: u64,
    /// Maximum multi-word pool size; exceeding it fails the run with
    /// [`GenerateError::PoolLimit`]. `None` leaves the pool unbounded.
    pub max_pool: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            ceiling: DEFAULT_CEILING,
            max_pool: None,
        }
    }
}

/// The two phases of a run, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    SingleSeed,
    MultiWord,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::SingleSeed => f.write_str("single-seed"),
            Phase::MultiWord => f.write_str("multi-word"),
        }
    }
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Both phases ran out of input.
    Exhausted,
    /// The emission count reached the ceiling.
    CeilingReached,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub emitted: u64,
    pub stop: StopReason,
}

/// Derives password candidates from seed words.
///
/// Output is fully determined by the seeds, their order and the tables.
pub struct PasswordGenerator {
    pipeline: TransformPipeline,
    affixes: AffixCombinator,
    multi_word: MultiWordCombiner,
    config: GeneratorConfig,
}

impl PasswordGenerator {
    /// Generator over the standard tables.
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_tables(&Tables::standard(), config)
    }

    pub fn with_tables(tables: &Tables, config: GeneratorConfig) -> Self {
        Self::from_parts(
            standard_pipeline(tables),
            AffixCombinator::from_tables(tables),
            config,
        )
    }

    /// Assemble a generator from an explicit pipeline and affix combinator.
    pub fn from_parts(
        pipeline: TransformPipeline,
        affixes: AffixCombinator,
        config: GeneratorConfig,
    ) -> Self {
        Self {
            pipeline,
            affixes,
            multi_word: MultiWordCombiner::new(config.max_pool),
            config,
        }
    }

    /// Run both phases, streaming candidates into `sink`.
    ///
    /// `sink.finish()` is called after the last candidate. On error the run
    /// stops immediately; whatever the sink already accepted stays there.
    pub fn run<S: AsRef<str>>(
        &self,
        seeds: &[S],
        sink: &mut dyn CandidateSink,
    ) -> Result<RunSummary, GenerateError> {
        let mut emitter = Emitter::new(EmissionBudget::new(self.config.ceiling), sink);
        info!(
            "generating from {} seed(s), ceiling {}",
            seeds.len(),
            self.config.ceiling
        );

        self.run_phase(Phase::SingleSeed, seeds, &mut emitter)?;
        if !emitter.should_abort() {
            self.run_phase(Phase::MultiWord, seeds, &mut emitter)?;
        }

        let emitted = emitter.budget().emitted();
        let stop = if emitter.should_abort() {
            warn!("ceiling of {} candidates reached", self.config.ceiling);
            StopReason::CeilingReached
        } else {
            StopReason::Exhausted
        };
        drop(emitter);
        sink.finish()?;

        info!("run finished: {emitted} candidates ({stop:?})");
        Ok(RunSummary { emitted, stop })
    }

    fn run_phase<S: AsRef<str>>(
        &self,
        phase: Phase,
        seeds: &[S],
        emitter: &mut Emitter<'_>,
    ) -> Result<(), GenerateError> {
        let start = emitter.budget().emitted();
        info!("{phase} phase started");
        match phase {
            Phase::SingleSeed => self.single_seed(seeds, emitter)?,
            Phase::MultiWord => {
                let pool = self.multi_word.build_pool(&self.pipeline, seeds)?;
                info!("multi-word pool holds {} variants", pool.len());
                self.multi_word.combine(&pool, &self.affixes, emitter)?;
            }
        }
        info!(
            "{phase} phase emitted {} candidates",
            emitter.budget().emitted() - start
        );
        Ok(())
    }

    fn single_seed<S: AsRef<str>>(
        &self,
        seeds: &[S],
        emitter: &mut Emitter<'_>,
    ) -> Result<(), GenerateError> {
        for seed in seeds {
            if emitter.should_abort() {
                return Ok(());
            }
            let seed = seed.as_ref();
            debug!("expanding seed {seed:?}");
            for variant in self.pipeline.variants(seed) {
                self.affixes.combine(&variant, emitter)?;
                if emitter.should_abort() {
                    return Ok(());
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::mutation::{Deletion, Doubling, Mutation, Reversal};
    use passmorph_core::{AffixTable, SubstitutionTable};

    fn config(ceiling: u64) -> GeneratorConfig {
        GeneratorConfig {
            ceiling,
            max_pool: None,
        }
    }

    /// No substitutions, no affixes, no keyboard walks: case expansion plus
    /// the given mutators.
    fn minimal(mutations: Vec<Box<dyn Mutation>>, ceiling: u64) -> PasswordGenerator {
        PasswordGenerator::from_parts(
            TransformPipeline::new(SubstitutionTable::empty(), mutations),
            AffixCombinator::new(AffixTable::new(&[""], &[""]), Vec::new()),
            config(ceiling),
        )
    }

    fn collect(generator: &PasswordGenerator, seeds: &[&str]) -> (Vec<String>, RunSummary) {
        let mut sink: Vec<String> = Vec::new();
        let summary = generator.run(seeds, &mut sink).unwrap();
        (sink, summary)
    }

    #[test]
    fn default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.ceiling, 100_000_000);
        assert_eq!(config.max_pool, None);
    }

    #[test]
    fn empty_seed_list_emits_nothing() {
        let generator = PasswordGenerator::new(GeneratorConfig::default());
        let (out, summary) = collect(&generator, &[]);
        assert!(out.is_empty());
        assert_eq!(
            summary,
            RunSummary {
                emitted: 0,
                stop: StopReason::Exhausted
            }
        );
    }

    #[test]
    fn ceiling_of_five_emits_exactly_five() {
        let generator = PasswordGenerator::new(config(5));
        let (out, summary) = collect(&generator, &["ab"]);
        assert_eq!(out, vec!["ab", "ab!", "ab@", "ab#", "ab$"]);
        assert_eq!(summary.emitted, 5);
        assert_eq!(summary.stop, StopReason::CeilingReached);
    }

    #[test]
    fn ceiling_inside_keyboard_joins() {
        let generator = PasswordGenerator::new(config(481));
        let (out, _) = collect(&generator, &["ab"]);
        assert_eq!(out.len(), 481);
        assert_eq!(out[480], "abqwerty");
    }

    #[test]
    fn zero_ceiling_emits_nothing() {
        let generator = PasswordGenerator::new(config(0));
        let (out, summary) = collect(&generator, &["ab"]);
        assert!(out.is_empty());
        assert_eq!(summary.stop, StopReason::CeilingReached);
    }

    #[test]
    fn exhaustive_run_of_single_letter() {
        let generator = minimal(vec![Box::new(Reversal), Box::new(Deletion), Box::new(Doubling)], 1_000);
        let (out, summary) = collect(&generator, &["a"]);
        // Single-seed: "a" -> a, a, "", aa; "A" -> A, A, "", AA.
        assert_eq!(&out[..8], &["a", "a", "", "aa", "A", "A", "", "AA"]);
        // Pool: a, "", aa, A, AA -> 5 * 4 pairs + 5 * 4 * 3 triples.
        assert_eq!(out.len(), 8 + 20 + 60);
        assert_eq!(out[8], "a");
        assert_eq!(out[9], "aaa");
        assert_eq!(
            summary,
            RunSummary {
                emitted: 88,
                stop: StopReason::Exhausted
            }
        );
    }

    #[test]
    fn ceiling_in_multi_word_phase() {
        let generator = minimal(Vec::new(), 5);
        // Single-seed: x, X, y, Y. Pool: x, X, y, Y.
        let (out, summary) = collect(&generator, &["x", "y"]);
        assert_eq!(out, vec!["x", "X", "y", "Y", "xX"]);
        assert_eq!(summary.stop, StopReason::CeilingReached);
    }

    #[test]
    fn ceiling_in_single_seed_phase_skips_pool() {
        let generator = PasswordGenerator::from_parts(
            TransformPipeline::new(SubstitutionTable::empty(), Vec::new()),
            AffixCombinator::new(AffixTable::new(&[""], &[""]), Vec::new()),
            GeneratorConfig {
                ceiling: 3,
                max_pool: Some(0),
            },
        );
        // A pool limit of zero would fail if the pool were built.
        let (out, summary) = collect(&generator, &["ab"]);
        assert_eq!(out, vec!["ab", "aB", "Ab"]);
        assert_eq!(summary.stop, StopReason::CeilingReached);
    }

    #[test]
    fn pool_limit_fails_run() {
        let generator = PasswordGenerator::from_parts(
            TransformPipeline::new(SubstitutionTable::empty(), Vec::new()),
            AffixCombinator::new(AffixTable::new(&[""], &[""]), Vec::new()),
            GeneratorConfig {
                ceiling: 1_000,
                max_pool: Some(3),
            },
        );
        let mut sink: Vec<String> = Vec::new();
        let err = generator.run(&["ab"], &mut sink).unwrap_err();
        assert!(err.is_resource_exhaustion());
        // Single-seed output landed before the failure.
        assert_eq!(sink.len(), 4);
    }

    /// Accepts `left` candidates, then fails every write.
    struct FailAfter {
        left: usize,
        accepted: Vec<String>,
        finished: bool,
    }

    impl CandidateSink for FailAfter {
        fn accept(&mut self, candidate: &str) -> io::Result<()> {
            if self.left == 0 {
                return Err(io::Error::other("disk full"));
            }
            self.left -= 1;
            self.accepted.push(candidate.to_string());
            Ok(())
        }

        fn finish(&mut self) -> io::Result<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn sink_failure_stops_run() {
        let generator = PasswordGenerator::new(GeneratorConfig::default());
        let mut sink = FailAfter {
            left: 7,
            accepted: Vec::new(),
            finished: false,
        };
        let err = generator.run(&["ab"], &mut sink).unwrap_err();
        assert!(matches!(err, GenerateError::Sink(_)));
        assert!(!err.is_resource_exhaustion());
        assert_eq!(sink.accepted.len(), 7);
        assert_eq!(sink.accepted[..5], ["ab", "ab!", "ab@", "ab#", "ab$"]);
        assert!(!sink.finished);
    }

    #[test]
    fn runs_are_deterministic() {
        let generator = PasswordGenerator::new(config(20_000));
        let (first, _) = collect(&generator, &["cat", "dog"]);
        let (second, _) = collect(&generator, &["cat", "dog"]);
        assert_eq!(first.len(), 20_000);
        assert_eq!(first, second);
    }

    #[test]
    fn seed_order_changes_order_not_first_variant_set() {
        let generator = minimal(Vec::new(), 1_000);
        let (forward, _) = collect(&generator, &["p", "q"]);
        let (backward, _) = collect(&generator, &["q", "p"]);
        assert_eq!(forward.len(), backward.len());
        let mut a = forward.clone();
        let mut b = backward.clone();
        a.sort();
        b.sort();
        assert_eq!(a, b);
        assert_ne!(forward, backward);
    }

    #[test]
    fn phase_display() {
        assert_eq!(Phase::SingleSeed.to_string(), "single-seed");
        assert_eq!(Phase::MultiWord.to_string(), "multi-word");
    }
}
