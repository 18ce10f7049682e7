//! Candidate generation engine.
//!
//! Expands seed words into password candidates by chaining mutation stages
//! and streams the result into a [`CandidateSink`] until the input space is
//! exhausted or the emission ceiling is reached.
//!
//! # Architecture
//!
//! - [`expand`] -- lazy Cartesian products (substitution and case expansion)
//! - [`mutation`] -- structural mutators (reversal, insertion, deletion, ...)
//! - [`pipeline`] -- per-seed transformation pipeline with local dedup
//! - [`affix`] -- prefix/suffix cross-product and keyboard-walk joins
//! - [`permutation`] -- lazy k-permutations without replacement
//! - [`combine`] -- multi-word pool and 2-/3-word combinations
//! - [`budget`] -- emission counter and the gated emitter
//! - [`sink`] -- output seam
//! - [`generator`] -- top-level run over both phases

pub mod affix;
pub mod budget;
pub mod combine;
pub mod expand;
pub mod generator;
pub mod mutation;
pub mod permutation;
pub mod pipeline;
pub mod sink;

pub use budget::{EmissionBudget, Emitter};
pub use generator::{GeneratorConfig, PasswordGenerator, Phase, RunSummary, StopReason};
pub use pipeline::{TransformPipeline, standard_pipeline};
pub use sink::{CandidateSink, LineSink};

use std::collections::TryReserveError;

/// Error type for a generation run. Every variant is terminal.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The sink refused a candidate. Lines already accepted stay in place.
    #[error("failed to write candidate: {0}")]
    Sink(#[from] std::io::Error),

    /// The multi-word pool grew past the configured limit.
    #[error("multi-word pool exceeded the limit of {limit} variants")]
    PoolLimit { limit: usize },

    /// The multi-word pool could not grow.
    #[error("failed to grow multi-word pool: {0}")]
    PoolAllocation(#[from] TryReserveError),

    /// The per-seed dedup index of the multi-word pool could not grow.
    #[error("failed to grow multi-word dedup index: {0:?}")]
    PoolIndexAllocation(hashbrown::TryReserveError),
}

impl GenerateError {
    /// Returns `true` for failures caused by intermediate growth rather than
    /// by the sink.
    pub fn is_resource_exhaustion(&self) -> bool {
        matches!(
            self,
            Self::PoolLimit { .. } | Self::PoolAllocation(_) | Self::PoolIndexAllocation(_)
        )
    }
}
