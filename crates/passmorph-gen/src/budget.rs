// Emission budget: the single run-wide counter and the gate every candidate
// passes through on its way to the sink.

use crate::GenerateError;
use crate::sink::CandidateSink;

/// Counts emitted candidates against a fixed ceiling.
///
/// Every stage that emits checks `should_abort()` before doing more work,
/// so the run stops at every nesting level as soon as the ceiling is hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmissionBudget {
    ceiling: u64,
    emitted: u64,
}

impl EmissionBudget {
    pub fn new(ceiling: u64) -> Self {
        Self {
            ceiling,
            emitted: 0,
        }
    }

    /// Returns `true` once no further candidate may be emitted.
    #[inline]
    pub fn should_abort(&self) -> bool {
        self.emitted >= self.ceiling
    }

    /// Count one emission. Returns `false`, without counting, if the
    /// ceiling was already reached.
    #[inline]
    pub fn charge(&mut self) -> bool {
        if self.should_abort() {
            return false;
        }
        self.emitted += 1;
        true
    }

    pub fn emitted(&self) -> u64 {
        self.emitted
    }
}

/// Couples the budget with the sink. Candidates reach the sink only through
/// [`Emitter::emit`], which refuses anything past the ceiling.
pub struct Emitter<'s> {
    budget: EmissionBudget,
    sink: &'s mut dyn CandidateSink,
}

impl<'s> Emitter<'s> {
    pub fn new(budget: EmissionBudget, sink: &'s mut dyn CandidateSink) -> Self {
        Self { budget, sink }
    }

    /// Hand one candidate to the sink and charge it.
    ///
    /// Writes nothing once the ceiling is reached. A sink failure is
    /// returned as is; the candidate is not charged.
    pub fn emit(&mut self, candidate: &str) -> Result<(), GenerateError> {
        if self.budget.should_abort() {
            return Ok(());
        }
        self.sink.accept(candidate)?;
        self.budget.charge();
        Ok(())
    }

    #[inline]
    pub fn should_abort(&self) -> bool {
        self.budget.should_abort()
    }

    pub fn budget(&self) -> &EmissionBudget {
        &self.budget
    }
}
