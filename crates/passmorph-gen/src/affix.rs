// Affix combinator: wraps each variant in every prefix/suffix pair, then
// joins it with every keyboard walk on both sides.

use passmorph_core::{AffixTable, Tables};

use crate::GenerateError;
use crate::budget::Emitter;

/// Emits the affix cross-product and keyboard-walk joins for a variant.
pub struct AffixCombinator {
    affixes: AffixTable,
    keyboard_patterns: Vec<String>,
}

impl AffixCombinator {
    pub fn new(affixes: AffixTable, keyboard_patterns: Vec<String>) -> Self {
        Self {
            affixes,
            keyboard_patterns,
        }
    }

    pub fn from_tables(tables: &Tables) -> Self {
        Self::new(tables.affixes.clone(), tables.keyboard_patterns.clone())
    }

    /// Number of candidates emitted per variant when the budget allows.
    pub fn candidates_per_variant(&self) -> usize {
        self.affixes.combinations() + 2 * self.keyboard_patterns.len()
    }

    /// Emit every candidate built from `variant`, stopping as soon as the
    /// budget is spent.
    ///
    /// Order: `prefix + variant + suffix` with prefixes outer and suffixes
    /// inner, then `variant + pattern` and `pattern + variant` for each
    /// keyboard pattern.
    pub fn combine(&self, variant: &str, emitter: &mut Emitter<'_>) -> Result<(), GenerateError> {
        let mut buffer = String::with_capacity(variant.len() + 16);

        for prefix in &self.affixes.prefixes {
            for suffix in &self.affixes.suffixes {
                if emitter.should_abort() {
                    return Ok(());
                }
                buffer.clear();
                buffer.push_str(prefix);
                buffer.push_str(variant);
                buffer.push_str(suffix);
                emitter.emit(&buffer)?;
            }
        }

        for pattern in &self.keyboard_patterns {
            for (head, tail) in [(variant, pattern.as_str()), (pattern.as_str(), variant)] {
                if emitter.should_abort() {
                    return Ok(());
                }
                buffer.clear();
                buffer.push_str(head);
                buffer.push_str(tail);
                emitter.emit(&buffer)?;
            }
        }
        Ok(())
    }
}
