//! Shared types for the passmorph candidate generator.
//!
//! - [`character`] -- letter classification and case forms
//! - [`tables`] -- the fixed substitution, affix, keyboard and filler tables

pub mod character;
pub mod tables;

pub use tables::{AffixTable, SubstitutionTable, Tables};

/// Error type for building a table from caller-supplied entries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("substitution pool for {0:?} is empty")]
    EmptyPool(char),
    #[error("substitution key {0:?} is not lowercase")]
    UppercaseKey(char),
}
