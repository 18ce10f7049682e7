// Fixed mutation tables: look-alike substitutions, affixes, keyboard walks,
// insertion filler and separators.
//
// All tables are ordered. Order matters: it fixes the order in which the
// generator emits candidates, and the output is expected to be byte-identical
// between runs.

use hashbrown::HashMap;

use crate::TableError;
use crate::character::single_lower;

// =========================================================================
// Table data
// =========================================================================

/// Look-alike substitutions per lowercase character. Each pool starts with
/// the character itself.
const SUBSTITUTIONS: &[(char, &[&str])] = &[
    ('a', &["a", "@", "4", "^", "A"]),
    ('b', &["b", "8", "B"]),
    ('c', &["c", "(", "<", "{", "C"]),
    ('d', &["d", "D"]),
    ('e', &["e", "3", "E", "\u{20AC}"]),
    ('f', &["f", "F"]),
    ('g', &["g", "9", "6", "G"]),
    ('h', &["h", "#", "H"]),
    ('i', &["i", "1", "!", "|", "I"]),
    ('j', &["j", "J"]),
    ('k', &["k", "K"]),
    ('l', &["l", "1", "|", "L", "\u{00A3}"]),
    ('m', &["m", "M", "|\\/|"]),
    ('n', &["n", "N"]),
    ('o', &["o", "0", "O", "()", "*"]),
    ('p', &["p", "P"]),
    ('q', &["q", "Q"]),
    ('r', &["r", "R"]),
    ('s', &["s", "$", "5", "S"]),
    ('t', &["t", "7", "+", "T"]),
    ('u', &["u", "v", "U", "|_|"]),
    ('v', &["v", "V", "u"]),
    ('w', &["w", "W"]),
    ('x', &["x", "%", "X"]),
    ('y', &["y", "Y"]),
    ('z', &["z", "2", "Z"]),
];

/// Prefixes, starting with the no-op prefix.
const PREFIXES: &[&str] = &[
    "", "!", "@", "#", "$", "%", "&", "*", "my", "the", "real", "its", "admin", "user", "pro",
    "ultra", "super", "mr", "mrs", "dr",
];

/// Suffixes, starting with the no-op suffix.
const SUFFIXES: &[&str] = &[
    "", "!", "@", "#", "$", "%", "&", "*", "123", "1234", "12345", "007", "2020", "2021", "2022",
    "2023", "2024", "2025", "2026", "69", "420", "666", "777", "321",
];

/// Keyboard walks appended and prepended to every variant.
const KEYBOARD_PATTERNS: &[&str] = &[
    "qwerty", "asdf", "zxcv", "1q2w3e", "123qwe", "!@#$", "password", "letmein",
];

/// Filler characters for single-character insertion: digits, then symbols.
const INSERT_CHARS: &str = "0123456789!@#$%^&*._-";

/// Separators placed between every pair of adjacent characters.
const SEPARATORS: &[char] = &['.', '_', '-', '!', '@'];

/// Maximum number of candidates a run may emit.
pub const DEFAULT_CEILING: u64 = 100_000_000;

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// =========================================================================
// SubstitutionTable
// =========================================================================

/// Maps a lowercase character to its ordered pool of replacement strings.
///
/// Lookup is case-insensitive. A character without an entry has no pool;
/// callers treat it as the singleton pool of itself.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionTable {
    pools: HashMap<char, Vec<String>>,
}

impl SubstitutionTable {
    /// The standard look-alike table.
    pub fn standard() -> Self {
        Self::build(SUBSTITUTIONS)
    }

    /// A table with no entries: every character maps to itself.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from caller-supplied entries.
    ///
    /// Keys must be lowercase and every pool must be non-empty. A later entry
    /// for the same key replaces an earlier one.
    pub fn from_entries(entries: &[(char, &[&str])]) -> Result<Self, TableError> {
        for &(key, pool) in entries {
            if pool.is_empty() {
                return Err(TableError::EmptyPool(key));
            }
            if single_lower(key) != Some(key) {
                return Err(TableError::UppercaseKey(key));
            }
        }
        Ok(Self::build(entries))
    }

    fn build(entries: &[(char, &[&str])]) -> Self {
        let pools = entries
            .iter()
            .map(|&(key, pool)| (key, owned(pool)))
            .collect();
        Self { pools }
    }

    /// The replacement pool for `c`, looked up by its lowercase form.
    pub fn pool(&self, c: char) -> Option<&[String]> {
        single_lower(c)
            .and_then(|key| self.pools.get(&key))
            .map(Vec::as_slice)
    }

    /// Number of characters with an entry.
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}

// =========================================================================
// AffixTable
// =========================================================================

/// Ordered prefix and suffix lists for the affix cross-product.
#[derive(Debug, Clone)]
pub struct AffixTable {
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
}

impl AffixTable {
    pub fn standard() -> Self {
        Self::new(PREFIXES, SUFFIXES)
    }

    pub fn new(prefixes: &[&str], suffixes: &[&str]) -> Self {
        Self {
            prefixes: owned(prefixes),
            suffixes: owned(suffixes),
        }
    }

    /// Number of candidates the cross-product yields per variant.
    pub fn combinations(&self) -> usize {
        self.prefixes.len() * self.suffixes.len()
    }
}

impl Default for AffixTable {
    fn default() -> Self {
        Self::standard()
    }
}

// =========================================================================
// Tables
// =========================================================================

/// Every fixed table the generator reads.
#[derive(Debug, Clone)]
pub struct Tables {
    pub substitutions: SubstitutionTable,
    pub affixes: AffixTable,
    pub keyboard_patterns: Vec<String>,
    pub insert_chars: Vec<char>,
    pub separators: Vec<char>,
}

impl Tables {
    /// The standard tables used by the command-line generator.
    pub fn standard() -> Self {
        Self {
            substitutions: SubstitutionTable::standard(),
            affixes: AffixTable::standard(),
            keyboard_patterns: owned(KEYBOARD_PATTERNS),
            insert_chars: INSERT_CHARS.chars().collect(),
            separators: SEPARATORS.to_vec(),
        }
    }
}

impl Default for Tables {
    fn default() -> Self {
        Self::standard()
    }
}
