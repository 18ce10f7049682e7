// Structural mutators: each applies one class of edit to a word and appends
// the results, in a fixed order, to an output buffer.
//
// Mutators are independent of each other and of any dedup state. Their
// results may collide with each other or with earlier candidates; nothing
// here filters them.

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Trait for structural mutators.
///
/// `word` is a slice of Unicode scalar values so that positions can be
/// indexed directly.
pub trait Mutation {
    /// Append every mutation of `word` to `out`.
    fn mutate(&self, word: &[char], out: &mut Vec<String>);

    /// Number of strings `mutate` appends for a word of `len` characters.
    fn output_count(&self, len: usize) -> usize;
}

// ---------------------------------------------------------------------------
// Reversal
// ---------------------------------------------------------------------------

/// The word reversed.
pub struct Reversal;

impl Mutation for Reversal {
    fn mutate(&self, word: &[char], out: &mut Vec<String>) {
        out.push(word.iter().rev().collect());
    }

    fn output_count(&self, _len: usize) -> usize {
        1
    }
}

// ---------------------------------------------------------------------------
// Doubling
// ---------------------------------------------------------------------------

/// The word concatenated with itself.
pub struct Doubling;

impl Mutation for Doubling {
    fn mutate(&self, word: &[char], out: &mut Vec<String>) {
        out.push(word.iter().chain(word).collect());
    }

    fn output_count(&self, _len: usize) -> usize {
        1
    }
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

/// Insert each filler character at every position, including both ends.
///
/// Positions form the outer loop and characters the inner loop, so all
/// insertions at position 0 come first. Unlike spelling-correction insertion
/// no candidate is skipped, even when it repeats a neighbour.
pub struct Insertion {
    /// Filler characters, in emission order.
    pub characters: Vec<char>,
}

impl Mutation for Insertion {
    fn mutate(&self, word: &[char], out: &mut Vec<String>) {
        let mut buffer = String::with_capacity(word.len() + 4);
        for pos in 0..=word.len() {
            for &ins in &self.characters {
                buffer.clear();
                buffer.extend(&word[..pos]);
                buffer.push(ins);
                buffer.extend(&word[pos..]);
                out.push(buffer.clone());
            }
        }
    }

    fn output_count(&self, len: usize) -> usize {
        (len + 1) * self.characters.len()
    }
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

/// Delete the character at each position in turn.
pub struct Deletion;

impl Mutation for Deletion {
    fn mutate(&self, word: &[char], out: &mut Vec<String>) {
        for i in 0..word.len() {
            out.push(word[..i].iter().chain(&word[i + 1..]).collect());
        }
    }

    fn output_count(&self, len: usize) -> usize {
        len
    }
}

// ---------------------------------------------------------------------------
// SeparatorInjection
// ---------------------------------------------------------------------------

/// Join the characters of the word with each separator: "abc" -> "a.b.c".
///
/// An empty word yields one empty string per separator.
pub struct SeparatorInjection {
    pub separators: Vec<char>,
}

impl Mutation for SeparatorInjection {
    fn mutate(&self, word: &[char], out: &mut Vec<String>) {
        for &sep in &self.separators {
            let mut joined = String::with_capacity(word.len() * 2);
            for (i, &c) in word.iter().enumerate() {
                if i > 0 {
                    joined.push(sep);
                }
                joined.push(c);
            }
            out.push(joined);
        }
    }

    fn output_count(&self, _len: usize) -> usize {
        self.separators.len()
    }
}

// =========================================================================
// Tests
// =========================================================================
