//! Word normalization and letter masks.
//!
//! Every word the solver touches, dictionary entries and the puzzle's own
//! letters alike, is reduced to lowercase ASCII letters and paired with a
//! 26-bit presence mask so coverage checks become single bitwise operations.

/// Bit `i` is set iff letter `'a' + i` is present.
pub type LetterMask = u32;

/// A normalized word and the set of letters it contains.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    letters: String,
    mask: LetterMask,
}

impl Word {
    /// Normalize `text` into a word.
    ///
    /// Anything that is not an ASCII letter is dropped and the rest is
    /// lowercased. Never fails: empty input gives an empty word with a
    /// zero mask.
    pub fn encode(text: &str) -> Self {
        let letters: String = text
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let mask = letters_mask(&letters);
        Self { letters, mask }
    }

    pub fn letters(&self) -> &str {
        &self.letters
    }

    pub fn mask(&self) -> LetterMask {
        self.mask
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn first_letter(&self) -> Option<char> {
        self.letters.chars().next()
    }

    pub fn last_letter(&self) -> Option<char> {
        self.letters.chars().last()
    }

    /// True if every letter of this word also appears in `mask`.
    pub fn is_subset_of(&self, mask: LetterMask) -> bool {
        self.mask & mask == self.mask
    }

    /// True if this word, together with `other`, contains every letter in `target`.
    pub fn covers_with(&self, other: &Word, target: LetterMask) -> bool {
        (self.mask | other.mask) & target == target
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.letters)
    }
}

/// Bit for a single lowercase ASCII letter, or 0 for anything else.
pub fn letter_bit(c: char) -> LetterMask {
    if c.is_ascii_lowercase() {
        1 << (c as u8 - b'a')
    } else {
        0
    }
}

fn letters_mask(letters: &str) -> LetterMask {
    letters.chars().fold(0, |mask, c| mask | letter_bit(c))
}
