//! # Letterboxed
//!
//! Finds two-word solutions to Letter Boxed puzzles.
//!
//! A puzzle is a square with three unique letters per side. Words are formed
//! by drawing lines between letters on different sides, and each word after
//! the first must start with the letter the previous word ended on. The goal
//! is to use every letter. This crate enumerates every pair of words that
//! does so.

pub mod dictionary;
pub mod puzzle;
pub mod solver;
pub mod word;

pub use dictionary::{Dictionary, DictionaryError};
pub use puzzle::{Puzzle, ValidationError, ValidationRule};
pub use solver::{find_combinations, is_playable, LetterboxedSolver, Solution};
pub use word::{LetterMask, Word};

/// Number of sides on a puzzle
pub const SIDE_COUNT: usize = 4;

/// Letters on each side
pub const SIDE_LENGTH: usize = 3;

/// Shortest playable word
pub const MIN_WORD_LENGTH: usize = 3;

/// Load the bundled dictionary
pub fn load_dictionary() -> Dictionary {
    Dictionary::embedded()
}
