//! Two-word Letter Boxed solver.
//!
//! A word is playable when it is long enough, uses only puzzle letters, and
//! never takes two consecutive letters from the same side. A solution is a
//! pair of playable words where the second starts with the last letter of
//! the first and together they use every letter of the puzzle.

use crate::dictionary::Dictionary;
use crate::puzzle::Puzzle;
use crate::word::{LetterMask, Word};
use crate::MIN_WORD_LENGTH;

/// A two-word chain that uses every puzzle letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    pub first: String,
    pub second: String,
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first, self.second)
    }
}

/// Check whether `word` can be drawn on `puzzle`.
pub fn is_playable(word: &Word, puzzle: &Puzzle) -> bool {
    if word.len() < MIN_WORD_LENGTH {
        return false;
    }
    if !word.is_subset_of(puzzle.full_mask()) {
        return false;
    }

    let letters: Vec<char> = word.letters().chars().collect();
    letters
        .windows(2)
        .all(|pair| puzzle.side_of(pair[0]) != puzzle.side_of(pair[1]))
}

/// Pair every playable word with every other playable word it chains into.
///
/// Results follow the order of `playable`, outer loop first. A word may pair
/// with itself.
pub fn find_combinations(playable: &[Word], full_mask: LetterMask) -> Vec<Solution> {
    playable
        .iter()
        .flat_map(|first| {
            playable
                .iter()
                .filter(move |second| chains_into(first, second, full_mask))
                .map(move |second| Solution {
                    first: first.letters().to_string(),
                    second: second.letters().to_string(),
                })
        })
        .collect()
}

fn chains_into(first: &Word, second: &Word, full_mask: LetterMask) -> bool {
    match (first.last_letter(), second.first_letter()) {
        (Some(last), Some(start)) => last == start && first.covers_with(second, full_mask),
        _ => false,
    }
}

/// Solver for a single puzzle.
#[derive(Debug, Clone)]
pub struct LetterboxedSolver {
    puzzle: Puzzle,
    playable: Vec<Word>,
}

impl LetterboxedSolver {
    /// Narrow `dictionary` down to the words playable on `puzzle`.
    pub fn new(puzzle: Puzzle, dictionary: &Dictionary) -> Self {
        let playable: Vec<Word> = dictionary
            .words()
            .iter()
            .filter(|word| is_playable(word, &puzzle))
            .cloned()
            .collect();
        log::debug!(
            "{}: {} of {} words playable",
            puzzle,
            playable.len(),
            dictionary.len()
        );
        Self { puzzle, playable }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn playable(&self) -> &[Word] {
        &self.playable
    }

    pub fn playable_count(&self) -> usize {
        self.playable.len()
    }

    /// Find every two-word solution.
    pub fn solve(&self) -> Vec<Solution> {
        let solutions = find_combinations(&self.playable, self.puzzle.full_mask());
        log::info!("{}: {} solutions", self.puzzle, solutions.len());
        solutions
    }
}
