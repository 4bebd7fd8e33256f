//! Puzzle parsing and validation.
//!
//! A puzzle is written as four comma-separated sides of three letters each,
//! e.g. `RKM,UIC,PHG,NAY`. Input is case-insensitive and whitespace around
//! each side is ignored.

use crate::word::{letter_bit, LetterMask, Word};
use crate::{SIDE_COUNT, SIDE_LENGTH};
use std::str::FromStr;
use thiserror::Error;

/// Separator between sides in a puzzle string.
pub const SIDE_DELIMITER: char = ',';

/// The first validation rule a puzzle string broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    SideCount,
    SideLength,
    NonLetter,
    RepeatedLetter,
}

impl ValidationRule {
    pub fn description(self) -> &'static str {
        match self {
            ValidationRule::SideCount => "Puzzle must have 4 sides.",
            ValidationRule::SideLength => "Each side of the puzzle must have 3 letters.",
            ValidationRule::NonLetter => "Puzzle can consist only of letters and commas.",
            ValidationRule::RepeatedLetter => "Puzzle can't have repeating letters",
        }
    }
}

impl std::fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// A puzzle string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid puzzle: {spec}\n{rule}")]
pub struct ValidationError {
    pub rule: ValidationRule,
    pub spec: String,
}

/// A validated four-sided puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    sides: Vec<String>,
    full: Word,
}

impl Puzzle {
    /// Parse and validate a puzzle string.
    ///
    /// Rules are checked in order and only the first failure is reported:
    /// side count, side length, letters only, then twelve distinct letters.
    pub fn parse(spec: &str) -> Result<Self, ValidationError> {
        let sides: Vec<String> = spec
            .to_lowercase()
            .split(SIDE_DELIMITER)
            .map(|side| side.trim().to_string())
            .collect();

        if let Some(rule) = Self::first_broken_rule(&sides) {
            return Err(ValidationError {
                rule,
                spec: spec.to_string(),
            });
        }

        let full = Word::encode(&sides.concat());
        Ok(Self { sides, full })
    }

    fn first_broken_rule(sides: &[String]) -> Option<ValidationRule> {
        if sides.len() != SIDE_COUNT {
            return Some(ValidationRule::SideCount);
        }
        if sides.iter().any(|side| side.chars().count() != SIDE_LENGTH) {
            return Some(ValidationRule::SideLength);
        }
        if sides
            .iter()
            .any(|side| !side.chars().all(|c| c.is_ascii_alphabetic()))
        {
            return Some(ValidationRule::NonLetter);
        }

        let mut seen: LetterMask = 0;
        for c in sides.iter().flat_map(|side| side.chars()) {
            let bit = letter_bit(c);
            if seen & bit != 0 {
                return Some(ValidationRule::RepeatedLetter);
            }
            seen |= bit;
        }
        None
    }

    pub fn sides(&self) -> &[String] {
        &self.sides
    }

    /// All twelve puzzle letters as one word.
    pub fn full(&self) -> &Word {
        &self.full
    }

    pub fn full_mask(&self) -> LetterMask {
        self.full.mask()
    }

    /// Zero-based index of the first side holding `letter`, or `None` if the
    /// letter is not part of the puzzle.
    pub fn side_of(&self, letter: char) -> Option<usize> {
        self.sides.iter().position(|side| side.contains(letter))
    }
}

impl FromStr for Puzzle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Puzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, side) in self.sides.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", SIDE_DELIMITER)?;
            }
            write!(f, "{}", side.to_uppercase())?;
        }
        Ok(())
    }
}
