use crate::data::Word;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The feedback given for one guessed letter.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LetterStatus {
    /// The letter is not in the word, or not in it as many times as it was guessed.
    #[default]
    Absent,
    /// The letter is in the word, but somewhere else.
    PresentWrongPosition,
    /// The letter is in the word at this location.
    PresentRightPosition,
}

/// Indicates that an error occurred while editing the puzzle or loading words.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum WordleError {
    /// A word did not have the required number of letters.
    #[error("the word {word:?} has {actual} letters, but {expected} are required")]
    LengthMismatch {
        word: String,
        expected: usize,
        actual: usize,
    },
    /// A row or column index was outside the puzzle grid.
    #[error("cell ({row}, {column}) is outside the {num_rows}x{word_length} grid")]
    OutOfRange {
        row: usize,
        column: usize,
        num_rows: usize,
        word_length: usize,
    },
    /// The words could not be read.
    #[error("failed to read words: {0}")]
    Io(String),
}

/// The words that are still consistent with the puzzle's feedback.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Candidates {
    /// At least one word matched, in word-list order.
    Matches(Vec<Word>),
    /// No word matched.
    NoMatches,
}

impl Candidates {
    /// Wraps the given words, using `NoMatches` if there are none.
    pub fn from_words(words: Vec<Word>) -> Candidates {
        if words.is_empty() {
            return Candidates::NoMatches;
        }
        Candidates::Matches(words)
    }

    /// The matching words. Empty for `NoMatches`.
    pub fn words(&self) -> &[Word] {
        match self {
            Candidates::Matches(words) => words,
            Candidates::NoMatches => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.words().len()
    }

    pub fn is_empty(&self) -> bool {
        self.words().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_from_no_words() {
        assert_eq!(Candidates::from_words(Vec::new()), Candidates::NoMatches);
    }

    #[test]
    fn candidates_empty_matches_agree_on_size() {
        let candidates = Candidates::Matches(Vec::new());

        assert!(candidates.is_empty());
        assert_eq!(candidates.len(), 0);
        assert!(candidates.words().is_empty());
    }
}
