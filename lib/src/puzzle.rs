use crate::data::*;
use crate::restrictions::*;
use crate::results::*;
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of guesses in a classic puzzle.
pub const DEFAULT_NUM_ROWS: usize = 6;
/// The length of the words in a classic puzzle.
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// One letter of a guess, along with the feedback it received.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    location: usize,
    letter: Option<char>,
    status: LetterStatus,
}

impl Cell {
    /// Creates an empty cell at the given zero-based location.
    pub fn new(location: usize) -> Cell {
        Cell {
            location,
            letter: None,
            status: LetterStatus::default(),
        }
    }

    pub fn location(&self) -> usize {
        self.location
    }

    /// The letter exactly as it was entered, if any.
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    pub fn status(&self) -> LetterStatus {
        self.status
    }

    /// The lower-cased letter, or `None` if the cell does not hold an alphabetic letter.
    pub fn normalized_letter(&self) -> Option<char> {
        self.letter
            .filter(|letter| letter.is_alphabetic())
            .map(normalize_letter)
    }
}

/// A single guess: one cell per letter of the word.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// Creates an empty row for words of the given length.
    pub fn new(word_length: usize) -> Row {
        Row {
            cells: (0..word_length).map(Cell::new).collect(),
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no letter has been entered in this row.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.letter.is_none())
    }

    /// Sets the letter at the given column.
    ///
    /// # Panics
    ///
    /// Panics if `column` is out of bounds.
    pub fn set_letter(&mut self, column: usize, letter: char) {
        self.cells[column].letter = Some(letter);
    }

    /// Removes the letter at the given column.
    ///
    /// # Panics
    ///
    /// Panics if `column` is out of bounds.
    pub fn clear_letter(&mut self, column: usize) {
        self.cells[column].letter = None;
    }

    /// Sets the feedback for the given column.
    ///
    /// # Panics
    ///
    /// Panics if `column` is out of bounds.
    pub fn set_status(&mut self, column: usize, status: LetterStatus) {
        self.cells[column].status = status;
    }

    /// Removes all letters and resets all feedback.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.letter = None;
            cell.status = LetterStatus::default();
        }
    }

    /// Returns the restrictions implied by this row alone, computed from its current contents.
    pub fn restrictions(&self) -> Vec<Restriction> {
        row_restrictions(&self.cells)
    }
}

/// A puzzle in progress: the grid of guesses entered so far, plus the list of possible words.
///
/// Nothing is cached. Restrictions and candidates are derived from the current grid every time
/// they are requested.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    rows: Vec<Row>,
    word_bank: WordBank,
}

impl Default for Puzzle {
    fn default() -> Self {
        Puzzle::new(DEFAULT_NUM_ROWS, DEFAULT_WORD_LENGTH)
    }
}

impl Puzzle {
    /// Creates an empty puzzle with the given number of guesses and word length, and no words.
    pub fn new(num_rows: usize, word_length: usize) -> Puzzle {
        Puzzle {
            rows: (0..num_rows).map(|_| Row::new(word_length)).collect(),
            word_bank: WordBank::new(word_length),
        }
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn word_length(&self) -> usize {
        self.word_bank.word_length()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, row: usize) -> Option<&Row> {
        self.rows.get(row)
    }

    pub fn word_bank(&self) -> &WordBank {
        &self.word_bank
    }

    /// Sets the letter of a single cell.
    pub fn set_letter(&mut self, row: usize, column: usize, letter: char) -> Result<(), WordleError> {
        self.check_bounds(row, column)?;
        self.rows[row].set_letter(column, letter);
        Ok(())
    }

    /// Removes the letter of a single cell.
    pub fn clear_letter(&mut self, row: usize, column: usize) -> Result<(), WordleError> {
        self.check_bounds(row, column)?;
        self.rows[row].clear_letter(column);
        Ok(())
    }

    /// Sets the feedback of a single cell.
    pub fn set_status(
        &mut self,
        row: usize,
        column: usize,
        status: LetterStatus,
    ) -> Result<(), WordleError> {
        self.check_bounds(row, column)?;
        self.rows[row].set_status(column, status);
        Ok(())
    }

    /// Sets every letter and status of a row at once.
    ///
    /// The row is left unchanged if `guess` or `statuses` have the wrong length.
    pub fn enter_guess(
        &mut self,
        row: usize,
        guess: &str,
        statuses: &[LetterStatus],
    ) -> Result<(), WordleError> {
        self.check_bounds(row, 0)?;
        let word_length = self.word_length();
        let num_letters = guess.chars().count();
        if num_letters != word_length {
            return Err(WordleError::LengthMismatch {
                word: guess.to_string(),
                expected: word_length,
                actual: num_letters,
            });
        }
        if statuses.len() != word_length {
            return Err(WordleError::LengthMismatch {
                word: guess.to_string(),
                expected: word_length,
                actual: statuses.len(),
            });
        }
        let target = &mut self.rows[row];
        for (column, (letter, status)) in guess.chars().zip(statuses).enumerate() {
            target.set_letter(column, letter);
            target.set_status(column, *status);
        }
        Ok(())
    }

    /// Clears every cell of the given row.
    pub fn clear_row(&mut self, row: usize) -> Result<(), WordleError> {
        self.check_bounds(row, 0)?;
        self.rows[row].clear();
        Ok(())
    }

    /// Clears the whole grid, keeping the word list.
    pub fn reset(&mut self) {
        for row in &mut self.rows {
            row.clear();
        }
    }

    /// Replaces the list of possible words.
    ///
    /// If any word has the wrong length, this fails and the previous list is kept.
    pub fn load_word_list<I, S>(&mut self, words: I) -> Result<(), WordleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.word_bank = WordBank::from_iterator(words, self.word_length())?;
        Ok(())
    }

    /// Replaces the list of possible words, skipping any with the wrong length.
    ///
    /// Returns an error for each skipped word.
    pub fn load_word_list_skipping_invalid<I, S>(&mut self, words: I) -> Vec<WordleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (word_bank, skipped) =
            WordBank::from_iterator_skipping_invalid(words, self.word_length());
        self.word_bank = word_bank;
        skipped
    }

    /// Returns the de-duplicated restrictions from every row, in row order.
    pub fn restrictions(&self) -> WordRestrictions {
        let mut restrictions = WordRestrictions::new();
        for row in &self.rows {
            restrictions.extend(row.restrictions());
        }
        restrictions
    }

    /// Filters the word list down to the words that match every row's feedback.
    pub fn recompute_candidates(&self) -> Candidates {
        let restrictions = self.restrictions();
        let candidates = get_possible_words(&restrictions, &self.word_bank);
        debug!(
            "{} restrictions leave {} of {} words",
            restrictions.len(),
            candidates.len(),
            self.word_bank.len()
        );
        candidates
    }

    fn check_bounds(&self, row: usize, column: usize) -> Result<(), WordleError> {
        if row >= self.num_rows() || column >= self.word_length() {
            return Err(WordleError::OutOfRange {
                row,
                column,
                num_rows: self.num_rows(),
                word_length: self.word_length(),
            });
        }
        Ok(())
    }
}
