use crate::restrictions::*;
use crate::results::*;
use log::{debug, warn};
use std::fmt;
use std::io::BufRead;
use std::ops::Deref;
use std::sync::Arc;

/// Lower-cases a single letter, keeping one `char` per letter.
///
/// Letters whose lower-case form spans several `char`s (e.g. 'İ') keep only the first one.
pub fn normalize_letter(letter: char) -> char {
    letter.to_lowercase().next().unwrap_or(letter)
}

/// A lower-case word of a fixed length.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Word {
    letters: Arc<str>,
}

impl Word {
    /// Constructs a word, converting each letter with [`normalize_letter`].
    ///
    /// Fails with [`WordleError::LengthMismatch`] if the word as given does not have exactly
    /// `word_length` letters. The word is never trimmed, truncated or padded.
    pub fn new(word: &str, word_length: usize) -> Result<Word, WordleError> {
        let actual = word.chars().count();
        if actual != word_length {
            return Err(WordleError::LengthMismatch {
                word: word.to_string(),
                expected: word_length,
                actual,
            });
        }
        let letters: String = word.chars().map(normalize_letter).collect();
        Ok(Word {
            letters: Arc::from(letters),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.letters
    }

    /// The number of letters in this word.
    pub fn len(&self) -> usize {
        self.letters.chars().count()
    }

    /// Counts the number of times the given letter appears in this word.
    pub fn num_occurrences(&self, letter: char) -> usize {
        self.letters.chars().filter(|other| *other == letter).count()
    }

    /// Returns `true` iff the given letter is at the given zero-based location.
    pub fn has_letter_at(&self, letter: char, location: usize) -> bool {
        self.letters.chars().nth(location) == Some(letter)
    }

    /// Returns `true` iff this word satisfies the given restriction.
    pub fn satisfies(&self, restriction: &Restriction) -> bool {
        match restriction {
            Restriction::ExactOccurrences { letter, count } => {
                self.num_occurrences(*letter) == *count
            }
            Restriction::MinOccurrences { letter, count } => {
                self.num_occurrences(*letter) >= *count
            }
            Restriction::MustOccurAt(ll) => self.has_letter_at(ll.letter, ll.location),
            Restriction::MustNotOccurAt(ll) => !self.has_letter_at(ll.letter, ll.location),
        }
    }

    /// Returns `true` iff this word satisfies every one of the given restrictions.
    pub fn satisfies_all<'a, I>(&self, restrictions: I) -> bool
    where
        I: IntoIterator<Item = &'a Restriction>,
    {
        restrictions
            .into_iter()
            .all(|restriction| self.satisfies(restriction))
    }
}

impl Deref for Word {
    type Target = str;

    fn deref(&self) -> &str {
        &self.letters
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.letters
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters)
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Contains all the possible words for a puzzle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordBank {
    all_words: Vec<Word>,
    word_length: usize,
}

impl WordBank {
    /// Creates an empty bank for words of the given length.
    pub fn new(word_length: usize) -> WordBank {
        WordBank {
            all_words: Vec::new(),
            word_length,
        }
    }

    /// Constructs a new `WordBank` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word is trimmed and converted to lower
    /// case, and blank lines are skipped. Fails if any word has the wrong length.
    pub fn from_reader<R: BufRead>(word_reader: R, word_length: usize) -> Result<Self, WordleError> {
        let lines = word_reader
            .lines()
            .collect::<std::io::Result<Vec<String>>>()
            .map_err(|err| WordleError::Io(err.to_string()))?;
        WordBank::from_iterator(
            lines
                .iter()
                .map(|line| line.trim())
                .filter(|line| !line.is_empty()),
            word_length,
        )
    }

    /// Constructs a new `WordBank` using the given words.
    ///
    /// Each word is converted to lower case and checked exactly as given: surrounding whitespace
    /// counts towards its length, and an empty entry is a length mismatch. The first word with
    /// the wrong length rejects the whole list.
    pub fn from_iterator<I, S>(words: I, word_length: usize) -> Result<Self, WordleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let all_words = words
            .into_iter()
            .map(|word| Word::new(word.as_ref(), word_length))
            .collect::<Result<Vec<Word>, WordleError>>()?;
        debug!("Loaded {} words of length {}", all_words.len(), word_length);
        Ok(WordBank {
            all_words,
            word_length,
        })
    }

    /// Like [`WordBank::from_iterator`], but skips words with the wrong length instead of failing.
    ///
    /// Returns the bank along with an error for each skipped word.
    pub fn from_iterator_skipping_invalid<I, S>(
        words: I,
        word_length: usize,
    ) -> (Self, Vec<WordleError>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut all_words = Vec::new();
        let mut skipped = Vec::new();
        for word in words {
            match Word::new(word.as_ref(), word_length) {
                Ok(word) => all_words.push(word),
                Err(err) => {
                    warn!("Skipping word: {}", err);
                    skipped.push(err);
                }
            }
        }
        debug!(
            "Loaded {} words of length {}, skipped {}",
            all_words.len(),
            word_length,
            skipped.len()
        );
        (
            WordBank {
                all_words,
                word_length,
            },
            skipped,
        )
    }

    /// Returns the number of possible words.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }

    /// Returns the length of each word in the bank.
    pub fn word_length(&self) -> usize {
        self.word_length
    }
}

impl Deref for WordBank {
    type Target = [Word];

    fn deref(&self) -> &[Word] {
        &self.all_words
    }
}

/// Gets the list of words in the word bank that meet the given restrictions, in word bank order.
pub fn get_possible_words(restrictions: &WordRestrictions, bank: &WordBank) -> Candidates {
    Candidates::from_words(
        bank.iter()
            .filter(|word| restrictions.is_satisfied_by(word))
            .cloned()
            .collect(),
    )
}
