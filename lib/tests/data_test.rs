#[macro_use]
extern crate assert_matches;

use wordle_helper::*;

use std::io::Cursor;
use std::result::Result;

macro_rules! assert_words_eq {
    ($words:expr, $strs:expr) => {
        assert_eq!(
            $words.iter().map(Word::as_str).collect::<Vec<&str>>(),
            $strs.to_vec()
        );
    };
}

#[test]
fn word_bank_from_reader_succeeds() -> Result<(), WordleError> {
    let cursor = Cursor::new(String::from("\n\nworda\n wordb\n"));

    let word_bank = WordBank::from_reader(cursor, 5)?;

    assert_eq!(word_bank.len(), 2);
    assert_words_eq!(&word_bank, &["worda", "wordb"]);
    assert_eq!(word_bank.word_length(), 5);
    Ok(())
}

#[test]
fn word_bank_from_iterator_succeeds() -> Result<(), WordleError> {
    let word_bank = WordBank::from_iterator(vec!["worda", "Wordb"], 5)?;

    assert_eq!(word_bank.len(), 2);
    assert_words_eq!(&word_bank, &["worda", "wordb"]);
    Ok(())
}

#[test]
fn word_bank_from_string_iterator_succeeds() -> Result<(), WordleError> {
    let word_bank =
        WordBank::from_iterator(vec!["worda".to_string(), "Wordb".to_string()], 5)?;

    assert_eq!(word_bank.len(), 2);
    assert_words_eq!(&word_bank, &["worda", "wordb"]);
    Ok(())
}

#[test]
fn word_bank_from_iterator_checks_entries_as_given() {
    assert_matches!(
        WordBank::from_iterator(vec!["worda", ""], 5),
        Err(WordleError::LengthMismatch {
            expected: 5,
            actual: 0,
            ..
        })
    );
    assert_matches!(
        WordBank::from_iterator(vec!["Wordb "], 5),
        Err(WordleError::LengthMismatch {
            expected: 5,
            actual: 6,
            ..
        })
    );
}

#[test]
fn word_bank_from_reader_mismatched_word_length_fails() {
    let cursor = Cursor::new(String::from("\nlongword\n   short\n"));

    assert_matches!(
        WordBank::from_reader(cursor, 5),
        Err(WordleError::LengthMismatch {
            expected: 5,
            actual: 8,
            ..
        })
    );
}

#[test]
fn word_keeps_non_ascii_letters() -> Result<(), WordleError> {
    let word = Word::new("ÉCLAT", 5)?;

    assert_eq!(word.as_str(), "éclat");
    assert_eq!(word.num_occurrences('é'), 1);
    assert!(word.has_letter_at('c', 1));
    Ok(())
}

#[test]
fn error_messages() {
    let mismatch = Word::new("hi", 5).unwrap_err();
    let out_of_range = Puzzle::default().set_letter(6, 0, 'a').unwrap_err();

    assert_eq!(
        mismatch.to_string(),
        "the word \"hi\" has 2 letters, but 5 are required"
    );
    assert_eq!(
        out_of_range.to_string(),
        "cell (6, 0) is outside the 6x5 grid"
    );
}
