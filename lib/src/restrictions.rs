use crate::data::Word;
use crate::puzzle::Cell;
use crate::results::LetterStatus;
use log::trace;
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A letter along with its location in the word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocatedLetter {
    pub letter: char,
    /// The zero-based location (i.e. index) for this letter in a word.
    pub location: usize,
}

impl LocatedLetter {
    pub fn new(letter: char, location: usize) -> LocatedLetter {
        LocatedLetter { letter, location }
    }
}

/// One constraint that the objective word must satisfy.
///
/// Restrictions describe the unknown objective word, not the guess they were derived from, so
/// the same restriction derived from two different rows compares equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Restriction {
    /// The letter appears exactly `count` times.
    ExactOccurrences { letter: char, count: usize },
    /// The letter appears at least `count` times.
    MinOccurrences { letter: char, count: usize },
    /// The letter must be at this location.
    MustOccurAt(LocatedLetter),
    /// The letter must not be at this location.
    MustNotOccurAt(LocatedLetter),
}

impl Restriction {
    /// The letter this restriction applies to.
    pub fn letter(&self) -> char {
        match self {
            Restriction::ExactOccurrences { letter, .. }
            | Restriction::MinOccurrences { letter, .. } => *letter,
            Restriction::MustOccurAt(ll) | Restriction::MustNotOccurAt(ll) => ll.letter,
        }
    }
}

/// The cells of one letter within a row, grouped by their status.
#[derive(Debug)]
struct LetterCells {
    letter: char,
    absent: Vec<usize>,
    wrong_position: Vec<usize>,
    right_position: Vec<usize>,
}

impl LetterCells {
    fn new(letter: char) -> LetterCells {
        LetterCells {
            letter,
            absent: Vec::new(),
            wrong_position: Vec::new(),
            right_position: Vec::new(),
        }
    }

    fn add(&mut self, location: usize, status: LetterStatus) {
        match status {
            LetterStatus::Absent => self.absent.push(location),
            LetterStatus::PresentWrongPosition => self.wrong_position.push(location),
            LetterStatus::PresentRightPosition => self.right_position.push(location),
        }
    }

    fn push_restrictions(&self, restrictions: &mut Vec<Restriction>) {
        let letter = self.letter;
        let num_present = self.wrong_position.len() + self.right_position.len();

        // An absent copy means there are no copies beyond the ones marked present.
        if !self.absent.is_empty() {
            restrictions.push(Restriction::ExactOccurrences {
                letter,
                count: num_present,
            });
        } else if num_present > 0 {
            restrictions.push(Restriction::MinOccurrences {
                letter,
                count: num_present,
            });
        }

        // Absent locations are only recorded alongside a misplaced copy. Otherwise the count
        // above already rules them out.
        if !self.wrong_position.is_empty() {
            restrictions.extend(
                self.wrong_position
                    .iter()
                    .chain(self.absent.iter())
                    .map(|location| {
                        Restriction::MustNotOccurAt(LocatedLetter::new(letter, *location))
                    }),
            );
        }

        restrictions.extend(
            self.right_position
                .iter()
                .map(|location| Restriction::MustOccurAt(LocatedLetter::new(letter, *location))),
        );
    }
}

/// Returns the restrictions implied by the feedback in a single row.
///
/// Letters are grouped case-insensitively. Cells without an alphabetic letter are ignored, so an
/// empty row yields no restrictions. The output lists each letter in order of its first
/// appearance in the row.
pub fn row_restrictions(cells: &[Cell]) -> Vec<Restriction> {
    let mut groups: Vec<LetterCells> = Vec::new();
    for cell in cells {
        let letter = match cell.normalized_letter() {
            Some(letter) => letter,
            None => continue,
        };
        match groups.iter_mut().find(|group| group.letter == letter) {
            Some(group) => group.add(cell.location(), cell.status()),
            None => {
                let mut group = LetterCells::new(letter);
                group.add(cell.location(), cell.status());
                groups.push(group);
            }
        }
    }

    let mut restrictions = Vec::new();
    for group in &groups {
        group.push_restrictions(&mut restrictions);
    }
    trace!(
        "Derived {} restrictions from {} letters",
        restrictions.len(),
        groups.len()
    );
    restrictions
}

/// A de-duplicated set of restrictions that a word must adhere to.
///
/// Iteration follows insertion order. No attempt is made to simplify the set: an exact count and
/// a minimum count for the same letter are both kept, and contradictory restrictions are kept
/// as-is (no word will satisfy them).
#[derive(Clone, Debug, Default)]
pub struct WordRestrictions {
    ordered: Vec<Restriction>,
    seen: HashSet<Restriction>,
}

impl WordRestrictions {
    /// Creates an empty set, which every word satisfies.
    pub fn new() -> WordRestrictions {
        WordRestrictions::default()
    }

    /// Returns the restrictions imposed by the given row of cells.
    pub fn from_row(cells: &[Cell]) -> WordRestrictions {
        row_restrictions(cells).into_iter().collect()
    }

    /// Adds the restriction, returning `false` if it was already present.
    pub fn insert(&mut self, restriction: Restriction) -> bool {
        if !self.seen.insert(restriction) {
            return false;
        }
        self.ordered.push(restriction);
        true
    }

    /// Adds the given restrictions to these restrictions.
    pub fn merge(&mut self, other: &WordRestrictions) {
        self.extend(other.iter().copied());
    }

    pub fn contains(&self, restriction: &Restriction) -> bool {
        self.seen.contains(restriction)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Restriction> {
        self.ordered.iter()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Returns `true` iff the given word satisfies every restriction.
    pub fn is_satisfied_by(&self, word: &Word) -> bool {
        word.satisfies_all(self.iter())
    }
}

impl PartialEq for WordRestrictions {
    fn eq(&self, other: &Self) -> bool {
        self.seen == other.seen
    }
}

impl Eq for WordRestrictions {}

impl Extend<Restriction> for WordRestrictions {
    fn extend<I: IntoIterator<Item = Restriction>>(&mut self, iter: I) {
        for restriction in iter {
            self.insert(restriction);
        }
    }
}

impl FromIterator<Restriction> for WordRestrictions {
    fn from_iter<I: IntoIterator<Item = Restriction>>(iter: I) -> Self {
        let mut restrictions = WordRestrictions::new();
        restrictions.extend(iter);
        restrictions
    }
}

impl<'a> IntoIterator for &'a WordRestrictions {
    type Item = &'a Restriction;
    type IntoIter = std::slice::Iter<'a, Restriction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
