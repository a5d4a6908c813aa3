use std::fmt;

use crate::{Cell, CrosswordGrid, Entry};

/// A wildcard slot in a [`Pattern`].
pub const WILDCARD: char = '.';

/// A fixed-length template over a dictionary word: each slot is either a
/// fixed uppercase letter or a wildcard that matches anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<Option<char>>);

impl Pattern {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A pattern with no wildcards represents an already-filled entry.
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    pub fn slots(&self) -> &[Option<char>] {
        &self.0
    }

    /// Whether `word` (same length) satisfies every fixed slot.
    pub fn matches(&self, word: &str) -> bool {
        word.len() == self.0.len()
            && self
                .0
                .iter()
                .zip(word.chars())
                .all(|(slot, ch)| slot.is_none_or(|fixed| fixed == ch))
    }
}

/// Error returned when parsing a [`Pattern`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("pattern slot {index} has invalid character '{found}'; expected an uppercase letter or '{WILDCARD}'")]
pub struct InvalidPatternChar {
    pub index: usize,
    pub found: char,
}

impl TryFrom<&str> for Pattern {
    type Error = InvalidPatternChar;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let slots = value
            .chars()
            .enumerate()
            .map(|(index, ch)| match ch {
                WILDCARD => Ok(None),
                'A'..='Z' => Ok(Some(ch)),
                found => Err(InvalidPatternChar { index, found }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Pattern(slots))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.0 {
            write!(f, "{}", slot.unwrap_or(WILDCARD))?;
        }
        Ok(())
    }
}

/// Reads `entry`'s cells off `grid`, mapping `Letter -> letter`,
/// everything else (`Empty`, and `Black` which should never appear inside an
/// entry) to a wildcard.
pub fn pattern_of(grid: &CrosswordGrid, entry: &Entry) -> Pattern {
    let slots = entry
        .positions()
        .map(|pos| match grid.get(pos.row, pos.col) {
            Some(Cell::Letter(ch)) => Some(ch),
            _ => None,
        })
        .collect();

    Pattern(slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, Symmetry};
    use puzzled_core::Position;

    #[test]
    fn pattern_derivation_reads_letters_and_wildcards() {
        let mut grid = CrosswordGrid::new(1, 3).unwrap();
        grid.set_cell(0, 0, Cell::Letter('A'), Symmetry::None).unwrap();
        grid.set_cell(0, 2, Cell::Letter('T'), Symmetry::None).unwrap();

        let entry = Entry {
            direction: Direction::Across,
            start: Position::new(0, 0),
            length: 3,
            number: 1,
        };

        let pattern = pattern_of(&grid, &entry);
        assert_eq!(pattern.to_string(), "A.T");
        assert!(pattern.matches("ANT"));
        assert!(!pattern.matches("BAT"));
    }

    #[test]
    fn fully_constrained_pattern_is_complete() {
        let pattern = Pattern(vec![Some('C'), Some('A'), Some('T')]);
        assert!(pattern.is_complete());
    }
}
