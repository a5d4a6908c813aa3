//! The externally-visible operations a host (UI, CLI, server) drives the
//! core through. Everything here is a thin composition of the other
//! modules; no new behavior lives in this file, only wiring.

use crate::autofill::{self, AutofillOptions, AutofillResult};
use crate::matcher::{Matcher, RatingFilter, SortOrder};
use crate::{Cell, CrosswordGrid, DictEntry, Dictionary, Entry, Error, Pattern, Result, Symmetry, WordIndex};

#[cfg(feature = "puz")]
use crate::puz::{self, error as puz_error, PuzFile};

/// A stateless facade over grid editing, suggestion and autofill.
///
/// Holds nothing; every method takes the grid (and dictionary, where
/// relevant) it operates on as an argument, mirroring the core's "the Grid
/// is the single source of truth, owned by the caller" design.
#[derive(Debug, Default, Clone, Copy)]
pub struct Coordinator;

impl Coordinator {
    pub fn new() -> Self {
        Self
    }

    pub fn grid_new(&self, rows: usize, cols: usize) -> Result<CrosswordGrid> {
        CrosswordGrid::new(rows, cols)
    }

    pub fn grid_set(&self, grid: &CrosswordGrid, row: usize, col: usize, cell: Cell, symmetry: Symmetry) -> Result<CrosswordGrid> {
        let mut next = grid.clone();
        next.set_cell(row, col, cell, symmetry)?;
        Ok(next)
    }

    pub fn grid_clear_letters(&self, grid: &CrosswordGrid) -> CrosswordGrid {
        let mut next = grid.clone();
        next.clear_letters();
        next
    }

    pub fn word_index(&self, grid: &CrosswordGrid) -> WordIndex {
        WordIndex::build(grid)
    }

    pub fn pattern_of(&self, grid: &CrosswordGrid, entry: &Entry) -> Pattern {
        crate::pattern_of(grid, entry)
    }

    /// Candidate words for a single pattern, e.g. to populate a suggestion
    /// list for one selected entry.
    pub fn suggest<'a>(&self, dictionary: &'a Dictionary, pattern: &Pattern, rating_filter: RatingFilter, sort: SortOrder) -> Vec<&'a DictEntry> {
        Matcher::new(dictionary).candidates(pattern, rating_filter, sort)
    }

    pub fn autofill(&self, dictionary: &Dictionary, grid: &CrosswordGrid, options: AutofillOptions<'_>) -> AutofillResult {
        autofill::run(dictionary, grid, options)
    }

    #[cfg(feature = "puz")]
    pub fn puz_encode(&self, puz: &PuzFile, truncate: bool) -> puz_error::write::Result<Vec<u8>> {
        puz::encode(puz, truncate)
    }

    #[cfg(feature = "puz")]
    pub fn puz_decode(&self, bytes: &[u8]) -> puz_error::read::Result<PuzFile> {
        puz::decode(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_set_does_not_mutate_the_original() {
        let coordinator = Coordinator::new();
        let grid = coordinator.grid_new(2, 2).unwrap();
        let edited = coordinator.grid_set(&grid, 0, 0, Cell::Black, Symmetry::None).unwrap();

        assert_eq!(grid.get(0, 0), Some(Cell::Empty));
        assert_eq!(edited.get(0, 0), Some(Cell::Black));
    }

    #[test]
    fn grid_set_rejects_out_of_bounds() {
        let coordinator = Coordinator::new();
        let grid = coordinator.grid_new(2, 2).unwrap();
        assert_eq!(
            coordinator.grid_set(&grid, 5, 5, Cell::Black, Symmetry::None),
            Err(Error::OutOfBounds { row: 5, col: 5 })
        );
    }

    #[test]
    fn suggest_delegates_to_the_matcher() {
        let coordinator = Coordinator::new();
        let dictionary = Dictionary::from_sources(["CAT;1\nCAR;1\n"]);
        let pattern = Pattern::try_from("CA.").unwrap();

        let words: Vec<&str> = coordinator
            .suggest(&dictionary, &pattern, RatingFilter::ANY, SortOrder::Alphabetical)
            .into_iter()
            .map(|e| e.word.as_str())
            .collect();

        assert_eq!(words, vec!["CAR", "CAT"]);
    }
}
