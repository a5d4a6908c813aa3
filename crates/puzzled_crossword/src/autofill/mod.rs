//! Backtracking autofill: given a grid with some cells already lettered and a
//! dictionary, finds complete fillings of the remaining entries.
//!
//! The search never returns an `Err`; every exceptional outcome (no
//! candidates exist, a bound was hit before the search finished) is folded
//! into [`AutofillStatus`] instead, since "the dictionary has no word for
//! this pattern" is a normal, expected result rather than a failure of the
//! caller's contract.

mod solver;

use std::collections::HashMap;
use std::time::Instant;

pub use solver::CancelFlag;

use crate::matcher::{Matcher, RatingFilter, SortOrder};
use crate::{CrosswordGrid, DictEntry, Dictionary, Entry, EntryId, WordIndex};

/// Upper bound on distinct solutions a single [`run`] call will return.
///
/// A UX choice, not an algorithmic limit: callers after an exhaustive search
/// should pass a `node_budget`/`deadline` instead of relying on this cap.
pub const MAX_VARIATIONS: usize = 100;

/// One batched progress update from a running search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressReport {
    pub variables_assigned: usize,
    pub variables_total: usize,
    pub solutions_so_far: usize,
}

/// Why a search stopped before it could prove it had found every solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruncationReason {
    /// Hit [`AutofillOptions::max_variations`].
    MaxVariations,
    /// Hit [`AutofillOptions::node_budget`].
    NodeBudget,
    /// Passed [`AutofillOptions::deadline`].
    Deadline,
    /// [`AutofillOptions::cancel`] was observed set.
    Cancelled,
}

/// How a [`run`] call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutofillStatus {
    /// The search exhausted every possibility; `grids` holds every distinct
    /// solution found (possibly zero, see [`AutofillStatus::NoFill`] for the
    /// explicit zero case).
    Complete,
    /// The search exhausted every possibility and found nothing: some
    /// variable's dictionary candidates were empty, either initially or
    /// after pruning against its crossings.
    NoFill,
    /// The search stopped early; `grids` holds whatever distinct solutions
    /// it had found so far, which may not be exhaustive.
    Truncated(TruncationReason),
}

/// The result of a [`run`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutofillResult {
    pub grids: Vec<CrosswordGrid>,
    pub status: AutofillStatus,
}

/// Tunables for a single [`run`] call. All bounds are optional; the only one
/// with a non-zero default is `max_variations`.
#[derive(Default)]
pub struct AutofillOptions<'a> {
    pub max_variations: usize,
    pub node_budget: Option<u64>,
    pub deadline: Option<Instant>,
    pub cancel: Option<CancelFlag>,
    pub progress: Option<&'a mut dyn FnMut(ProgressReport)>,
}

impl<'a> AutofillOptions<'a> {
    pub fn new() -> Self {
        Self {
            max_variations: MAX_VARIATIONS,
            node_budget: None,
            deadline: None,
            cancel: None,
            progress: None,
        }
    }
}

/// Finds fillings of `grid`'s incomplete entries from `dictionary`.
///
/// An entry is a search variable only if it is a word (length > 1) and at
/// least one of its cells is still `Empty`; already-complete entries and
/// one-letter entries are left untouched and don't constrain the search
/// beyond whatever letters they already fixed.
pub fn run(dictionary: &Dictionary, grid: &CrosswordGrid, mut options: AutofillOptions<'_>) -> AutofillResult {
    if options.max_variations == 0 {
        options.max_variations = MAX_VARIATIONS;
    }

    let index = WordIndex::build(grid);
    let matcher = Matcher::new(dictionary);
    let entries_by_id: HashMap<EntryId, &Entry> = index.entries().iter().map(|e| (e.id(), e)).collect();

    let mut variables: Vec<EntryId> = index.entries().iter().filter(|e| e.is_word()).map(Entry::id).collect();
    variables.sort_by_key(|id| {
        let entry = entries_by_id[id];
        (entry.number, direction_rank(entry.direction))
    });

    let mut candidates: HashMap<EntryId, Vec<&DictEntry>> = HashMap::new();
    for &id in &variables {
        let entry = entries_by_id[&id];
        let pattern = crate::pattern_of(grid, entry);
        if pattern.is_complete() {
            continue;
        }

        let cands = matcher.candidates(&pattern, RatingFilter::ANY, SortOrder::RatingDesc);
        if cands.is_empty() {
            return AutofillResult { grids: Vec::new(), status: AutofillStatus::NoFill };
        }
        candidates.insert(id, cands);
    }

    let variables: Vec<EntryId> = variables.into_iter().filter(|id| candidates.contains_key(id)).collect();

    if variables.is_empty() {
        return AutofillResult { grids: vec![grid.clone()], status: AutofillStatus::Complete };
    }

    solver::prune_one_pass(&mut candidates, &entries_by_id, &index);
    if variables.iter().any(|id| candidates[id].is_empty()) {
        return AutofillResult { grids: Vec::new(), status: AutofillStatus::NoFill };
    }

    let mut letter_map = HashMap::new();
    for (pos, cell) in grid.iter_indexed() {
        if let Some(ch) = cell.letter() {
            letter_map.insert(pos, ch);
        }
    }

    let mut ctx = solver::SearchCtx::new(
        options.max_variations,
        options.node_budget,
        options.deadline,
        options.cancel,
        options.progress,
        variables.len(),
    );

    let mut assignment = HashMap::new();
    solver::search(&variables, &candidates, &entries_by_id, &mut assignment, &mut letter_map, grid, &mut ctx);

    let (grids, truncated) = ctx.into_results();
    let status = match truncated {
        Some(reason) => AutofillStatus::Truncated(reason),
        None if grids.is_empty() => AutofillStatus::NoFill,
        None => AutofillStatus::Complete,
    };

    AutofillResult { grids, status }
}

fn direction_rank(direction: crate::Direction) -> u8 {
    match direction {
        crate::Direction::Across => 0,
        crate::Direction::Down => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Symmetry};

    fn dict() -> Dictionary {
        Dictionary::from_sources(["CAT;5\nCAR;4\nDOG;3\nARC;2\nTOE;1\n"])
    }

    #[test]
    fn fills_a_fully_open_grid() {
        let grid = CrosswordGrid::new(3, 3).unwrap();
        let dict = dict();

        let result = run(&dict, &grid, AutofillOptions::new());

        assert_eq!(result.status, AutofillStatus::Complete);
        assert!(!result.grids.is_empty());

        let index = WordIndex::build(&result.grids[0]);
        for entry in index.entries() {
            if entry.is_word() {
                let word: String = entry.positions().map(|p| result.grids[0].get(p.row, p.col).unwrap().letter().unwrap()).collect();
                assert!(dict.words_of_length(word.len()).iter().any(|e| e.word == word));
            }
        }
    }

    #[test]
    fn reports_no_fill_when_a_pattern_has_no_candidates() {
        let mut grid = CrosswordGrid::new(1, 3).unwrap();
        grid.set_cell(0, 0, Cell::Letter('Q'), Symmetry::None).unwrap();
        grid.set_cell(0, 1, Cell::Letter('Q'), Symmetry::None).unwrap();
        let dict = dict();

        let result = run(&dict, &grid, AutofillOptions::new());

        assert_eq!(result.status, AutofillStatus::NoFill);
        assert!(result.grids.is_empty());
    }

    #[test]
    fn already_complete_grid_returns_itself() {
        let mut grid = CrosswordGrid::new(1, 3).unwrap();
        grid.set_cell(0, 0, Cell::Letter('C'), Symmetry::None).unwrap();
        grid.set_cell(0, 1, Cell::Letter('A'), Symmetry::None).unwrap();
        grid.set_cell(0, 2, Cell::Letter('T'), Symmetry::None).unwrap();
        let dict = dict();

        let result = run(&dict, &grid, AutofillOptions::new());

        assert_eq!(result.status, AutofillStatus::Complete);
        assert_eq!(result.grids, vec![grid]);
    }

    #[test]
    fn max_variations_truncates_and_reports_so() {
        let grid = CrosswordGrid::new(1, 3).unwrap();
        let dict = Dictionary::from_sources(["CAT;1\nCAR;1\nCAP;1\nCAN;1\n"]);

        let mut options = AutofillOptions::new();
        options.max_variations = 2;
        let result = run(&dict, &grid, options);

        assert_eq!(result.status, AutofillStatus::Truncated(TruncationReason::MaxVariations));
        assert_eq!(result.grids.len(), 2);
    }
}
