use std::collections::HashMap;

use puzzled_core::Position;

use crate::{Cell, CrosswordGrid, Direction, Entry, EntryId};

/// The derived collection of [`Entry`]s for a grid snapshot, plus the display
/// numbering and a cell -> entry lookup.
///
/// Building one is a pure function of a [`CrosswordGrid`]: the same grid
/// always produces the same `WordIndex`, with no caching or invalidation
/// machinery needed on the caller's side. Call [`WordIndex::build`] whenever
/// the grid changes, or reuse one while it doesn't.
#[derive(Debug, Clone)]
pub struct WordIndex {
    entries: Vec<Entry>,
    numbers: HashMap<Position, u32>,
    cell_entries: HashMap<Position, (Option<EntryId>, Option<EntryId>)>,
}

impl WordIndex {
    pub fn build(grid: &CrosswordGrid) -> Self {
        let across = scan_entries(grid, Direction::Across);
        let down = scan_entries(grid, Direction::Down);

        let numbers = assign_numbers(&across, &down);

        let mut entries = Vec::with_capacity(across.len() + down.len());
        for mut entry in across.into_iter().chain(down.into_iter()) {
            entry.number = numbers[&entry.start];
            entries.push(entry);
        }

        let cell_entries = index_cells(&entries);

        Self {
            entries,
            numbers,
            cell_entries,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry(&self, id: EntryId) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|e| e.direction == id.direction && e.start == id.start)
    }

    /// The display number assigned to `pos`, if any entry starts there.
    pub fn number_at(&self, pos: Position) -> Option<u32> {
        self.numbers.get(&pos).copied()
    }

    /// The `(across, down)` entries containing `pos`, if any.
    pub fn entries_at(&self, pos: Position) -> (Option<EntryId>, Option<EntryId>) {
        self.cell_entries.get(&pos).copied().unwrap_or((None, None))
    }

    /// Entries in the order clues are associated on encode/decode: ascending
    /// number, across before down when a number is shared.
    pub fn in_clue_order(&self) -> Vec<&Entry> {
        let mut entries: Vec<&Entry> = self.entries.iter().collect();
        entries.sort_by_key(|e| (e.number, direction_rank(e.direction)));
        entries
    }
}

fn direction_rank(direction: Direction) -> u8 {
    match direction {
        Direction::Across => 0,
        Direction::Down => 1,
    }
}

fn scan_entries(grid: &CrosswordGrid, direction: Direction) -> Vec<Entry> {
    let (outer, inner) = match direction {
        Direction::Across => (grid.rows(), grid.cols()),
        Direction::Down => (grid.cols(), grid.rows()),
    };

    let mut entries = Vec::new();

    for o in 0..outer {
        let mut run_start: Option<usize> = None;

        for i in 0..=inner {
            let playable = i < inner && cell_at(grid, direction, o, i).is_playable();

            match (run_start, playable) {
                (None, true) => run_start = Some(i),
                (Some(start), false) => {
                    let length = i - start;
                    entries.push(Entry {
                        direction,
                        start: position_at(direction, o, start),
                        length,
                        number: 0,
                    });
                    run_start = None;
                }
                _ => {}
            }
        }
    }

    entries
}

fn cell_at(grid: &CrosswordGrid, direction: Direction, outer: usize, inner: usize) -> Cell {
    match direction {
        Direction::Across => grid.get(outer, inner).expect("scan stays in bounds"),
        Direction::Down => grid.get(inner, outer).expect("scan stays in bounds"),
    }
}

fn position_at(direction: Direction, outer: usize, inner: usize) -> Position {
    match direction {
        Direction::Across => Position::new(outer, inner),
        Direction::Down => Position::new(inner, outer),
    }
}

fn assign_numbers(across: &[Entry], down: &[Entry]) -> HashMap<Position, u32> {
    let mut starts: Vec<Position> = across.iter().map(|e| e.start).chain(down.iter().map(|e| e.start)).collect();
    starts.sort_by_key(Position::reading_order_key);
    starts.dedup();

    starts
        .into_iter()
        .enumerate()
        .map(|(i, pos)| (pos, (i + 1) as u32))
        .collect()
}

fn index_cells(entries: &[Entry]) -> HashMap<Position, (Option<EntryId>, Option<EntryId>)> {
    let mut index: HashMap<Position, (Option<EntryId>, Option<EntryId>)> = HashMap::new();

    for entry in entries {
        let id = entry.id();
        for pos in entry.positions() {
            let slot = index.entry(pos).or_default();
            match entry.direction {
                Direction::Across => slot.0 = Some(id),
                Direction::Down => slot.1 = Some(id),
            }
        }
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Symmetry};

    #[test]
    fn empty_5x5_with_one_black_cell() {
        let mut grid = CrosswordGrid::new(5, 5).unwrap();
        grid.set_cell(2, 2, Cell::Black, Symmetry::None).unwrap();

        let index = WordIndex::build(&grid);
        let across = index
            .entries()
            .iter()
            .filter(|e| e.direction == Direction::Across)
            .count();
        let down = index
            .entries()
            .iter()
            .filter(|e| e.direction == Direction::Down)
            .count();

        // A single interior black cell splits only its own row and column,
        // so four rows/columns stay whole (one entry each) and the middle
        // row/column splits into two length-2 entries.
        assert_eq!(across, 6);
        assert_eq!(down, 6);
        assert_eq!(index.number_at(Position::new(0, 0)), Some(1));
    }

    #[test]
    fn shared_number_prefers_across_first_in_clue_order() {
        let grid = CrosswordGrid::new(3, 3).unwrap();
        let index = WordIndex::build(&grid);
        let ordered = index.in_clue_order();

        assert_eq!(ordered[0].number, 1);
        assert_eq!(ordered[0].direction, Direction::Across);
        assert_eq!(ordered[1].number, 1);
        assert_eq!(ordered[1].direction, Direction::Down);
    }

    #[test]
    fn every_playable_cell_belongs_to_its_entries() {
        let mut grid = CrosswordGrid::new(4, 4).unwrap();
        grid.set_cell(1, 1, Cell::Black, Symmetry::None).unwrap();
        let index = WordIndex::build(&grid);

        for (pos, cell) in grid.iter_indexed() {
            let (across, down) = index.entries_at(pos);
            if cell.is_playable() {
                assert!(across.is_some() || down.is_some());
            } else {
                assert_eq!((across, down), (None, None));
            }
        }
    }
}
