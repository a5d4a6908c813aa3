use puzzled_core::Position;

use crate::Direction;

/// Identifies an [`Entry`] by the tuple the spec keys it by: its direction
/// and its starting cell. Stable across rebuilds of the same grid, unlike an
/// index into a `Vec<Entry>` would be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId {
    pub direction: Direction,
    pub start: Position,
}

/// A maximal run of playable cells in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub direction: Direction,
    pub start: Position,
    pub length: usize,
    pub number: u32,
}

impl Entry {
    pub fn id(&self) -> EntryId {
        EntryId {
            direction: self.direction,
            start: self.start,
        }
    }

    /// Whether this entry carries a dictionary obligation; length-1 entries
    /// are reported but never need filling.
    pub fn is_word(&self) -> bool {
        self.length > 1
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let step = self.direction.step();
        std::iter::successors(Some(self.start), move |pos| Some(*pos + step)).take(self.length)
    }
}
