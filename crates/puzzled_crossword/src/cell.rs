use std::fmt;

/// A single square of a [`CrosswordGrid`](crate::CrosswordGrid).
///
/// The display number assigned to a cell by a [`WordIndex`](crate::WordIndex)
/// lives outside `Cell` on purpose: it is a derived property of the whole
/// grid, not a fact about one square, so keeping it here would let a cell
/// disagree with its own grid after an edit elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Cell {
    /// An unplayable square that separates entries.
    Black,
    /// A playable square with no letter assigned yet.
    #[default]
    Empty,
    /// A playable square holding a single uppercase letter.
    Letter(char),
}

impl Cell {
    pub fn is_black(self) -> bool {
        matches!(self, Cell::Black)
    }

    pub fn is_playable(self) -> bool {
        !self.is_black()
    }

    pub fn letter(self) -> Option<char> {
        match self {
            Cell::Letter(ch) => Some(ch),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Black => write!(f, "#"),
            Cell::Empty => write!(f, "_"),
            Cell::Letter(ch) => write!(f, "{ch}"),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Serialize};

    use super::Cell;

    #[derive(Serialize, Deserialize)]
    #[serde(rename = "Cell")]
    enum CellData {
        Black,
        Empty,
        Letter(char),
    }

    impl From<Cell> for CellData {
        fn from(cell: Cell) -> Self {
            match cell {
                Cell::Black => CellData::Black,
                Cell::Empty => CellData::Empty,
                Cell::Letter(ch) => CellData::Letter(ch),
            }
        }
    }

    impl From<CellData> for Cell {
        fn from(data: CellData) -> Self {
            match data {
                CellData::Black => Cell::Black,
                CellData::Empty => Cell::Empty,
                CellData::Letter(ch) => Cell::Letter(ch),
            }
        }
    }

    impl Serialize for Cell {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            CellData::from(*self).serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Cell {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            CellData::deserialize(deserializer).map(Cell::from)
        }
    }
}
