use puzzled_core::{Grid, Position};

use crate::{Cell, Error, Result};

/// The maximum width or height a [`CrosswordGrid`] may have.
pub const MAX_DIMENSION: usize = 50;

/// Governs which cell, if any, a `Black` edit mirrors to.
///
/// Only a `Black` <-> non-`Black` toggle ever propagates; writing a letter
/// into a cell never touches its mirror, since a crossword's letters have no
/// reason to be symmetric even when its block pattern is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Symmetry {
    #[default]
    None,
    /// 180-degree rotation about the grid's center.
    Rotational180,
    /// Mirror across the vertical midline (left <-> right).
    MirrorVertical,
    /// Mirror across the horizontal midline (top <-> bottom).
    MirrorHorizontal,
}

impl Symmetry {
    fn mirror(self, pos: Position, rows: usize, cols: usize) -> Position {
        match self {
            Symmetry::None => pos,
            Symmetry::Rotational180 => Position::new(rows - 1 - pos.row, cols - 1 - pos.col),
            Symmetry::MirrorVertical => Position::new(pos.row, cols - 1 - pos.col),
            Symmetry::MirrorHorizontal => Position::new(rows - 1 - pos.row, pos.col),
        }
    }
}

/// A mutable rectangular arrangement of [`Cell`]s, `1..=50` on each side.
///
/// `CrosswordGrid` is the single source of truth the rest of the crate reads
/// from: a [`WordIndex`](crate::WordIndex) is a pure snapshot of one, and
/// autofill works on cloned copies of one. It exposes exactly one mutating
/// primitive, [`set_cell`](Self::set_cell), so that symmetry propagation has
/// one place to live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrosswordGrid {
    cells: Grid<Cell>,
}

impl CrosswordGrid {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::check_dimensions(rows, cols)?;
        let cells = Grid::new(rows, cols).expect("checked dimensions fit in usize");
        Ok(Self { cells })
    }

    fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
        if !(1..=MAX_DIMENSION).contains(&rows) || !(1..=MAX_DIMENSION).contains(&cols) {
            return Err(Error::InvalidGeometry { rows, cols });
        }
        Ok(())
    }

    /// Builds a grid from row literals, e.g. cells parsed from an external
    /// text or binary format one row at a time.
    ///
    /// Every row must have the same width; a ragged input is reported as
    /// `Error::InvalidGeometry` the same way out-of-range dimensions are,
    /// since both are the same kind of unusable shape from a caller's
    /// perspective.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if rows.iter().any(|row| row.len() != width) {
            return Err(Error::InvalidGeometry { rows: height, cols: width });
        }
        Self::check_dimensions(height, width)?;

        let data: Vec<Cell> = rows.iter().flatten().copied().collect();
        let cells = Grid::from_vec(data, width).expect("row widths already validated above");
        Ok(Self { cells })
    }

    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    pub fn cols(&self) -> usize {
        self.cells.cols()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get((row, col)).copied()
    }

    fn in_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::OutOfBounds { row, col });
        }
        Ok(())
    }

    /// Writes `value` at `(row, col)`.
    ///
    /// If `symmetry != Symmetry::None` and this write toggles the cell
    /// between `Black` and non-`Black`, the mirrored position receives the
    /// matching `Black`/non-`Black` status (as `Empty`, never copying a
    /// specific letter). If the mirror position is the same as `(row, col)`
    /// (the center cell under rotational symmetry on an odd-sized grid), no
    /// second write happens.
    pub fn set_cell(&mut self, row: usize, col: usize, value: Cell, symmetry: Symmetry) -> Result<()> {
        self.in_bounds(row, col)?;

        let pos = Position::new(row, col);
        let was_black = self.cells[pos].is_black();
        self.cells[pos] = value;

        let toggled = was_black != value.is_black();
        if symmetry != Symmetry::None && toggled {
            let mirror = symmetry.mirror(pos, self.rows(), self.cols());
            if mirror != pos {
                self.cells[mirror] = if value.is_black() {
                    Cell::Black
                } else {
                    Cell::Empty
                };
            }
        }

        Ok(())
    }

    /// Replaces every `Letter` cell with `Empty`; `Black` cells are untouched.
    pub fn clear_letters(&mut self) {
        for cell in self.cells.iter_mut() {
            if cell.letter().is_some() {
                *cell = Cell::Empty;
            }
        }
    }

    /// Returns a new grid of the given size, preserving the top-left overlap
    /// with `self`; newly exposed cells are `Empty`.
    pub fn resize(&self, new_rows: usize, new_cols: usize) -> Result<Self> {
        Self::check_dimensions(new_rows, new_cols)?;
        let cells = self
            .cells
            .resized(new_rows, new_cols)
            .expect("checked dimensions fit in usize");
        Ok(Self { cells })
    }

    pub fn iter_indexed(&self) -> impl Iterator<Item = (Position, Cell)> {
        self.cells.iter_indexed().map(|(pos, &cell)| (pos, cell))
    }

    pub(crate) fn cells(&self) -> &Grid<Cell> {
        &self.cells
    }
}
