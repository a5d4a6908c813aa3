//! Solution and player-state grid encoding.
//!
//! This core has no standalone notion of in-progress solve state (play-mode
//! tracking is explicitly out of scope), so the state grid written on encode
//! mirrors the solution exactly rather than a separate partially-filled
//! copy. A host that wants a blank player grid on export can `clear_letters`
//! the grid it hands to [`super::encode`] before calling it.

use puzzled_core::Position;

use crate::puz::error::read;
use crate::{Cell, CrosswordGrid};

const BLACK: u8 = b'.';
const EMPTY: u8 = b'-';

pub fn encode_grid(grid: &CrosswordGrid) -> Vec<u8> {
    grid.iter_indexed().map(|(_, cell)| encode_cell(cell)).collect()
}

fn encode_cell(cell: Cell) -> u8 {
    match cell {
        Cell::Black => BLACK,
        Cell::Empty => EMPTY,
        Cell::Letter(ch) => ch as u8,
    }
}

pub fn decode_grid(bytes: &[u8], rows: usize, cols: usize) -> read::Result<CrosswordGrid> {
    let needed = rows * cols;
    if bytes.len() < needed {
        return Err(read::Error::Truncated { context: "solution grid", needed: needed - bytes.len() });
    }

    let mut grid = CrosswordGrid::new(rows, cols).map_err(|_| read::Error::InvalidGeometry { rows, cols })?;

    for (i, &byte) in bytes[..needed].iter().enumerate() {
        let pos = Position::new(i / cols, i % cols);
        let cell = match byte {
            BLACK => Cell::Black,
            EMPTY => Cell::Empty,
            letter => Cell::Letter(letter as char),
        };
        grid.set_cell(pos.row, pos.col, cell, crate::Symmetry::None)
            .expect("decoded position is within the grid it was sized from");
    }

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Symmetry;

    #[test]
    fn round_trips_through_encode_decode() {
        let mut grid = CrosswordGrid::new(2, 2).unwrap();
        grid.set_cell(0, 0, Cell::Black, Symmetry::None).unwrap();
        grid.set_cell(0, 1, Cell::Letter('A'), Symmetry::None).unwrap();

        let bytes = encode_grid(&grid);
        let decoded = decode_grid(&bytes, 2, 2).unwrap();

        assert_eq!(decoded, grid);
    }
}
