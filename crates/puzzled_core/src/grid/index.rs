use std::ops;

use crate::{Grid, Position};

impl<T> Grid<T> {
    pub fn get<P>(&self, pos: P) -> Option<&T>
    where
        P: Into<Position>,
    {
        let idx = self.index(pos.into())?;
        self.data.get(idx)
    }

    pub fn get_mut<P>(&mut self, pos: P) -> Option<&mut T>
    where
        P: Into<Position>,
    {
        let idx = self.index(pos.into())?;
        self.data.get_mut(idx)
    }

    pub fn index(&self, pos: Position) -> Option<usize> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }

        Some(pos.row * self.cols + pos.col)
    }

    pub fn position(&self, idx: usize) -> Option<Position> {
        if idx >= self.data.len() {
            return None;
        }

        Some(Position::new(idx / self.cols, idx % self.cols))
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }
}

impl<T, P> ops::Index<P> for Grid<T>
where
    P: Into<Position>,
{
    type Output = T;

    fn index(&self, pos: P) -> &Self::Output {
        let pos: Position = pos.into();
        let (rows, cols) = (self.rows, self.cols);

        self.get(pos)
            .unwrap_or_else(|| panic!("position {pos} out of bounds for a {rows}x{cols} grid"))
    }
}

impl<T, P> ops::IndexMut<P> for Grid<T>
where
    P: Into<Position>,
{
    fn index_mut(&mut self, pos: P) -> &mut Self::Output {
        let pos: Position = pos.into();
        let (rows, cols) = (self.rows, self.cols);

        self.get_mut(pos)
            .unwrap_or_else(|| panic!("position {pos} out of bounds for a {rows}x{cols} grid"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_through_position() {
        let grid: Grid<u8> = Grid::new(3, 4).unwrap();
        let pos = Position::new(2, 1);
        let idx = grid.index(pos).unwrap();
        assert_eq!(grid.position(idx), Some(pos));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_panics_out_of_bounds() {
        let grid: Grid<u8> = Grid::new(2, 2).unwrap();
        let _ = grid[(5, 5)];
    }
}
