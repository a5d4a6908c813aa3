use std::fmt;
use std::ops;

use crate::Offset;

/// 2-dimensional coordinate into a [`Grid`](crate::Grid).
///
/// An [`Offset`] can be added to or subtracted from a position to reach a
/// neighboring one; arithmetic saturates at zero rather than wrapping or
/// panicking, so callers never need to guard against negative coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Row (y) coordinate.
    pub row: usize,
    /// Column (x) coordinate.
    pub col: usize,
}

impl Position {
    /// The top-left position, `(0, 0)`.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Reading-order comparison key: row first, then column.
    pub fn reading_order_key(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn offset(&self, offset: Offset) -> Self {
        let row = (self.row as isize)
            .saturating_add(offset.rows)
            .clamp(0, isize::MAX) as usize;
        let col = (self.col as isize)
            .saturating_add(offset.cols)
            .clamp(0, isize::MAX) as usize;

        Self { row, col }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position::new(row, col)
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl ops::Add<Offset> for Position {
    type Output = Self;

    fn add(self, offset: Offset) -> Self {
        self.offset(offset)
    }
}

impl ops::Sub<Offset> for Position {
    type Output = Self;

    fn sub(self, offset: Offset) -> Self {
        self.offset(-offset)
    }
}

impl ops::AddAssign<Offset> for Position {
    fn add_assign(&mut self, offset: Offset) {
        *self = *self + offset;
    }
}

impl ops::SubAssign<Offset> for Position {
    fn sub_assign(&mut self, offset: Offset) {
        *self = *self - offset;
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Serialize};

    use crate::Position;

    type PositionData = (usize, usize);

    impl Serialize for Position {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            PositionData::from(*self).serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Position {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            PositionData::deserialize(deserializer).map(Position::from)
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn offset_saturates_at_origin() {
        let pos = Position::new(0, 0);
        assert_eq!(pos + Offset::UP, Position::new(0, 0));
        assert_eq!(pos + Offset::LEFT, Position::new(0, 0));
    }

    #[test]
    fn offset_moves_in_both_axes() {
        let pos = Position::new(2, 2);
        assert_eq!(pos + Offset::DOWN, Position::new(3, 2));
        assert_eq!(pos - Offset::DOWN, Position::new(1, 2));
    }

    #[rstest]
    #[case(Offset::UP, Position::new(1, 2))]
    #[case(Offset::DOWN, Position::new(3, 2))]
    #[case(Offset::LEFT, Position::new(2, 1))]
    #[case(Offset::RIGHT, Position::new(2, 3))]
    fn offset_moves_one_step_in_the_expected_direction(#[case] offset: Offset, #[case] expected: Position) {
        let pos = Position::new(2, 2);
        assert_eq!(pos + offset, expected);
    }
}
