use std::ops::Neg;

/// A relative move between two [`Position`](crate::Position)s.
///
/// Positive `rows` move down, positive `cols` move right.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Offset {
    pub rows: isize,
    pub cols: isize,
}

impl Offset {
    pub const ZERO: Self = Self { rows: 0, cols: 0 };
    pub const LEFT: Self = Self { rows: 0, cols: -1 };
    pub const RIGHT: Self = Self { rows: 0, cols: 1 };
    pub const UP: Self = Self { rows: -1, cols: 0 };
    pub const DOWN: Self = Self { rows: 1, cols: 0 };
}

impl Neg for Offset {
    type Output = Offset;

    fn neg(self) -> Self::Output {
        Self {
            rows: -self.rows,
            cols: -self.cols,
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Serialize};

    use crate::Offset;

    type OffsetData = [isize; 2];

    impl Serialize for Offset {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            let data: OffsetData = [self.rows, self.cols];
            data.serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Offset {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let [rows, cols] = OffsetData::deserialize(deserializer)?;
            Ok(Offset { rows, cols })
        }
    }
}
