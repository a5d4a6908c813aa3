use std::fmt;

use puzzled_core::Offset;

/// The axis an [`Entry`](crate::Entry) runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// The offset that advances one cell further into the entry.
    pub fn step(self) -> Offset {
        match self {
            Direction::Across => Offset::RIGHT,
            Direction::Down => Offset::DOWN,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "A"),
            Direction::Down => write!(f, "D"),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    #[serde(rename = "Direction", rename_all = "lowercase")]
    enum DirectionData {
        Across,
        Down,
    }

    impl From<super::Direction> for DirectionData {
        fn from(dir: super::Direction) -> Self {
            match dir {
                super::Direction::Across => DirectionData::Across,
                super::Direction::Down => DirectionData::Down,
            }
        }
    }

    impl From<DirectionData> for super::Direction {
        fn from(data: DirectionData) -> Self {
            match data {
                DirectionData::Across => super::Direction::Across,
                DirectionData::Down => super::Direction::Down,
            }
        }
    }

    impl Serialize for super::Direction {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            DirectionData::from(*self).serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for super::Direction {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            DirectionData::deserialize(deserializer).map(super::Direction::from)
        }
    }
}
