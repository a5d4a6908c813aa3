//! Error types for the two directions of the codec; kept apart because a
//! decode failure and an encode failure are never the same shape of thing.

/// Failures that can occur while decoding a `.puz` byte stream.
pub mod read {
    #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
    pub enum Error {
        #[error("bytes 0x02..0x0E are not the ACROSS&DOWN magic")]
        InvalidMagic,

        #[error("grid dimensions {rows}x{cols} are outside the supported range of 1..=50")]
        InvalidGeometry { rows: usize, cols: usize },

        #[error("buffer ended while reading {context} (needed {needed} more byte(s))")]
        Truncated { context: &'static str, needed: usize },
    }

    pub type Result<T> = std::result::Result<T, Error>;
}

/// Failures that can occur while encoding a `.puz` byte stream.
pub mod write {
    #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
    pub enum Error {
        #[error("{field} is {len} bytes long, exceeding its {cap}-byte cap")]
        EncodeCapExceeded { field: &'static str, len: usize, cap: usize },
    }

    pub type Result<T> = std::result::Result<T, Error>;
}
