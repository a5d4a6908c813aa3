/// Structural errors raised by the grid and word-index layer.
///
/// Autofill and the `.puz` codec define their own error types
/// ([`autofill::TruncationReason`](crate::autofill::TruncationReason),
/// [`puz::read::Error`](crate::puz::read::Error),
/// [`puz::write::Error`](crate::puz::write::Error)) because their failure
/// modes don't fit this one: autofill never errors out (see
/// [`AutofillStatus`](crate::autofill::AutofillStatus)), and the codec's
/// failures are about byte layout, not grid geometry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Dimensions outside `1..=50` on either side, or rows of unequal width
    /// given to [`CrosswordGrid::from_rows`](crate::CrosswordGrid::from_rows).
    #[error("grid dimensions {rows}x{cols} are outside the supported range of 1..=50, or its rows have unequal width")]
    InvalidGeometry { rows: usize, cols: usize },

    #[error("position ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
