//! Errors raised by frame and animation edits.

/// Frame store errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{axis} index {index} out of range (len {len})")]
    IndexOutOfRange {
        axis: &'static str,
        index: usize,
        len: usize,
    },
    #[error("Animation must contain at least one frame")]
    EmptyAnimation,
    #[error("Frame must have at least one row and one column")]
    EmptyFrame,
    #[error("Frame of {rows}x{cols} exceeds {max} rows or columns")]
    FrameTooLarge { rows: usize, cols: usize, max: usize },
    #[error("Row {row} has {found} pixels, expected {expected}")]
    RaggedFrame {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Invalid pixel {ch:?} at row {row}, column {col}")]
    InvalidPixel { row: usize, col: usize, ch: char },
    #[error("Frame {frame} is {found}, animation is {expected}")]
    DimensionMismatch {
        frame: usize,
        expected: super::Dimensions,
        found: super::Dimensions,
    },
}
